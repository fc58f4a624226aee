//! Settings loader.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use super::constants::*;
use super::error::ConfigError;
use super::secret::generate_secret_key;
use super::settings::Settings;
use super::source::{Sources, process_env, read_env_file};

/// Builds [`Settings`] from the environment, an optional env file and defaults.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_file: Option<PathBuf>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
        }
    }
}

impl SettingsLoader {
    /// Loader reading `.env` from the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read entries from `path` instead of `.env`.
    pub fn env_file(mut self, path: impl AsRef<Path>) -> Self {
        self.env_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skip the env file layer entirely.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Load against the process environment.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        self.load_with(|name| env::var(name))
    }

    /// Load with `lookup` answering each declared variable name.
    pub(crate) fn load_with<F>(&self, lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        self.load_from(process_env(lookup)?)
    }

    /// Load with `vars` standing in for the process environment.
    ///
    /// The env file layer still applies beneath `vars`.
    pub fn load_from(&self, vars: HashMap<String, String>) -> Result<Settings, ConfigError> {
        let file = match &self.env_file {
            Some(path) => read_env_file(path)?,
            None => HashMap::new(),
        };
        let settings = build(&Sources::new(vars, file))?;

        info!(
            api_prefix = %settings.api_prefix,
            postgres_server = %settings.postgres_server,
            postgres_db = %settings.postgres_db,
            explicit_database_uri = settings.database_uri.is_some(),
            "Settings loaded"
        );
        Ok(settings)
    }
}

/// Resolve every field; the first failure aborts.
fn build(sources: &Sources) -> Result<Settings, ConfigError> {
    Ok(Settings {
        api_prefix: sources.resolve(API_PREFIX, || DEFAULT_API_PREFIX.to_string())?,
        secret_key: sources.resolve(SECRET_KEY, generate_secret_key)?,
        access_token_expire_minutes: sources.resolve(ACCESS_TOKEN_EXPIRE_MINUTES, || {
            DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES
        })?,
        postgres_server: sources.resolve(POSTGRES_SERVER, || DEFAULT_POSTGRES_SERVER.to_string())?,
        postgres_user: sources.resolve(POSTGRES_USER, || DEFAULT_POSTGRES_USER.to_string())?,
        postgres_password: sources.resolve(POSTGRES_PASSWORD, || {
            DEFAULT_POSTGRES_PASSWORD.to_string()
        })?,
        postgres_db: sources.resolve(POSTGRES_DB, || DEFAULT_POSTGRES_DB.to_string())?,
        database_uri: sources.resolve_optional(DATABASE_URI)?,
    })
}

/// Load settings from the process environment and `.env`.
pub fn load_settings() -> Result<Settings, ConfigError> {
    SettingsLoader::new().load()
}
