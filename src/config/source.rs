//! Layered lookup of raw setting values.
//!
//! Priority per field: explicit environment variable, then env file entry,
//! then the caller's default.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use tracing::debug;

use super::constants::FIELD_NAMES;
use super::error::ConfigError;
use super::value::SettingValue;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Environment,
    EnvFile,
    Default,
}

/// Raw values from the environment and env file layers.
#[derive(Debug, Default)]
pub(crate) struct Sources {
    env: HashMap<String, String>,
    file: HashMap<String, String>,
}

impl Sources {
    pub(crate) fn new(env: HashMap<String, String>, file: HashMap<String, String>) -> Self {
        Self { env, file }
    }

    /// Raw value for `key` and the layer that supplied it. Keys match exactly.
    pub(crate) fn lookup(&self, key: &str) -> Option<(&str, Origin)> {
        if let Some(v) = self.env.get(key) {
            return Some((v.as_str(), Origin::Environment));
        }
        self.file
            .get(key)
            .map(|v| (v.as_str(), Origin::EnvFile))
    }

    /// Resolve `key` into `T`, falling back to `default` when no layer has it.
    pub(crate) fn resolve<T, F>(&self, key: &'static str, default: F) -> Result<T, ConfigError>
    where
        T: SettingValue,
        F: FnOnce() -> T,
    {
        match self.resolve_optional(key)? {
            Some(value) => Ok(value),
            None => {
                debug!(field = key, origin = ?Origin::Default, "Setting resolved");
                Ok(default())
            }
        }
    }

    /// Resolve `key` into `T`, or `None` when no layer has it.
    pub(crate) fn resolve_optional<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: SettingValue,
    {
        let Some((raw, origin)) = self.lookup(key) else {
            return Ok(None);
        };
        let value = T::parse_setting(raw).map_err(|reason| ConfigError::validation(key, reason))?;
        debug!(field = key, origin = ?origin, "Setting resolved");
        Ok(Some(value))
    }
}

/// Snapshot the declared variables through `lookup` (`std::env::var` in production).
///
/// Only names in `FIELD_NAMES` are read, so unrelated non-Unicode variables
/// are never touched.
pub(crate) fn process_env<F>(lookup: F) -> Result<HashMap<String, String>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    let mut vars = HashMap::new();
    for &name in FIELD_NAMES {
        match lookup(name) {
            Ok(value) => {
                vars.insert(name.to_string(), value);
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::validation(
                    name,
                    "environment variable is not valid unicode",
                ));
            }
        }
    }
    Ok(vars)
}

/// Parse an env file into a map without touching the process environment.
///
/// A missing file yields an empty map. Later duplicate keys win.
pub(crate) fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "Env file not found, skipping");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(to_error(e)),
    };

    let mut entries = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(to_error)?;
        if !FIELD_NAMES.contains(&key.as_str()) {
            debug!(path = %path.display(), key = %key, "Ignoring unknown key in env file");
            continue;
        }
        entries.insert(key, value);
    }

    debug!(path = %path.display(), entries = entries.len(), "Env file loaded");
    Ok(entries)
}
