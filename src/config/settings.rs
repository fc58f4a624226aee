//! The settings object and its derived values.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use super::constants::REDACTED;
use super::dsn::PostgresDsn;

/// Backend settings, built once at process entry and shared by reference.
///
/// Construct through [`SettingsLoader`](super::SettingsLoader) or
/// [`load_settings`](super::load_settings). There is no reload.
#[derive(Clone, Serialize)]
pub struct Settings {
    /// Path prefix for versioned API routes.
    pub api_prefix: String,
    #[serde(serialize_with = "redact")]
    pub(crate) secret_key: String,
    /// Access token lifetime in minutes.
    pub access_token_expire_minutes: i64,
    pub postgres_server: String,
    pub postgres_user: String,
    #[serde(serialize_with = "redact")]
    pub postgres_password: String,
    pub postgres_db: String,
    /// Explicit connection string, only set when one was supplied.
    pub database_uri: Option<PostgresDsn>,
}

impl Settings {
    /// Secret used to sign tokens.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Connection string assembled from the four postgres fields.
    ///
    /// Recomputed on every call.
    pub fn sync_database_uri(&self) -> String {
        format!(
            "postgresql://{}:{}@{}/{}",
            self.postgres_user, self.postgres_password, self.postgres_server, self.postgres_db
        )
    }

    /// Connection string to use: the explicit DSN if supplied, otherwise the assembled one.
    pub fn database_url(&self) -> String {
        match &self.database_uri {
            Some(dsn) => dsn.as_str().to_string(),
            None => self.sync_database_uri(),
        }
    }

    /// Token lifetime; zero or negative minutes clamp to `Duration::ZERO`.
    pub fn access_token_expiry(&self) -> Duration {
        match u64::try_from(self.access_token_expire_minutes) {
            Ok(minutes) => Duration::from_secs(minutes.saturating_mul(60)),
            Err(_) => Duration::ZERO,
        }
    }

    /// JSON-friendly view with secrets masked.
    pub fn redacted(&self) -> serde_json::Value {
        // Serializing plain strings and integers into a Value cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_prefix", &self.api_prefix)
            .field("secret_key", &REDACTED)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("postgres_server", &self.postgres_server)
            .field("postgres_user", &self.postgres_user)
            .field("postgres_password", &REDACTED)
            .field("postgres_db", &self.postgres_db)
            .field("database_uri", &self.database_uri)
            .finish()
    }
}

fn redact<T: ?Sized, S: Serializer>(_: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}
