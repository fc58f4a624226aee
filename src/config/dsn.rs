//! Validated PostgreSQL connection string.

use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Schemes accepted for a PostgreSQL DSN.
const ALLOWED_SCHEMES: &[&str] = &[
    "postgres",
    "postgresql",
    "postgresql+asyncpg",
    "postgresql+pg8000",
    "postgresql+psycopg",
    "postgresql+psycopg2",
    "postgresql+psycopg2cffi",
    "postgresql+py-postgresql",
    "postgresql+pygresql",
];

/// Mask substituted for the password in redacted output.
const PASSWORD_MASK: &str = "***";

/// A PostgreSQL DSN that passed validation.
///
/// The original string is kept exactly as supplied; parsing only checks it.
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresDsn {
    raw: String,
}

impl PostgresDsn {
    /// Validate `raw` as `scheme://[user[:password]@]host[:port][/path]`.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let url = Url::parse(raw).map_err(|e| format!("invalid DSN: {}", e))?;

        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(format!(
                "unsupported DSN scheme {:?}, expected one of: {}",
                url.scheme(),
                ALLOWED_SCHEMES.join(", ")
            ));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => {}
            _ => return Err("DSN is missing a host".to_string()),
        }

        if url.password().is_some() && url.username().is_empty() {
            return Err("DSN has a password but no user".to_string());
        }

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The DSN with any password masked.
    pub fn redacted(&self) -> String {
        match Url::parse(&self.raw) {
            Ok(mut url) if url.password().is_some() => {
                if url.set_password(Some(PASSWORD_MASK)).is_ok() {
                    url.to_string()
                } else {
                    super::constants::REDACTED.to_string()
                }
            }
            _ => self.raw.clone(),
        }
    }
}

impl fmt::Debug for PostgresDsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PostgresDsn").field(&self.redacted()).finish()
    }
}

impl Serialize for PostgresDsn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.redacted())
    }
}

impl AsRef<str> for PostgresDsn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
