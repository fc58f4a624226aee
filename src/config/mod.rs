//! Settings loading for the backend.
//!
//! Values resolve per field from the process environment, then an env file
//! (`.env` by default, parsed with dotenvy without touching the process
//! environment), then hard-coded defaults. Loading is all-or-nothing: any
//! value that fails coercion aborts with a [`ConfigError`].

mod constants;
mod dsn;
mod error;
mod loader;
mod secret;
mod settings;
mod source;
mod value;

pub use constants::{
    ACCESS_TOKEN_EXPIRE_MINUTES, API_PREFIX, DATABASE_URI, DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
    DEFAULT_API_PREFIX, DEFAULT_ENV_FILE, DEFAULT_POSTGRES_DB, DEFAULT_POSTGRES_PASSWORD,
    DEFAULT_POSTGRES_SERVER, DEFAULT_POSTGRES_USER, FIELD_NAMES, POSTGRES_DB, POSTGRES_PASSWORD,
    POSTGRES_SERVER, POSTGRES_USER, SECRET_KEY,
};
pub use dsn::PostgresDsn;
pub use error::ConfigError;
pub use loader::{SettingsLoader, load_settings};
pub use secret::generate_secret_key;
pub use settings::Settings;
