//! Environment variable names and default values.

// =============================================================================
// Variable names (matched case-sensitively)
// =============================================================================

pub const API_PREFIX: &str = "api_prefix";
pub const SECRET_KEY: &str = "secret_key";
pub const ACCESS_TOKEN_EXPIRE_MINUTES: &str = "access_token_expire_minutes";
pub const POSTGRES_SERVER: &str = "postgres_server";
pub const POSTGRES_USER: &str = "postgres_user";
pub const POSTGRES_PASSWORD: &str = "postgres_password";
pub const POSTGRES_DB: &str = "postgres_db";
pub const DATABASE_URI: &str = "database_uri";

/// Every variable the loader resolves, in declaration order.
pub const FIELD_NAMES: &[&str] = &[
    API_PREFIX,
    SECRET_KEY,
    ACCESS_TOKEN_EXPIRE_MINUTES,
    POSTGRES_SERVER,
    POSTGRES_USER,
    POSTGRES_PASSWORD,
    POSTGRES_DB,
    DATABASE_URI,
];

// =============================================================================
// Defaults
// =============================================================================

/// Env file read from the working directory unless overridden.
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// 8 days.
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 8;

pub const DEFAULT_POSTGRES_SERVER: &str = "localhost";
pub const DEFAULT_POSTGRES_USER: &str = "postgres";
pub const DEFAULT_POSTGRES_PASSWORD: &str = "postgres";
pub const DEFAULT_POSTGRES_DB: &str = "zerosmoke";

/// Random bytes behind a generated secret key.
pub const SECRET_KEY_BYTES: usize = 32;

/// Placeholder shown instead of secret material.
pub const REDACTED: &str = "[REDACTED]";
