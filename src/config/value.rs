//! Typed coercion of raw environment strings.

use super::dsn::PostgresDsn;

/// A type a raw environment value can be coerced into.
///
/// The error string explains the failure without echoing the raw value,
/// since some fields carry credentials.
pub(crate) trait SettingValue: Sized {
    fn parse_setting(raw: &str) -> Result<Self, String>;
}

impl SettingValue for String {
    fn parse_setting(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl SettingValue for i64 {
    fn parse_setting(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|_| "value is not a valid integer".to_string())
    }
}

impl SettingValue for PostgresDsn {
    fn parse_setting(raw: &str) -> Result<Self, String> {
        PostgresDsn::parse(raw)
    }
}
