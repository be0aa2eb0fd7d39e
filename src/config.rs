//! Service configuration

use std::collections::HashMap;

/// Connection-string entry used by the main floor fetcher.
pub const DEFAULT_CONNECTION: &str = "DefaultConnection";

/// Service configuration
///
/// Named connection strings, read-only to the data access layer.
#[derive(Debug, Clone, Default)]
pub struct Config {
    connection_strings: HashMap<String, String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` populates the `"DefaultConnection"` entry. A missing
    /// variable is not an error here; the fetcher reports the absent entry.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.set_connection_string(DEFAULT_CONNECTION, url);
        }
        config
    }

    /// Register or replace a named connection string.
    pub fn set_connection_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.connection_strings.insert(name.into(), value.into());
    }

    /// Look up a named connection string.
    ///
    /// Returns `None` when the entry is absent or empty.
    pub fn connection_string(&self, name: &str) -> Option<&str> {
        self.connection_strings
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entry_is_none() {
        let config = Config::default();
        assert_eq!(config.connection_string(DEFAULT_CONNECTION), None);
    }

    #[test]
    fn empty_entry_is_none() {
        let mut config = Config::default();
        config.set_connection_string(DEFAULT_CONNECTION, "");
        assert_eq!(config.connection_string(DEFAULT_CONNECTION), None);
    }

    #[test]
    fn set_then_get() {
        let mut config = Config::default();
        config.set_connection_string(DEFAULT_CONNECTION, "mysql://pos@localhost/store");
        assert_eq!(
            config.connection_string(DEFAULT_CONNECTION),
            Some("mysql://pos@localhost/store")
        );
        assert_eq!(config.connection_string("ReportingConnection"), None);
    }
}
