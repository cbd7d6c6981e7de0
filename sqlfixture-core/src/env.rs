//! Environment access for fixture assembly.
//!
//! The fixture reads five optional variables. Lookups go through the
//! [`EnvironmentSource`] trait so the same assembly logic runs against the
//! process environment or an in-memory map.

use std::collections::{BTreeMap, HashMap};

/// Environment variables consumed by the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureEnv {
    /// ODBC driver name.
    Driver,
    /// Server host.
    Server,
    /// Database name.
    Database,
    /// Login user; an empty user selects the public scope.
    User,
    /// Login password.
    Password,
}

impl FixtureEnv {
    /// Every variable, in connection-string order.
    pub const ALL: [Self; 5] = [
        Self::Driver,
        Self::Server,
        Self::Database,
        Self::User,
        Self::Password,
    ];

    /// Returns the environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "DRIVER",
            Self::Server => "SERVER",
            Self::Database => "DATABASE",
            Self::User => "USER",
            Self::Password => "PASSWORD",
        }
    }

    /// Returns the value used when the variable is absent.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Driver => "SQL Server",
            Self::Server => "localhost",
            Self::Database => "AirlineTestDB",
            Self::User | Self::Password => "",
        }
    }

    /// Whether the value must be kept out of logs.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl std::fmt::Display for FixtureEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of environment variable values.
///
/// Implementations return `None` only when the variable is absent. A variable
/// set to the empty string is present and yields `Some(String::new())`.
pub trait EnvironmentSource {
    /// Gets a variable, or `None` if it is not set.
    fn get_var(&self, key: &str) -> Option<String>;

    /// Gets a variable or falls back to `default`.
    fn get_var_or(&self, key: &str, default: &str) -> String {
        self.get_var(key).unwrap_or_else(|| default.to_string())
    }

    /// Resolves a fixture variable against its documented default.
    fn resolve(&self, var: FixtureEnv) -> String {
        self.get_var_or(var.as_str(), var.default_value())
    }
}

/// Reads from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        let raw = std::env::var_os(key)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    variable = key,
                    "Environment variable is not valid Unicode; using lossy conversion"
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

impl<S: std::hash::BuildHasher> EnvironmentSource for HashMap<String, String, S> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvironmentSource for BTreeMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &T {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        let names: Vec<&str> = FixtureEnv::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(names, ["DRIVER", "SERVER", "DATABASE", "USER", "PASSWORD"]);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(FixtureEnv::Driver.default_value(), "SQL Server");
        assert_eq!(FixtureEnv::Server.default_value(), "localhost");
        assert_eq!(FixtureEnv::Database.default_value(), "AirlineTestDB");
        assert_eq!(FixtureEnv::User.default_value(), "");
        assert_eq!(FixtureEnv::Password.default_value(), "");
    }

    #[test]
    fn test_only_password_is_secret() {
        let secrets: Vec<FixtureEnv> = FixtureEnv::ALL
            .into_iter()
            .filter(|v| v.is_secret())
            .collect();
        assert_eq!(secrets, [FixtureEnv::Password]);
    }

    #[test]
    fn test_map_source_resolve() {
        let mut env = HashMap::new();
        env.insert("SERVER".to_string(), "db.internal".to_string());
        env.insert("USER".to_string(), String::new());

        assert_eq!(env.resolve(FixtureEnv::Server), "db.internal");
        assert_eq!(env.resolve(FixtureEnv::Driver), "SQL Server");
        // Present-but-empty is not absent
        assert_eq!(env.get_var("USER"), Some(String::new()));
        assert_eq!(env.resolve(FixtureEnv::User), "");
    }

    #[test]
    fn test_get_var_or_does_not_trim() {
        let mut env = BTreeMap::new();
        env.insert("DATABASE".to_string(), "  Mixed Case DB ".to_string());

        assert_eq!(env.get_var_or("DATABASE", "fallback"), "  Mixed Case DB ");
        assert_eq!(env.get_var_or("MISSING", "fallback"), "fallback");
    }

    #[test]
    fn test_process_env_reads_value() {
        temp_env::with_vars(
            [("SQLFIXTURE_ENV_PROBE", Some("probe-value"))],
            || {
                assert_eq!(
                    ProcessEnvironment.get_var("SQLFIXTURE_ENV_PROBE"),
                    Some("probe-value".to_string())
                );
            },
        );
    }

    #[test]
    fn test_process_env_absent() {
        temp_env::with_var_unset("SQLFIXTURE_ENV_PROBE", || {
            assert_eq!(ProcessEnvironment.get_var("SQLFIXTURE_ENV_PROBE"), None);
        });
    }
}
