//! Database connection configuration.
//!
//! This module provides the `ConnectionConfig` struct describing how the test
//! suite reaches its SQL Server database.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::env::FixtureEnv;
use crate::error::FixtureError;
use crate::security::Credentials;

/// Configuration for the test database connection.
///
/// Values are fixed once constructed; accessors hand out borrowed views.
///
/// # Security
/// The password is only reachable through [`ConnectionConfig::password`] and
/// [`ConnectionConfig::connection_string`]. `Debug`, `Display`,
/// [`ConnectionConfig::to_safe_string`] and serialization never include it.
///
/// # Example
/// ```rust
/// use sqlfixture_core::ConnectionConfig;
///
/// let config = ConnectionConfig::new("db.example.com".to_string())
///     .with_database("Flights".to_string())
///     .with_credentials("alice".to_string(), "secret".to_string());
///
/// assert!(config.validate().is_ok());
/// assert_eq!(
///     config.to_safe_string(),
///     "Driver={SQL Server};Server=db.example.com;Database=Flights;Uid=alice;Pwd=****;"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    driver: String,
    server: String,
    database: String,
    credentials: Credentials,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            driver: FixtureEnv::Driver.default_value().to_string(),
            server: FixtureEnv::Server.default_value().to_string(),
            database: FixtureEnv::Database.default_value().to_string(),
            credentials: Credentials::default(),
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectionConfig({}@{}/{})",
            self.driver, self.server, self.database
        )
        // Intentionally omit user and never include credentials
    }
}

impl ConnectionConfig {
    /// Creates a new connection config with the fixture defaults.
    pub fn new(server: String) -> Self {
        Self {
            server,
            ..Default::default()
        }
    }

    /// Builds a config from fully resolved values.
    pub fn from_parts(
        driver: String,
        server: String,
        database: String,
        credentials: Credentials,
    ) -> Self {
        Self {
            driver,
            server,
            database,
            credentials,
        }
    }

    /// Builder method to set the ODBC driver.
    pub fn with_driver(mut self, driver: String) -> Self {
        self.driver = driver;
        self
    }

    /// Builder method to set the database.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = database;
        self
    }

    /// Builder method to set the login.
    pub fn with_credentials(mut self, user: String, password: String) -> Self {
        self.credentials = Credentials::new(user, password);
        self
    }

    /// ODBC driver name.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Server host.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Login user; empty when the public identity is used.
    pub fn user(&self) -> &str {
        self.credentials.user()
    }

    /// Login password.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    /// The login credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Validates connection configuration parameters.
    ///
    /// Fixture assembly never calls this; suites that require a usable target
    /// can opt in.
    ///
    /// # Errors
    /// Returns error if a required value is empty or a password is supplied
    /// without a user
    pub fn validate(&self) -> crate::Result<()> {
        if self.driver.is_empty() {
            return Err(FixtureError::configuration("driver cannot be empty"));
        }

        if self.server.is_empty() {
            return Err(FixtureError::configuration("server cannot be empty"));
        }

        if self.database.is_empty() {
            return Err(FixtureError::configuration("database cannot be empty"));
        }

        if !self.credentials.has_user() && self.credentials.has_password() {
            return Err(FixtureError::configuration(
                "password supplied without a user",
            ));
        }

        Ok(())
    }

    /// Renders the ODBC connection string, password included.
    ///
    /// Without a user the string requests a trusted connection
    /// (`Trusted_Connection=Yes`), otherwise it carries `Uid` and `Pwd`.
    pub fn connection_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.render(false))
    }

    /// Renders the ODBC connection string with the password masked.
    pub fn to_safe_string(&self) -> String {
        self.render(true)
    }

    fn render(&self, mask_password: bool) -> String {
        let mut out = format!(
            "Driver={};Server={};Database={};",
            braced(&self.driver),
            quote_value(&self.server),
            quote_value(&self.database)
        );

        if self.credentials.has_user() {
            let password = if mask_password {
                "****".to_string()
            } else {
                quote_value(self.credentials.password())
            };
            out.push_str(&format!(
                "Uid={};Pwd={};",
                quote_value(self.credentials.user()),
                password
            ));
        } else {
            out.push_str("Trusted_Connection=Yes;");
        }

        out
    }
}

/// Wraps a value in `{}` and escapes `}` as `}}`.
fn braced(value: &str) -> String {
    format!("{{{}}}", value.replace('}', "}}"))
}

/// Quotes a value only when it would otherwise break attribute parsing.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.contains([';', '{', '}'])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace);

    if needs_quotes {
        braced(value)
    } else {
        value.to_string()
    }
}

/// Serialized view of a connection config; the password has no slot.
#[derive(Serialize)]
struct SafeConnectionConfig<'a> {
    driver: &'a str,
    server: &'a str,
    database: &'a str,
    user: &'a str,
}

impl Serialize for ConnectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SafeConnectionConfig {
            driver: &self.driver,
            server: &self.server,
            database: &self.database,
            user: self.credentials.user(),
        }
        .serialize(serializer)
    }
}

/// Deserialized form; omitted fields take the fixture defaults.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConnectionConfig {
    driver: String,
    server: String,
    database: String,
    user: String,
    password: String,
}

impl Default for RawConnectionConfig {
    fn default() -> Self {
        Self {
            driver: FixtureEnv::Driver.default_value().to_string(),
            server: FixtureEnv::Server.default_value().to_string(),
            database: FixtureEnv::Database.default_value().to_string(),
            user: FixtureEnv::User.default_value().to_string(),
            password: FixtureEnv::Password.default_value().to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for ConnectionConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawConnectionConfig::deserialize(deserializer)?;
        Ok(Self::from_parts(
            raw.driver,
            raw.server,
            raw.database,
            Credentials::new(raw.user, raw.password),
        ))
    }
}
