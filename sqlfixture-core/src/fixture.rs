//! Test-session fixture assembly.
//!
//! Resolves the five connection variables against their defaults, chooses the
//! access scope and bundles both into one immutable [`TestFixture`].
//! Assembly cannot fail: every absent variable has a default.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::env::{EnvironmentSource, FixtureEnv, ProcessEnvironment};
use crate::error::FixtureError;
use crate::models::Scope;
use crate::security::Credentials;

/// Connection configuration and access scope for a test session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestFixture {
    connection: ConnectionConfig,
    scope: Scope,
}

impl TestFixture {
    /// Builds the fixture from the process environment.
    ///
    /// # Example
    /// ```rust
    /// use sqlfixture_core::TestFixture;
    ///
    /// let fixture = TestFixture::from_env();
    /// assert_eq!(fixture.scope().is_private(), !fixture.connection().user().is_empty());
    /// ```
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnvironment)
    }

    /// Builds the fixture from any environment source.
    ///
    /// Each variable takes its value verbatim when present (an empty string
    /// counts as present) and its documented default otherwise.
    pub fn from_source<E: EnvironmentSource + ?Sized>(env: &E) -> Self {
        let driver = env.resolve(FixtureEnv::Driver);
        let server = env.resolve(FixtureEnv::Server);
        let database = env.resolve(FixtureEnv::Database);
        let user = env.resolve(FixtureEnv::User);
        let password = env.resolve(FixtureEnv::Password);

        let scope = Scope::for_user(&user);
        debug!(
            driver = %driver,
            server = %server,
            database = %database,
            user = %user,
            has_password = !password.is_empty(),
            scope = %scope,
            "Resolved test database fixture"
        );

        let connection =
            ConnectionConfig::from_parts(driver, server, database, Credentials::new(user, password));

        Self { connection, scope }
    }

    /// Returns the session-wide fixture.
    ///
    /// The process environment is read on the first call only; later calls
    /// return the same instance, including calls from parallel test threads.
    pub fn shared() -> &'static Self {
        static SESSION: OnceLock<TestFixture> = OnceLock::new();
        SESSION.get_or_init(Self::from_env)
    }

    /// The connection configuration.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// The access scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Splits the fixture into its connection and scope.
    pub fn into_parts(self) -> (ConnectionConfig, Scope) {
        (self.connection, self.scope)
    }

    /// Renders a JSON summary suitable for test logs; the password is omitted.
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_summary(&self) -> crate::Result<String> {
        serde_json::to_string(self)
            .map_err(|e| FixtureError::serialization("test fixture summary", e))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            scope: Scope::public_scope(),
        }
    }
}

impl std::fmt::Display for TestFixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.connection, self.scope)
    }
}
