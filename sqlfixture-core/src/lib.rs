//! Environment-driven SQL Server connection fixture for test suites.
//!
//! A test session reads five optional environment variables (`DRIVER`,
//! `SERVER`, `DATABASE`, `USER`, `PASSWORD`), falls back to fixed defaults for
//! the absent ones, and gets back one immutable [`TestFixture`]: the
//! [`ConnectionConfig`] plus the access [`Scope`] implied by the user.
//!
//! # Security Guarantees
//! - Credentials are held in zeroizing containers
//! - Passwords never appear in logs, `Debug`, `Display` or serialized output
//! - Nothing here opens a connection; the fixture only describes one
//!
//! # Example
//! ```rust
//! use std::collections::HashMap;
//! use sqlfixture_core::{Scope, TestFixture};
//!
//! let env: HashMap<String, String> = [("USER", "alice"), ("PASSWORD", "secret")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let (connection, scope) = TestFixture::from_source(&env).into_parts();
//! assert_eq!(connection.database(), "AirlineTestDB");
//! assert_eq!(scope, Scope::Private);
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod models;
pub mod security;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use env::{EnvironmentSource, FixtureEnv, ProcessEnvironment};
pub use error::{FixtureError, Result};
pub use fixture::TestFixture;
pub use logging::{init_logging, init_test_logging};
pub use models::Scope;
pub use security::Credentials;
