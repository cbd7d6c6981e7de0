//! Configuration types for the test database.
//!
//! - `ConnectionConfig`: driver, server, database and login
//!
//! # Security
//! The password lives in a zeroizing credential container and is excluded from
//! display, debug and serialized output.

mod connection;

pub use connection::ConnectionConfig;
