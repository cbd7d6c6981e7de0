//! Security utilities for credential protection.
//!
//! # Security Guarantees
//! - Credentials are stored in `Zeroizing` containers for automatic memory clearing
//! - Passwords are redacted from debug output, display output and serialization
//!
//! Connection-string redaction lives in [`crate::error::redact_connection_string`].

mod credentials;

pub use credentials::Credentials;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::redact_connection_string;

    #[test]
    fn test_credentials_zeroization() {
        let creds = Credentials::new("user".to_string(), "password".to_string());
        assert_eq!(creds.user(), "user");
        assert!(creds.has_password());
        // Credentials will be automatically zeroized on drop
    }

    #[test]
    fn test_redacted_string_never_holds_credential_password() {
        let config = crate::ConnectionConfig::new("db".to_string())
            .with_credentials("sa".to_string(), "Pa55;word".to_string());
        let redacted = redact_connection_string(&config.connection_string());

        assert!(!redacted.contains("Pa55"));
        assert!(!redacted.contains("word"));
        assert!(redacted.contains("Uid=sa"));
    }
}
