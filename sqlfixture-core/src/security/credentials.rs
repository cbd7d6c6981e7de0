//! Secure credential container with automatic memory zeroing.
//!
//! Both the user and the password are held in `Zeroizing` containers and are
//! cleared from memory when the credentials are dropped. The password never
//! appears in debug output.

use zeroize::Zeroizing;

/// Login credentials for the test database.
///
/// An empty user means the fixture runs under the shared public identity;
/// see [`crate::Scope::for_user`].
///
/// # Example
///
/// ```rust
/// use sqlfixture_core::security::Credentials;
///
/// let creds = Credentials::new("alice".to_string(), "secret".to_string());
/// assert_eq!(creds.user(), "alice");
/// assert!(creds.has_password());
/// assert!(!format!("{creds:?}").contains("secret"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    user: Zeroizing<String>,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Creates new credentials with automatic memory zeroing.
    pub fn new(user: String, password: String) -> Self {
        Self {
            user: Zeroizing::new(user),
            password: Zeroizing::new(password),
        }
    }

    /// Gets the user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Gets the password.
    ///
    /// Callers must not log the returned value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether a user name was supplied.
    pub fn has_user(&self) -> bool {
        !self.user.is_empty()
    }

    /// Whether a non-empty password was supplied, without exposing it.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user.as_str())
            .field("password", &if self.has_password() { "****" } else { "" })
            .finish()
    }
}
