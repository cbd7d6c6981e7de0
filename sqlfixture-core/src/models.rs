//! Access scope model.
//!
//! Operations against the test database run either under the shared public
//! identity or under the identity of the supplied user.

use serde::{Deserialize, Serialize};

/// Access scope for operations performed by the test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Shared identity; selected when no user is supplied
    #[default]
    Public,
    /// User-specific identity
    Private,
}

impl Scope {
    /// The public scope.
    #[must_use]
    pub const fn public_scope() -> Self {
        Self::Public
    }

    /// The private scope.
    #[must_use]
    pub const fn private_scope() -> Self {
        Self::Private
    }

    /// Chooses the scope for a resolved user name.
    ///
    /// Any non-empty user, including one made only of whitespace, selects
    /// [`Scope::Private`].
    ///
    /// # Example
    /// ```rust
    /// use sqlfixture_core::Scope;
    ///
    /// assert_eq!(Scope::for_user(""), Scope::Public);
    /// assert_eq!(Scope::for_user("alice"), Scope::Private);
    /// ```
    #[must_use]
    pub const fn for_user(user: &str) -> Self {
        if user.is_empty() {
            Self::Public
        } else {
            Self::Private
        }
    }

    /// Whether this is the user-specific scope.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    /// SQL keyword for the scope, as used in external library statements.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}
