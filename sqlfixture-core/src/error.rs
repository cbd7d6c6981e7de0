//! Error types with credential sanitization.
//!
//! Fixture assembly itself cannot fail. The errors here cover the opt-in
//! surfaces around it: validation, logging setup and serialization. None of
//! them ever carry a password.

use thiserror::Error;

/// Main error type for fixture operations.
///
/// # Security
/// All error messages are sanitized to prevent credential leakage.
/// Connection strings and passwords are never included in error output.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        /// What was being serialized
        context: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with `FixtureError`
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Keys whose values are masked by [`redact_connection_string`].
const SECRET_KEYS: [&str; 2] = ["pwd", "password"];

/// Masks passwords in an ODBC-style connection string.
///
/// The string is read as `key=value` attributes separated by `;`. A value
/// starting with `{` runs to the matching `}` (with `}}` as an escaped brace),
/// so a quoted password containing `;` is masked in full. Any attribute whose
/// key is `Pwd` or `Password` (case-insensitive, surrounding whitespace
/// ignored) has its value replaced with `****`. Everything else is kept
/// verbatim.
///
/// # Example
///
/// ```rust
/// use sqlfixture_core::error::redact_connection_string;
///
/// let sanitized = redact_connection_string("Server=db;Uid=sa;Pwd={se;cret};");
/// assert_eq!(sanitized, "Server=db;Uid=sa;Pwd=****;");
/// assert!(!sanitized.contains("cret"));
/// ```
pub fn redact_connection_string(connection_string: &str) -> String {
    let mut redacted = String::with_capacity(connection_string.len());
    let mut rest = connection_string;

    while !rest.is_empty() {
        let (attribute, tail) = split_attribute(rest);
        match attribute.split_once('=') {
            Some((key, _)) if is_secret_key(key) => {
                redacted.push_str(key);
                redacted.push_str("=****");
            }
            _ => redacted.push_str(attribute),
        }
        if let Some(tail) = tail {
            redacted.push(';');
            rest = tail;
        } else {
            break;
        }
    }

    redacted
}

/// Splits off the first attribute, honoring `{...}` quoted values.
///
/// Returns the attribute text and the remainder after its `;` separator, or
/// `None` when the attribute ran to the end of the input.
fn split_attribute(input: &str) -> (&str, Option<&str>) {
    let first_separator = input.find(';');
    let value_start = input
        .find('=')
        .filter(|eq| first_separator.is_none_or(|sep| *eq < sep))
        .map(|eq| eq.saturating_add(1));

    let mut search_from = 0;
    if let Some(start) = value_start {
        let value = &input[start..];
        if value.trim_start().starts_with('{') {
            let open = value.find('{').map_or(start, |o| start.saturating_add(o));
            match find_closing_brace(input, open.saturating_add(1)) {
                Some(close) => search_from = close,
                // Unterminated brace: the rest of the input is the value
                None => return (input, None),
            }
        }
    }

    match input[search_from..].find(';') {
        Some(offset) => {
            let end = search_from.saturating_add(offset);
            (&input[..end], Some(&input[end.saturating_add(1)..]))
        }
        None => (input, None),
    }
}

/// Finds the `}` closing a quoted value, skipping `}}` escapes.
fn find_closing_brace(input: &str, from: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut index = from;
    while index < bytes.len() {
        if bytes[index] == b'}' {
            if bytes.get(index.saturating_add(1)) != Some(&b'}') {
                return Some(index);
            }
            index = index.saturating_add(1);
        }
        index = index.saturating_add(1);
    }
    None
}

fn is_secret_key(key: &str) -> bool {
    let key = key.trim();
    SECRET_KEYS
        .iter()
        .any(|secret| key.eq_ignore_ascii_case(secret))
}

impl FixtureError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_connection_string() {
        let redacted = redact_connection_string(
            "Driver={SQL Server};Server=localhost;Uid=alice;Pwd=secret;",
        );

        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("Uid=alice"));
        assert!(redacted.contains("Pwd=****"));
        assert!(redacted.contains("Server=localhost"));
    }

    #[test]
    fn test_redact_connection_string_password_key_variants() {
        assert_eq!(
            redact_connection_string("PASSWORD=hunter2;Server=x"),
            "PASSWORD=****;Server=x"
        );
        assert_eq!(redact_connection_string(" pwd =a=b"), " pwd =****");
    }

    #[test]
    fn test_redact_braced_password_with_separators() {
        let redacted = redact_connection_string("Uid=bob;Pwd={a;b}}c;d};Database=Air;");

        assert_eq!(redacted, "Uid=bob;Pwd=****;Database=Air;");
    }

    #[test]
    fn test_redact_unterminated_brace_masks_remainder() {
        let redacted = redact_connection_string("Server=x;Pwd={open;Database=y");

        assert_eq!(redacted, "Server=x;Pwd=****");
    }

    #[test]
    fn test_redact_attribute_without_value() {
        let redacted = redact_connection_string("Encrypt;Pwd={x};Server=y");

        assert_eq!(redacted, "Encrypt;Pwd=****;Server=y");
    }

    #[test]
    fn test_redact_connection_string_no_password() {
        let conn = "Driver={SQL Server};Server=localhost;Trusted_Connection=Yes;";
        assert_eq!(redact_connection_string(conn), conn);
    }

    #[test]
    fn test_redact_empty_string() {
        assert_eq!(redact_connection_string(""), "");
    }

    #[test]
    fn test_error_creation() {
        let error = FixtureError::configuration("server cannot be empty");
        assert!(error.to_string().contains("server cannot be empty"));
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        #[allow(clippy::unwrap_used)]
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let error = FixtureError::serialization("fixture summary", source);

        assert!(error.to_string().contains("fixture summary"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
