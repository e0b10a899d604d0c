use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,
    #[error("Invalid email format")]
    InvalidFormat,
}

/// Validated email address.
///
/// Stored trimmed and lowercased, so two spellings of the same address
/// compare equal and hash to the same bucket in account stores.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = value.expose_secret().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(Secret::new(normalized)))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn parse(raw: &str) -> Result<Email, EmailError> {
        Email::try_from(Secret::from(raw.to_string()))
    }

    #[test]
    fn test_valid_email_is_accepted() {
        let email = parse("a@x.com").unwrap();
        assert_eq!(email.as_ref().expose_secret(), "a@x.com");
    }

    #[test]
    fn test_email_is_normalized() {
        let email = parse("  Someone@Example.COM ").unwrap();
        assert_eq!(email.as_ref().expose_secret(), "someone@example.com");
        assert_eq!(email, parse("someone@example.com").unwrap());
    }

    #[test]
    fn test_empty_email_is_rejected() {
        assert_eq!(parse("").unwrap_err(), EmailError::Empty);
        assert_eq!(parse("   ").unwrap_err(), EmailError::Empty);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for raw in ["plainaddress", "@example.com", "someone@", "a b@x.com", "a@x"] {
            assert_eq!(parse(raw).unwrap_err(), EmailError::InvalidFormat, "{raw}");
        }
    }

    #[quickcheck]
    fn strings_without_at_sign_never_parse(raw: String) -> bool {
        raw.contains('@') || parse(&raw).is_err()
    }
}
