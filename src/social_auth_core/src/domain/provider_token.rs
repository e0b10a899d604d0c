use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderTokenError {
    #[error("Provider token cannot be empty")]
    Empty,
}

/// Bearer token issued by an external identity provider.
///
/// Opaque to this crate beyond being non-blank.
#[derive(Debug, Clone)]
pub struct ProviderToken(Secret<String>);

impl TryFrom<Secret<String>> for ProviderToken {
    type Error = ProviderTokenError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(ProviderTokenError::Empty);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for ProviderToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
