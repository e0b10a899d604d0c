use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{provider_token::ProviderToken, remote_identity::RemoteIdentity};

#[derive(Debug, Error)]
pub enum IdentityResolverError {
    #[error("Token rejected by identity provider: {0}")]
    InvalidToken(String),
    #[error("Identity provider unreachable: {0}")]
    Unreachable(String),
    #[error("Malformed identity provider response: {0}")]
    MalformedResponse(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for exchanging a provider token for the caller's profile.
///
/// `Ok(None)` means the provider accepted the token but returned no usable
/// identity for it.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(
        &self,
        token: &ProviderToken,
    ) -> Result<Option<RemoteIdentity>, IdentityResolverError>;
}

#[async_trait]
impl<T> IdentityResolver for Arc<T>
where
    T: IdentityResolver + ?Sized,
{
    async fn resolve(
        &self,
        token: &ProviderToken,
    ) -> Result<Option<RemoteIdentity>, IdentityResolverError> {
        (**self).resolve(token).await
    }
}
