use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, local_account::LocalAccount, remote_identity::RemoteIdentity};

// Account store port traits and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DuplicateEmail, Self::DuplicateEmail)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Read side of the account store.
///
/// An absent account is `Ok(None)`; `Err` is reserved for storage failures.
#[async_trait]
pub trait AccountReader: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<LocalAccount>, AccountStoreError>;
}

/// Write side of the account store.
///
/// Implementations must reject a second account for the same email with
/// `AccountStoreError::DuplicateEmail`.
#[async_trait]
pub trait AccountWriter: Send + Sync {
    async fn create_from_remote_identity(
        &self,
        identity: &RemoteIdentity,
    ) -> Result<LocalAccount, AccountStoreError>;
}

#[async_trait]
impl<T> AccountReader for Arc<T>
where
    T: AccountReader + ?Sized,
{
    async fn find_by_email(&self, email: &Email) -> Result<Option<LocalAccount>, AccountStoreError> {
        (**self).find_by_email(email).await
    }
}

#[async_trait]
impl<T> AccountWriter for Arc<T>
where
    T: AccountWriter + ?Sized,
{
    async fn create_from_remote_identity(
        &self,
        identity: &RemoteIdentity,
    ) -> Result<LocalAccount, AccountStoreError> {
        (**self).create_from_remote_identity(identity).await
    }
}
