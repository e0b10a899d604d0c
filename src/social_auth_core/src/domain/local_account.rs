use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::Secret;
use uuid::Uuid;

use crate::domain::{
    email::{Email, EmailError},
    remote_identity::RemoteIdentity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Durable record of a user known to this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAccount {
    id: AccountId,
    email: Email,
    name: String,
    provider_user_id: String,
    created_at: DateTime<Utc>,
}

impl LocalAccount {
    /// Build a fresh account for a first sign-in.
    pub fn from_remote_identity(identity: &RemoteIdentity) -> Self {
        Self {
            id: AccountId::new(),
            email: identity.email().clone(),
            name: identity.name().to_string(),
            provider_user_id: identity.provider_user_id().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild an account from persisted fields.
    pub fn parse(
        id: Uuid,
        email: Secret<String>,
        name: String,
        provider_user_id: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EmailError> {
        Ok(Self {
            id: AccountId::from(id),
            email: Email::try_from(email)?,
            name,
            provider_user_id,
            created_at,
        })
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider_user_id(&self) -> &str {
        &self.provider_user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_copies_remote_identity() {
        let email = Email::try_from(Secret::from("a@x.com".to_string())).unwrap();
        let identity = RemoteIdentity::new("fb-1", email.clone(), "A");

        let account = LocalAccount::from_remote_identity(&identity);

        assert_eq!(account.email(), &email);
        assert_eq!(account.name(), "A");
        assert_eq!(account.provider_user_id(), "fb-1");
    }

    #[test]
    fn test_accounts_get_distinct_ids() {
        let email = Email::try_from(Secret::from("a@x.com".to_string())).unwrap();
        let identity = RemoteIdentity::new("fb-1", email, "A");

        let first = LocalAccount::from_remote_identity(&identity);
        let second = LocalAccount::from_remote_identity(&identity);

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_parse_rejects_invalid_stored_email() {
        let result = LocalAccount::parse(
            Uuid::new_v4(),
            Secret::from("not-an-email".to_string()),
            "A".to_string(),
            "fb-1".to_string(),
            Utc::now(),
        );
        assert_eq!(result.unwrap_err(), EmailError::InvalidFormat);
    }
}
