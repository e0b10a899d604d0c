use crate::domain::email::Email;

/// Profile returned by an identity provider for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    provider_user_id: String,
    email: Email,
    name: String,
}

impl RemoteIdentity {
    pub fn new(provider_user_id: impl Into<String>, email: Email, name: impl Into<String>) -> Self {
        Self {
            provider_user_id: provider_user_id.into(),
            email,
            name: name.into(),
        }
    }

    /// Identifier assigned by the provider (e.g. the Facebook user id).
    pub fn provider_user_id(&self) -> &str {
        &self.provider_user_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
