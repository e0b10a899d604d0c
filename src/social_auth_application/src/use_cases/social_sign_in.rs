use secrecy::Secret;
use social_auth_core::{
    AccountReader, AccountStoreError, AccountWriter, IdentityResolver, IdentityResolverError,
    LocalAccount, ProviderToken, ProviderTokenError,
};

/// Input for a single social sign-in
#[derive(Debug, Clone)]
pub struct AuthRequest {
    token: ProviderToken,
}

impl AuthRequest {
    pub fn new(token: ProviderToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &ProviderToken {
        &self.token
    }
}

impl TryFrom<Secret<String>> for AuthRequest {
    type Error = ProviderTokenError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Ok(Self::new(ProviderToken::try_from(value)?))
    }
}

/// Whether the signed-in account existed before this call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOrigin {
    Existing,
    Created,
}

/// Response from the social sign-in use case
#[derive(Debug, Clone, PartialEq)]
pub struct SignInOutcome {
    pub account: LocalAccount,
    pub origin: AccountOrigin,
}

impl SignInOutcome {
    pub fn is_new_account(&self) -> bool {
        self.origin == AccountOrigin::Created
    }
}

/// Coarse classification of a failed sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInErrorKind {
    AuthenticationFailed,
    AccountLookupFailed,
    AccountCreationFailed,
}

/// Error types specific to the social sign-in use case
#[derive(Debug, thiserror::Error)]
pub enum SocialSignInError {
    #[error("Authentication failed: {0}")]
    IdentityResolution(#[source] IdentityResolverError),
    #[error("Authentication failed: identity provider returned no identity")]
    NoIdentity,
    #[error("Account lookup failed: {0}")]
    AccountLookup(#[source] AccountStoreError),
    #[error("Account creation failed: {0}")]
    AccountCreation(#[source] AccountStoreError),
}

impl SocialSignInError {
    pub fn kind(&self) -> SignInErrorKind {
        match self {
            Self::IdentityResolution(_) | Self::NoIdentity => SignInErrorKind::AuthenticationFailed,
            Self::AccountLookup(_) => SignInErrorKind::AccountLookupFailed,
            Self::AccountCreation(_) => SignInErrorKind::AccountCreationFailed,
        }
    }
}

/// Social sign-in use case - maps a provider token to a local account,
/// creating the account on first sign-in
pub struct SocialSignInUseCase<I, R, W>
where
    I: IdentityResolver,
    R: AccountReader,
    W: AccountWriter,
{
    identity_resolver: I,
    account_reader: R,
    account_writer: W,
}

impl<I, R, W> SocialSignInUseCase<I, R, W>
where
    I: IdentityResolver,
    R: AccountReader,
    W: AccountWriter,
{
    pub fn new(identity_resolver: I, account_reader: R, account_writer: W) -> Self {
        Self {
            identity_resolver,
            account_reader,
            account_writer,
        }
    }

    /// Execute the social sign-in use case
    ///
    /// Resolves the token, looks the account up by the resolved email and
    /// creates it when absent. Every collaborator failure is returned once,
    /// classified, and never retried. A uniqueness conflict on creation is
    /// reported as `AccountCreation` without a second lookup.
    ///
    /// # Arguments
    /// * `request` - Request carrying the provider token
    ///
    /// # Returns
    /// The established account and whether it was created by this call
    #[tracing::instrument(name = "SocialSignInUseCase::execute", skip_all)]
    pub async fn execute(&self, request: AuthRequest) -> Result<SignInOutcome, SocialSignInError> {
        let identity = self
            .identity_resolver
            .resolve(request.token())
            .await
            .map_err(SocialSignInError::IdentityResolution)?
            .ok_or(SocialSignInError::NoIdentity)?;

        tracing::debug!(
            provider_user_id = identity.provider_user_id(),
            "Identity resolved"
        );

        let existing = self
            .account_reader
            .find_by_email(identity.email())
            .await
            .map_err(SocialSignInError::AccountLookup)?;

        if let Some(account) = existing {
            tracing::info!(account_id = %account.id(), "Signed in to existing account");
            return Ok(SignInOutcome {
                account,
                origin: AccountOrigin::Existing,
            });
        }

        let account = self
            .account_writer
            .create_from_remote_identity(&identity)
            .await
            .map_err(SocialSignInError::AccountCreation)?;

        tracing::info!(account_id = %account.id(), "Created account on first sign-in");

        Ok(SignInOutcome {
            account,
            origin: AccountOrigin::Created,
        })
    }
}
