use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use social_auth_application::SocialSignInError;
use social_auth_core::{AccountStoreError, ProviderTokenError};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::AuthenticationError(_) => {
                tracing::warn!(error = %self, "Sign-in rejected");
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AuthApiError::AccountAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::UnexpectedError(_) => {
                tracing::error!(error = %self, "Sign-in failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<ProviderTokenError> for AuthApiError {
    fn from(error: ProviderTokenError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<SocialSignInError> for AuthApiError {
    fn from(error: SocialSignInError) -> Self {
        match error {
            SocialSignInError::IdentityResolution(e) => {
                AuthApiError::AuthenticationError(e.to_string())
            }
            SocialSignInError::NoIdentity => {
                AuthApiError::AuthenticationError(String::from("no identity for token"))
            }
            SocialSignInError::AccountLookup(e) => AuthApiError::UnexpectedError(e.to_string()),
            SocialSignInError::AccountCreation(AccountStoreError::DuplicateEmail) => {
                AuthApiError::AccountAlreadyExists
            }
            SocialSignInError::AccountCreation(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_auth_core::IdentityResolverError;

    #[test]
    fn test_status_codes_follow_error_kind() {
        let cases = [
            (
                AuthApiError::from(ProviderTokenError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthApiError::from(SocialSignInError::IdentityResolution(
                    IdentityResolverError::Unreachable("timed out".to_string()),
                )),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthApiError::from(SocialSignInError::NoIdentity),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthApiError::from(SocialSignInError::AccountLookup(
                    AccountStoreError::UnexpectedError("pool timed out".to_string()),
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthApiError::from(SocialSignInError::AccountCreation(
                    AccountStoreError::DuplicateEmail,
                )),
                StatusCode::CONFLICT,
            ),
            (
                AuthApiError::from(SocialSignInError::AccountCreation(
                    AccountStoreError::UnexpectedError("disk full".to_string()),
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
