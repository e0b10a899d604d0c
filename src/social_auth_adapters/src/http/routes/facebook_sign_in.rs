use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use social_auth_application::{AuthRequest, SignInOutcome, SocialSignInUseCase};
use social_auth_core::{AccountReader, AccountWriter, IdentityResolver};

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct FacebookSignInRequest {
    pub token: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInResponse {
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub created: bool,
}

impl From<&SignInOutcome> for SignInResponse {
    fn from(outcome: &SignInOutcome) -> Self {
        Self {
            account_id: outcome.account.id().to_string(),
            email: outcome.account.email().as_ref().expose_secret().clone(),
            name: outcome.account.name().to_string(),
            created: outcome.is_new_account(),
        }
    }
}

#[tracing::instrument(name = "Facebook sign-in", skip_all)]
pub async fn facebook_sign_in<I, S>(
    State((identity_resolver, account_store)): State<(I, S)>,
    Json(request): Json<FacebookSignInRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    I: IdentityResolver + Clone + 'static,
    S: AccountReader + AccountWriter + Clone + 'static,
{
    let request = AuthRequest::try_from(request.token)?;

    let use_case = SocialSignInUseCase::new(identity_resolver, account_store.clone(), account_store);
    let outcome = use_case.execute(request).await?;

    let status = if outcome.is_new_account() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(SignInResponse::from(&outcome))))
}
