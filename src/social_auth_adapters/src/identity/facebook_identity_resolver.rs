use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use social_auth_core::{
    Email, IdentityResolver, IdentityResolverError, ProviderToken, RemoteIdentity,
};

/// Resolves Facebook user access tokens through the Graph API `/me` endpoint.
#[derive(Clone)]
pub struct FacebookIdentityResolver {
    http_client: Client,
    base_url: String,
    api_version: String,
}

impl FacebookIdentityResolver {
    pub fn new(base_url: String, api_version: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_version,
        }
    }

    fn profile_url(&self) -> Result<Url, IdentityResolverError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| IdentityResolverError::UnexpectedError(e.to_string()))?;
        base.join(&format!("{}/me", self.api_version))
            .map_err(|e| IdentityResolverError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl IdentityResolver for FacebookIdentityResolver {
    #[tracing::instrument(name = "Resolving Facebook identity", skip_all)]
    async fn resolve(
        &self,
        token: &ProviderToken,
    ) -> Result<Option<RemoteIdentity>, IdentityResolverError> {
        let url = self.profile_url()?;

        let response = self
            .http_client
            .get(url)
            .query(&[("fields", PROFILE_FIELDS)])
            .bearer_auth(token.as_ref().expose_secret())
            .send()
            .await
            .map_err(|e| IdentityResolverError::Unreachable(e.to_string()))?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let message = response
                .json::<GraphErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(IdentityResolverError::InvalidToken(message));
        }
        if !status.is_success() {
            return Err(IdentityResolverError::UnexpectedError(format!(
                "Graph API responded with {status}"
            )));
        }

        let profile = response.json::<GraphProfile>().await.map_err(|e| {
            if e.is_decode() {
                IdentityResolverError::MalformedResponse(e.to_string())
            } else {
                IdentityResolverError::Unreachable(e.to_string())
            }
        })?;

        profile.into_remote_identity()
    }
}

const PROFILE_FIELDS: &str = "id,name,email";

#[derive(Debug, Deserialize)]
struct GraphProfile {
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
}

impl GraphProfile {
    // A profile without an id or email (e.g. the email permission was not
    // granted) cannot be matched to a local account.
    fn into_remote_identity(self) -> Result<Option<RemoteIdentity>, IdentityResolverError> {
        let id = self.id.filter(|id| !id.trim().is_empty());
        let email = self.email.filter(|email| !email.trim().is_empty());
        let (Some(id), Some(email)) = (id, email) else {
            return Ok(None);
        };

        let email = Email::try_from(Secret::from(email))
            .map_err(|e| IdentityResolverError::MalformedResponse(e.to_string()))?;

        Ok(Some(RemoteIdentity::new(
            id,
            email,
            self.name.unwrap_or_default(),
        )))
    }
}

#[derive(Debug, Deserialize)]
struct GraphErrorResponse {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: String,
}
