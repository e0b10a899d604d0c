use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use social_auth_adapters::{config::AllowedOrigins, http::routes::facebook_sign_in};
use social_auth_core::{AccountReader, AccountWriter, IdentityResolver};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Social authentication service exposing the provider sign-in routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided identity resolver and account store
    ///
    /// # Arguments
    /// * `identity_resolver` - Client resolving Facebook tokens (must be Clone)
    /// * `account_store` - Store for local accounts, read and write side (must be Clone)
    pub fn new<I, S>(identity_resolver: I, account_store: S) -> Self
    where
        I: IdentityResolver + Clone + 'static,
        S: AccountReader + AccountWriter + Clone + 'static,
    {
        let router = Router::new()
            .route("/auth/facebook", post(facebook_sign_in::<I, S>))
            .with_state((identity_resolver, account_store));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
