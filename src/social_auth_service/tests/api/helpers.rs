use reqwest::Client;
use social_auth_adapters::{
    config::test, identity::FacebookIdentityResolver, persistence::HashMapAccountStore,
};
use social_auth_service::AuthService;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub facebook_server: MockServer,
    pub account_store: HashMapAccountStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let facebook_server = MockServer::start().await;

        let resolver_client = Client::builder()
            .timeout(test::facebook::TIMEOUT)
            .build()
            .unwrap();
        let identity_resolver = FacebookIdentityResolver::new(
            facebook_server.uri(),
            test::facebook::API_VERSION.to_string(),
            resolver_client,
        );
        let account_store = HashMapAccountStore::new();

        let auth_service = AuthService::new(identity_resolver, account_store.clone());

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            auth_service.run_standalone(listener, None).await.unwrap();
        });

        Self {
            address,
            http_client: Client::new(),
            facebook_server,
            account_store,
        }
    }

    pub async fn post_facebook_sign_in<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/auth/facebook", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn mock_facebook_profile(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/{}/me", test::facebook::API_VERSION)))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.facebook_server)
            .await;
    }
}
