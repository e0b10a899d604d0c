use social_auth_adapters::http::routes::{ErrorResponse, SignInResponse};
use wiremock::ResponseTemplate;

use crate::helpers::TestApp;

fn facebook_profile() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "fb-1",
        "name": "A",
        "email": "a@x.com"
    }))
}

#[tokio::test]
async fn should_return_201_and_create_account_on_first_sign_in() {
    let app = TestApp::new().await;
    app.mock_facebook_profile(facebook_profile(), 1).await;

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "tok-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body = response.json::<SignInResponse>().await.unwrap();
    assert_eq!(body.email, "a@x.com");
    assert_eq!(body.name, "A");
    assert!(body.created);
    assert_eq!(app.account_store.len().await, 1);
}

#[tokio::test]
async fn should_return_200_with_same_account_on_second_sign_in() {
    let app = TestApp::new().await;
    app.mock_facebook_profile(facebook_profile(), 2).await;

    let first = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "tok-1" }))
        .await
        .json::<SignInResponse>()
        .await
        .unwrap();

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "tok-1" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let second = response.json::<SignInResponse>().await.unwrap();
    assert_eq!(first.account_id, second.account_id);
    assert!(!second.created);
    assert_eq!(app.account_store.len().await, 1);
}

#[tokio::test]
async fn should_return_401_if_provider_rejects_token() {
    let app = TestApp::new().await;
    app.mock_facebook_profile(
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "Invalid OAuth access token.", "code": 190 }
        })),
        1,
    )
    .await;

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "tok-2" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert!(body.error.contains("Invalid OAuth access token"));
    assert!(app.account_store.is_empty().await);
}

#[tokio::test]
async fn should_return_401_if_profile_has_no_email() {
    let app = TestApp::new().await;
    app.mock_facebook_profile(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "fb-1", "name": "A" })),
        1,
    )
    .await;

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "tok-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(app.account_store.is_empty().await);
}

#[tokio::test]
async fn should_return_400_for_blank_token_without_calling_provider() {
    let app = TestApp::new().await;
    app.mock_facebook_profile(facebook_profile(), 0).await;

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "token": "   " }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_422_if_token_is_missing() {
    let app = TestApp::new().await;

    let response = app
        .post_facebook_sign_in(&serde_json::json!({ "access_token": "tok-1" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
