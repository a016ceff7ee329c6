use std::sync::Arc;

use keystone_adapters::RegexEmailValidator;
use keystone_application::LoginValidator;
use keystone_core::{AccessToken, Authenticator, CollaboratorError, Credentials};
use serde_json::{Value, json};

use crate::helpers::TestApp;

/// Authenticator returning a fixed answer for any credentials.
struct FixedAuthenticator(Option<&'static str>);

#[async_trait::async_trait]
impl Authenticator for FixedAuthenticator {
    async fn authenticate(
        &self,
        _credentials: &Credentials,
    ) -> Result<Option<AccessToken>, CollaboratorError> {
        Ok(self.0.and_then(AccessToken::parse))
    }
}

async fn app_with_fixed_token(token: Option<&'static str>) -> TestApp {
    let validator = LoginValidator::new(
        Arc::new(FixedAuthenticator(token)),
        Arc::new(RegexEmailValidator::new()),
    );
    TestApp::with_login_validator(validator).await
}

#[tokio::test]
async fn should_return_200_for_signed_up_account() {
    let app = TestApp::new().await;
    app.signup("valid-email@mail.com", "valid-password").await;

    let response = app
        .post_login(&json!({ "email": "valid-email@mail.com", "password": "valid-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    let body: Value = response.json().await.unwrap();
    assert!(body["accessToken"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn should_return_token_exactly_as_issued() {
    let app = app_with_fixed_token(Some("valid_token")).await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "p" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "accessToken": "valid_token" }));
}

#[tokio::test]
async fn should_return_401_when_no_token_is_issued() {
    let app = app_with_fixed_token(None).await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;
    app.signup("a@b.com", "password123").await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "password124" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_if_no_email_is_provided() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "password": "any-password" })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Missing param: email", "param": "email" })
    );
}

#[tokio::test]
async fn should_return_400_if_no_password_is_provided() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "any-email@mail.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["param"], "password");
}

#[tokio::test]
async fn should_return_400_if_email_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "not-an-email", "password": "any-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Invalid param: email", "param": "email" })
    );
}

#[tokio::test]
async fn should_return_400_if_a_field_is_not_a_string() {
    let app = TestApp::new().await;
    let cases = [
        (json!({ "email": 123, "password": "p" }), "email"),
        (json!({ "email": "a@b.com", "password": 42 }), "password"),
        (json!({ "password": "p", "email": true }), "email"),
    ];

    for (request, param) in cases {
        let response = app.post_login(&request).await;

        assert_eq!(response.status().as_u16(), 400, "request: {request}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], format!("Invalid param: {param}"));
        assert_eq!(body["param"], param);
    }
}

#[tokio::test]
async fn should_return_500_if_request_has_no_body() {
    let app = TestApp::new().await;

    for raw in ["", "null", "{ not json"] {
        let response = app.post_login_raw(raw).await;

        assert_eq!(response.status().as_u16(), 500, "body: {raw:?}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

#[tokio::test]
async fn should_return_500_if_no_authenticator_is_configured() {
    let validator = LoginValidator::builder()
        .email_validator(Arc::new(RegexEmailValidator::new()))
        .build();
    let app = TestApp::with_login_validator(validator).await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "p" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
}
