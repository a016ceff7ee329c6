use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "email": "new@mail.com",
            "password": "password123",
            "repeatPassword": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "new@mail.com");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    app.signup("taken@mail.com", "password123").await;

    let response = app
        .post_signup(&json!({
            "email": "taken@mail.com",
            "password": "other",
            "repeatPassword": "other",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn should_return_400_if_passwords_do_not_match() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "email": "new@mail.com",
            "password": "password123",
            "repeatPassword": "password321",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Password does not match repeatPassword");
}

#[tokio::test]
async fn should_return_400_for_missing_or_invalid_fields() {
    let app = TestApp::new().await;
    let cases = [
        (json!({ "password": "p", "repeatPassword": "p" }), "email"),
        (json!({ "email": "a@b.com", "repeatPassword": "p" }), "password"),
        (json!({ "email": "a@b.com", "password": "p" }), "repeatPassword"),
        (
            json!({ "email": "nope", "password": "p", "repeatPassword": "p" }),
            "email",
        ),
    ];

    for (request, param) in cases {
        let response = app.post_signup(&request).await;

        assert_eq!(response.status().as_u16(), 400, "request: {request}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["param"], param);
    }
}
