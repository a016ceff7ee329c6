use std::time::Duration;

use keystone_adapters::{
    HashMapAccountStore, JwtAuthConfig, RegexEmailValidator, config::constants::test,
};
use keystone_application::{LoginValidator, SignupUseCase};
use keystone_service::KeystoneService;
use secrecy::Secret;
use serde_json::Value;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the full service on a random local port with an in-memory store.
    pub async fn new() -> Self {
        let service = KeystoneService::new(
            HashMapAccountStore::new(),
            RegexEmailValidator::new(),
            jwt_auth_config(),
            Some(Duration::from_secs(5)),
        );
        Self::spawn(service).await
    }

    /// Spawn a service whose login validator was assembled by the caller.
    pub async fn with_login_validator(login_validator: LoginValidator) -> Self {
        let signup = SignupUseCase::new(HashMapAccountStore::new(), RegexEmailValidator::new());
        Self::spawn(KeystoneService::from_parts(login_validator, signup)).await
    }

    async fn spawn(service: KeystoneService) -> Self {
        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_signup(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/signup", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn signup(&self, email: &str, password: &str) {
        let response = self
            .post_signup(&serde_json::json!({
                "email": email,
                "password": password,
                "repeatPassword": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }
}

pub fn jwt_auth_config() -> JwtAuthConfig {
    JwtAuthConfig {
        jwt_secret: Secret::new(test::JWT_SECRET.to_string()),
        token_ttl_in_seconds: 600,
    }
}
