use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use keystone_adapters::{AllowedOrigins, JwtAuthConfig, JwtAuthenticator};
use keystone_application::{LoginValidator, SignupUseCase};
use keystone_axum::routes::{login, signup};
use keystone_core::{AccountRepository, EmailValidator};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Login/signup service that provides the account routes
pub struct KeystoneService {
    router: Router,
}

impl KeystoneService {
    /// Create a new KeystoneService from its collaborators
    ///
    /// # Arguments
    /// * `accounts` - Store for accounts (must be Clone)
    /// * `email_validator` - Email format checker shared by login and signup
    /// * `jwt_config` - Signing secret and lifetime of issued access tokens
    /// * `auth_timeout` - Upper bound on a single authentication, if any
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs. Nothing is stored in
    /// process-wide singletons.
    pub fn new<A, V>(
        accounts: A,
        email_validator: V,
        jwt_config: JwtAuthConfig,
        auth_timeout: Option<Duration>,
    ) -> Self
    where
        A: AccountRepository + Clone + 'static,
        V: EmailValidator + Clone + 'static,
    {
        let authenticator = JwtAuthenticator::new(accounts.clone(), jwt_config);

        let mut login_validator = LoginValidator::builder()
            .authenticator(Arc::new(authenticator))
            .email_validator(Arc::new(email_validator.clone()));
        if let Some(timeout) = auth_timeout {
            login_validator = login_validator.auth_timeout(timeout);
        }

        Self::from_parts(
            login_validator.build(),
            SignupUseCase::new(accounts, email_validator),
        )
    }

    /// Create a KeystoneService from an already assembled validator and signup use case
    pub fn from_parts<A, V>(
        login_validator: LoginValidator,
        signup_use_case: SignupUseCase<A, V>,
    ) -> Self
    where
        A: AccountRepository + Clone + 'static,
        V: EmailValidator + Clone + 'static,
    {
        let router = Router::new()
            // Signup needs the account store and email checker
            .route("/signup", post(signup::<A, V>))
            .with_state(signup_use_case)
            // Login only needs the validator and its collaborators
            .route("/login", post(login))
            .with_state(login_validator);

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

    /// Convert the KeystoneService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
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

        tracing::info!("Keystone service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
