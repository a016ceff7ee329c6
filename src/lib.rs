//! # Keystone - Login and Signup Service Library
//!
//! This is a facade crate that re-exports the public APIs of the keystone components.
//! Use this crate to get the login validator, its collaborators and the HTTP service
//! in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `LoginRequest`, `Credentials`, `AccessToken`, `Account`, etc.
//! - **Ports**: `Authenticator`, `EmailValidator`, `AccountRepository`
//! - **Use cases**: `LoginValidator`, `SignupUseCase`
//! - **Adapters**: `JwtAuthenticator`, `RegexEmailValidator`, account stores, settings
//! - **Service**: `KeystoneService` - The axum router serving `/login` and `/signup`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use keystone_core::*;
}

pub use keystone_core::{
    AccessToken, Account, ApiError, BodyField, CollaboratorError, Credentials, ErrorResponse,
    FieldError, HttpResponse, LoginBody, LoginOutcome, LoginRequest, NewAccount, Param,
    ResponseBuilder, SignupRequest,
};

// ============================================================================
// Ports
// ============================================================================

pub use keystone_core::{AccountRepository, AccountStoreError, Authenticator, EmailValidator};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keystone_application::*;
}

pub use keystone_application::{LoginValidator, LoginValidatorBuilder, SignupError, SignupUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic request handlers
    pub mod handlers {
        pub use keystone_adapters::handlers::*;
    }

    /// Account store implementations
    pub mod persistence {
        pub use keystone_adapters::persistence::*;
    }

    /// Token issuing authenticator
    pub mod authentication {
        pub use keystone_adapters::authentication::*;
    }

    /// Configuration
    pub mod config {
        pub use keystone_adapters::config::*;
    }
}

pub use keystone_adapters::{
    JwtAuthConfig, JwtAuthenticator, RegexEmailValidator,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};

// ============================================================================
// Keystone Service (Main Entry Point)
// ============================================================================

pub use keystone_axum::AxumResponseBuilder;
pub use keystone_service::{KeystoneService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the collaborator traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
