//! Axum integration for keystone.
//!
//! This crate provides the Axum adapter for the framework-agnostic handlers
//! defined in `keystone_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  keystone_core: ResponseBuilder trait    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  keystone_axum: Axum implementations     │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use keystone_axum::routes;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login))
//!     .with_state(login_validator);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
