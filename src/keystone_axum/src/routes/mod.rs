//! Axum-specific route handlers.
//!
//! These routes take the raw request body, call the framework-agnostic
//! handlers and return Axum responses. The body is not run through Axum's
//! `Json` extractor: a missing or malformed body must reach the use case so it
//! can answer with its own response instead of an extractor rejection.

pub mod login;
pub mod signup;

pub use login::login;
pub use signup::signup;
