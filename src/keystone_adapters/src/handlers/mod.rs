//! Framework-agnostic request handlers.
//!
//! Framework-specific routes (Axum, Actix, etc.) extract the raw body, call
//! these handlers and hand over their own [`ResponseBuilder`](keystone_core::ResponseBuilder).

pub mod login;
pub mod signup;

pub use login::handle_login;
pub use signup::handle_signup;
