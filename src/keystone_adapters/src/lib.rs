pub mod authentication;
pub mod config;
pub mod handlers;
pub mod persistence;
pub mod validation;

pub use authentication::{Claims, JwtAuthConfig, JwtAuthenticator};
pub use config::{AllowedOrigins, Settings};
pub use persistence::{HashMapAccountStore, PostgresAccountStore};
pub use validation::RegexEmailValidator;
