pub mod jwt_authenticator;

pub use jwt_authenticator::{Claims, JwtAuthConfig, JwtAuthenticator};
