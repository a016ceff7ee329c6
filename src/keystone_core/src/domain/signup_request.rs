use secrecy::Secret;
use serde::Deserialize;

use super::parse_json_body;

/// Untrusted signup payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default, rename = "repeatPassword")]
    pub repeat_password: Option<Secret<String>>,
}

impl SignupRequest {
    pub fn new(email: Option<&str>, password: Option<&str>, repeat_password: Option<&str>) -> Self {
        let secret = |value: &str| Secret::new(value.to_string());
        Self {
            email: email.map(secret),
            password: password.map(secret),
            repeat_password: repeat_password.map(secret),
        }
    }

    /// Returns `None` when the body is empty, `null` or not a signup object.
    pub fn from_json(bytes: &[u8]) -> Option<Self> {
        parse_json_body(bytes)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_repeat_password_uses_camel_case_key() {
        let request = SignupRequest::from_json(
            br#"{"email":"a@b.com","password":"p","repeatPassword":"p"}"#,
        )
        .unwrap();

        assert_eq!(request.repeat_password.unwrap().expose_secret(), "p");
    }

    #[test]
    fn test_empty_body_is_absent() {
        assert!(SignupRequest::from_json(b"").is_none());
    }
}
