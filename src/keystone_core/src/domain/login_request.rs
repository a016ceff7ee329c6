use secrecy::Secret;
use serde_json::{Map, Value};

use super::parse_json_body;

/// Untrusted login payload as received from the transport.
///
/// Either layer may be missing: the request itself is passed as an `Option`
/// to the validator, and `body` is `None` when the client sent nothing usable.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub body: Option<LoginBody>,
}

impl LoginRequest {
    pub fn new(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }

    /// A request that arrived without a body.
    pub fn without_body() -> Self {
        Self { body: None }
    }

    /// Build a request from raw JSON bytes.
    ///
    /// Only a JSON object counts as a body. An empty, `null`, non-object or
    /// malformed payload yields a request with no body.
    pub fn from_json(bytes: &[u8]) -> Self {
        Self {
            body: parse_json_body::<Map<String, Value>>(bytes).map(LoginBody::from_object),
        }
    }
}

/// One credential field as sent by the client.
#[derive(Debug, Clone, Default)]
pub enum BodyField {
    /// Not sent, or sent as `null`
    #[default]
    Absent,
    Text(Secret<String>),
    /// Sent with a JSON type other than string
    NotText,
}

impl BodyField {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => BodyField::Absent,
            Some(Value::String(text)) => BodyField::Text(Secret::new(text.clone())),
            Some(_) => BodyField::NotText,
        }
    }
}

impl From<Option<&str>> for BodyField {
    fn from(value: Option<&str>) -> Self {
        value.map_or(BodyField::Absent, |text| {
            BodyField::Text(Secret::new(text.to_string()))
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginBody {
    pub email: BodyField,
    pub password: BodyField,
}

impl LoginBody {
    pub fn new(email: Option<&str>, password: Option<&str>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read the credential fields of a JSON object; other keys are ignored.
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            email: BodyField::from_value(object.get("email")),
            password: BodyField::from_value(object.get("password")),
        }
    }
}
