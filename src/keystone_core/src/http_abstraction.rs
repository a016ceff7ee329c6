//! Framework-agnostic HTTP responses.
//!
//! Use cases produce an [`HttpResponse`], a plain `{status_code, body}` pair.
//! Web frameworks render it by implementing [`ResponseBuilder`] on a newtype
//! around their own builder:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  keystone_core: HttpResponse + trait     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  keystone_axum: AxumResponseBuilder      │
//! │  impl ResponseBuilder for it             │
//! └──────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::errors::ApiError;

/// Transport-level response: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HttpResponse {
    /// 400 carrying a client error.
    pub fn bad_request(error: ApiError) -> Self {
        Self::from_error(400, error)
    }

    /// 401 with no detail about why.
    pub fn unauthorized() -> Self {
        Self::from_error(401, ApiError::Unauthorized)
    }

    /// 500 with a generic body.
    pub fn server_error() -> Self {
        Self::from_error(500, ApiError::ServerError)
    }

    pub fn ok(data: impl Serialize) -> Self {
        Self::with_data(200, data)
    }

    pub fn created(data: impl Serialize) -> Self {
        Self::with_data(201, data)
    }

    pub fn conflict(message: &str) -> Self {
        Self {
            status_code: 409,
            body: serde_json::json!({ "error": message }),
        }
    }

    /// Render an [`ApiError`] with its own status code.
    pub fn error(error: ApiError) -> Self {
        Self::from_error(error.status_code(), error)
    }

    fn from_error(status_code: u16, error: ApiError) -> Self {
        Self::with_data(status_code, error.body())
    }

    fn with_data(status_code: u16, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(body) => Self { status_code, body },
            Err(_) => Self::server_error(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Render this response through a framework's builder.
    ///
    /// Auth responses may carry tokens, so they are never cacheable.
    pub fn write_to<B: ResponseBuilder>(self, builder: B) -> B::Response {
        builder
            .status(self.status_code)
            .header("cache-control", "no-store")
            .json_body(self.body)
            .build()
    }
}

/// Trait for building framework responses.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .header("cache-control", "no-store")
///     .json_body(json!({"accessToken": "..."}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// [`ResponseBuilder`] that produces an [`HttpResponse`]; headers are dropped.
///
/// Handy where no web framework is involved, such as tests.
#[derive(Debug, Default)]
pub struct PlainResponseBuilder {
    status_code: u16,
    body: Value,
}

impl ResponseBuilder for PlainResponseBuilder {
    type Response = HttpResponse;

    fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    fn header(self, _name: &str, _value: &str) -> Self {
        self
    }

    fn json_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    fn build(self) -> Self::Response {
        HttpResponse {
            status_code: self.status_code,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::Param;

    #[test]
    fn test_bad_request_names_param() {
        let response = HttpResponse::bad_request(ApiError::MissingParam(Param::Password));

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            json!({ "error": "Missing param: password", "param": "password" })
        );
    }

    #[test]
    fn test_unauthorized_has_no_detail() {
        let response = HttpResponse::unauthorized();

        assert_eq!(response.status_code, 401);
        assert_eq!(response.body, json!({ "error": "Unauthorized" }));
    }

    #[test]
    fn test_plain_builder_keeps_status_and_body() {
        let response = HttpResponse::ok(json!({ "accessToken": "t" }));

        let rendered = response.clone().write_to(PlainResponseBuilder::default());

        assert_eq!(rendered, response);
        assert!(rendered.is_success());
    }
}
