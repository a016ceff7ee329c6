//! Axum framework adapter for framework-agnostic responses.
//!
//! The `ResponseBuilder` trait is defined in `keystone_core`; this module
//! implements it on top of Axum's response types.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::Response,
};
use keystone_core::ResponseBuilder;

/// Axum implementation of `keystone_core::ResponseBuilder`.
///
/// Invalid status codes or header values never panic: the status falls back
/// to 500 and the offending header is skipped with a warning.
pub struct AxumResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.status = StatusCode::from_u16(code).unwrap_or_else(|_| {
            tracing::warn!(code, "Invalid status code, answering 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(name, "Skipping invalid response header"),
        }
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use keystone_core::{ApiError, HttpResponse, Param};

    use super::*;

    #[test]
    fn test_response_builder() {
        let resp = response_builder()
            .status(200)
            .header("x-custom", "value")
            .json_body(serde_json::json!({"message": "success"}))
            .build();

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("x-custom").and_then(|v| v.to_str().ok()),
            Some("value")
        );
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_invalid_input_does_not_panic() {
        let resp = response_builder()
            .status(1000)
            .header("bad header", "value")
            .build();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().is_empty());
    }

    #[tokio::test]
    async fn test_http_response_is_rendered() {
        let resp = HttpResponse::bad_request(ApiError::MissingParam(Param::Email))
            .write_to(response_builder());

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()
                .get("cache-control")
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Missing param: email");
    }
}
