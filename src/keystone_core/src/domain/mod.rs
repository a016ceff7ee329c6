pub mod access_token;
pub mod account;
pub mod credentials;
pub mod login_request;
pub mod signup_request;

use serde::de::DeserializeOwned;

/// Parse a JSON request body, treating an empty, `null` or malformed body as absent.
pub(crate) fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Option<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice::<Option<T>>(bytes).ok().flatten()
}
