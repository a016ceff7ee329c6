use std::sync::LazyLock;

use keystone_core::{CollaboratorError, EmailValidator};
use regex::Regex;

/// Longest address allowed by RFC 5321.
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex is valid")
});

/// Format-only email check. Says nothing about whether the mailbox exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn matches(email: &str) -> bool {
        email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
    }
}

#[async_trait::async_trait]
impl EmailValidator for RegexEmailValidator {
    async fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError> {
        Ok(Self::matches(email))
    }
}
