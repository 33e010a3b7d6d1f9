//! Regex-backed email validation

use super::EmailValidator;
use regex::Regex;
use std::sync::LazyLock;

/// Local part (dotted atoms or a quoted string) `@` domain (IPv4 literal or
/// dotted labels ending in a 2+ letter TLD).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Check whether `text` is a syntactically valid email address
pub fn validate_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Default [`EmailValidator`] used by the application
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl EmailValidator for RegexEmailValidator {
    fn validate(&self, email: &str) -> bool {
        validate_email(email)
    }
}
