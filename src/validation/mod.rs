//! Field validation rules and the email collaborator
//!
//! The form never decides on its own what a valid email looks like. It asks an
//! [`EmailValidator`], which tests replace with a mock.

mod email;
mod error;

pub use email::RegexEmailValidator;
pub use error::FieldError;

/// Minimum number of characters a password needs
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Decides whether a string is a syntactically valid email address
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator {
    /// Returns true iff `email` is a valid address. Must be pure.
    fn validate(&self, email: &str) -> bool;
}
