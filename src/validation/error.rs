//! Validation failures

use thiserror::Error;

/// A single rule the form failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name is required")]
    MissingFirstName,
    #[error("Last name is required")]
    MissingLastName,
    #[error("Email address is not valid")]
    InvalidEmail,
    /// Also the inline message shown under the password field
    #[error("Password should have at least 8 characters")]
    PasswordTooShort,
    #[error("A role must be selected")]
    RoleNotSelected,
}
