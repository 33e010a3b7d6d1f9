//! Form domain layer
//!
//! Type-safe field values, the role selection and the sign-up form with its
//! validity predicate and submit handler.

mod field;
mod form_state;
mod role;

pub use field::FormField;
pub use form_state::{SignupField, SignupForm};
pub use role::Role;
