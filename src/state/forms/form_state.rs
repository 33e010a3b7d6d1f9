//! Sign-up form state, validity predicate and submit handler

use super::field::FormField;
use super::role::Role;
use crate::state::Notifier;
use crate::validation::{EmailValidator, FieldError, MIN_PASSWORD_LENGTH};

/// Message shown after a successful submission
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created!";

/// Focus targets of the sign-up form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    FirstName,
    LastName,
    Email,
    Password,
    Role,
    SubmitButton,
}

impl SignupField {
    pub const ALL: [SignupField; 6] = [
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Email,
        SignupField::Password,
        SignupField::Role,
        SignupField::SubmitButton,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Password => 3,
            Self::Role => 4,
            Self::SubmitButton => 5,
        }
    }

    /// Next target (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous target (wraps around)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The sign-up form: five fields plus the focused target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub role: FormField,
    pub focus: SignupField,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First name", "First name", true),
            last_name: FormField::text("last_name", "Last name", "Last name", true),
            email: FormField::text("email", "Email address", "Email address", true),
            password: FormField::secret("password", "Password", "Password", true),
            role: FormField::role("role", "Role", true),
            focus: SignupField::default(),
        }
    }

    pub fn field(&self, target: SignupField) -> Option<&FormField> {
        match target {
            SignupField::FirstName => Some(&self.first_name),
            SignupField::LastName => Some(&self.last_name),
            SignupField::Email => Some(&self.email),
            SignupField::Password => Some(&self.password),
            SignupField::Role => Some(&self.role),
            SignupField::SubmitButton => None,
        }
    }

    pub fn field_mut(&mut self, target: SignupField) -> Option<&mut FormField> {
        match target {
            SignupField::FirstName => Some(&mut self.first_name),
            SignupField::LastName => Some(&mut self.last_name),
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::Role => Some(&mut self.role),
            SignupField::SubmitButton => None,
        }
    }

    /// Field that currently receives input, if focus is not on the button
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.field_mut(self.focus)
    }

    pub fn is_button_focused(&self) -> bool {
        self.focus == SignupField::SubmitButton
    }

    /// Move focus to `target`, blurring the field that loses it
    pub fn focus_field(&mut self, target: SignupField) {
        if self.focus == target {
            return;
        }
        if let Some(field) = self.active_field_mut() {
            field.mark_touched();
            tracing::debug!("Blurred {}", field.name);
        }
        tracing::debug!("Focus {:?} -> {:?}", self.focus, target);
        self.focus = target;
    }

    pub fn next_field(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn prev_field(&mut self) {
        self.focus_field(self.focus.prev());
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    pub fn select_next_role(&mut self) {
        self.role.set_role(self.role.as_role().next());
    }

    pub fn select_prev_role(&mut self) {
        self.role.set_role(self.role.as_role().prev());
    }

    /// Every rule the current values break; empty when the form may be submitted.
    /// Names are not trimmed, so a lone space counts as a name.
    pub fn validation_errors(&self, validator: &dyn EmailValidator) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.first_name.is_empty() {
            errors.push(FieldError::MissingFirstName);
        }
        if self.last_name.is_empty() {
            errors.push(FieldError::MissingLastName);
        }
        if !validator.validate(self.email.as_text()) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.password.char_count() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::PasswordTooShort);
        }
        if !self.role.as_role().is_selected() {
            errors.push(FieldError::RoleNotSelected);
        }
        errors
    }

    /// Validity predicate: true iff the form may be submitted
    pub fn is_valid(&self, validator: &dyn EmailValidator) -> bool {
        self.validation_errors(validator).is_empty()
    }

    /// Inline password error, shown once the field was blurred while too short
    pub fn password_error(&self) -> Option<FieldError> {
        (self.password.touched && self.password.char_count() < MIN_PASSWORD_LENGTH)
            .then_some(FieldError::PasswordTooShort)
    }

    /// Restore every field to its initial value and focus the first field
    pub fn reset(&mut self) {
        self.first_name.reset();
        self.last_name.reset();
        self.email.reset();
        self.password.reset();
        self.role.reset();
        self.focus = SignupField::default();
    }

    /// Submit handler. Invalid forms are left untouched and nothing is reported;
    /// valid ones notify once and reset. Returns whether the submission went through.
    pub fn submit(&mut self, validator: &dyn EmailValidator, notifier: &mut dyn Notifier) -> bool {
        let errors = self.validation_errors(validator);
        if !errors.is_empty() {
            tracing::debug!("Submission rejected: {errors:?}");
            return false;
        }

        tracing::info!("Submission accepted (role: {})", self.selected_role());
        notifier.notify(ACCOUNT_CREATED_MESSAGE);
        self.reset();
        true
    }

    pub fn selected_role(&self) -> Role {
        self.role.as_role()
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
