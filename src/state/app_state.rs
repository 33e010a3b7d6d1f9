//! Application state definitions

use super::alerts::AlertQueue;
use super::forms::SignupForm;
use crate::validation::EmailValidator;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: SignupForm,
    /// Cached validity predicate, recomputed after every change
    pub can_submit: bool,

    // Notifications
    pub alerts: AlertQueue,

    // UI state
    /// Password shown in clear text (Ctrl+R)
    pub reveal_password: bool,
}

impl AppState {
    /// Re-evaluate the validity predicate. Returns true if it changed.
    pub fn refresh_validity(&mut self, validator: &dyn EmailValidator) -> bool {
        let can_submit = self.form.is_valid(validator);
        let changed = can_submit != self.can_submit;
        if changed {
            tracing::debug!("Form validity changed: {can_submit}");
        }
        self.can_submit = can_submit;
        changed
    }

    /// Whether an alert is blocking input
    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Submit the form, reporting success to the alert queue
    pub fn submit_form(&mut self, validator: &dyn EmailValidator) -> bool {
        let accepted = self.form.submit(validator, &mut self.alerts);
        self.refresh_validity(validator);
        accepted
    }
}
