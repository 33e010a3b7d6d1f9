//! Reusable UI components

mod button;
mod dialog;

pub use button::render_action_button;
pub use dialog::render_alert_dialog;
