//! UI area positioning for mouse event handling
//!
//! The renderer and the mouse handler share these constants so a click lands
//! on the same row the field was drawn on.
//!
//! # Layout
//!
//! ```text
//! Row 0:    Header (1 row, no border)
//! Row 1:    Form panel top border
//! Row 2-20: Form rows (see FORM_ROWS)
//! Row 21:   Form panel bottom border
//! Bottom:   Status bar (1 row)
//! ```

use super::forms::SignupField;

/// Height of the header title line
pub const HEADER_HEIGHT: u16 = 1;

/// Height of a bordered input or button
pub const FIELD_HEIGHT: u16 = 3;

/// Height of the inline error line under the password
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Maximum width of the centered form panel
pub const FORM_MAX_WIDTH: u16 = 60;

/// Form rows from top to bottom; `None` is the password error line
pub const FORM_ROWS: [(Option<SignupField>, u16); 7] = [
    (Some(SignupField::FirstName), FIELD_HEIGHT),
    (Some(SignupField::LastName), FIELD_HEIGHT),
    (Some(SignupField::Email), FIELD_HEIGHT),
    (Some(SignupField::Password), FIELD_HEIGHT),
    (None, ERROR_LINE_HEIGHT),
    (Some(SignupField::Role), FIELD_HEIGHT),
    (Some(SignupField::SubmitButton), FIELD_HEIGHT),
];

/// First absolute row of the form content (header + panel border)
pub const FORM_CONTENT_TOP: u16 = HEADER_HEIGHT + 1;

/// Focus target drawn at an absolute screen row, if any
pub fn field_at_row(mouse_row: u16) -> Option<SignupField> {
    let mut row = mouse_row.checked_sub(FORM_CONTENT_TOP)?;
    for (target, height) in FORM_ROWS {
        if row < height {
            return target;
        }
        row -= height;
    }
    None
}

/// Horizontal span `(x, width)` of the form panel for a terminal width
pub fn form_columns(terminal_width: u16) -> (u16, u16) {
    let width = terminal_width.min(FORM_MAX_WIDTH);
    ((terminal_width - width) / 2, width)
}
