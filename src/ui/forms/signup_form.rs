//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{SignupField, FORM_ROWS};
use crate::ui::components::render_action_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const SUBMIT_LABEL: &str = "Create account";

/// Draw the sign-up form panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let constraints: Vec<Constraint> = FORM_ROWS
        .iter()
        .map(|(_, height)| Constraint::Length(*height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Create your account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mask = app.mask_password();
    for (chunk, (target, _)) in chunks.iter().zip(FORM_ROWS.iter()) {
        match target {
            Some(SignupField::SubmitButton) => render_action_button(
                frame,
                *chunk,
                SUBMIT_LABEL,
                form.is_button_focused(),
                app.state.can_submit,
                Some(Color::Green),
            ),
            Some(target) => {
                if let Some(field) = form.field(*target) {
                    draw_field(frame, *chunk, field, form.focus == *target, mask);
                }
            }
            None => {
                let message = form.password_error().map(|e| e.to_string());
                draw_field_error(frame, *chunk, message.as_deref());
            }
        }
    }
}
