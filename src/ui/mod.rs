//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_signup(frame, layout::form_area(content_area), app);
    layout::draw_status_bar(frame, status_area, app);

    // Alerts are modal and drawn last
    if let Some(message) = app.state.alerts.current() {
        components::render_alert_dialog(frame, message);
    }
}
