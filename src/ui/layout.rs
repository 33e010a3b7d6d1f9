//! Layout components (header, form area, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{form_columns, SignupField, HEADER_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Centered column of the content area holding the form
pub fn form_area(content: Rect) -> Rect {
    let (x, width) = form_columns(content.width);
    Rect {
        x: content.x + x,
        width,
        ..content
    }
}

/// Draw the header title bar
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Sign Up",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the key help line
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::raw(": next  "),
        Span::styled("Shift+Tab", key),
        Span::raw(": prev  "),
    ];
    if app.state.form.focus == SignupField::Role {
        spans.push(Span::styled("←/→", key));
        spans.push(Span::raw(": role  "));
    }
    spans.extend([
        Span::styled("Enter", key),
        Span::raw("/"),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::raw(": create account  "),
        Span::styled(REVEAL_SHORTCUT, key),
        Span::raw(if app.state.reveal_password {
            ": hide password  "
        } else {
            ": show password  "
        }),
        Span::styled("Ctrl+C", key),
        Span::raw(": quit"),
    ]);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
