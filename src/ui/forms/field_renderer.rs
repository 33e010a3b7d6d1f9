//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
/// `mask` hides secret values.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, mask: bool) {
    let accent = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(mask);
    let mut spans = if display_value.is_empty() {
        vec![Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(display_value, Style::default().fg(Color::White))]
    };

    if is_active {
        if field.is_role() {
            spans.insert(0, Span::styled("◂ ", accent));
            spans.push(Span::styled(" ▸", accent));
        } else if field.is_empty() {
            // Cursor sits before the placeholder
            spans.insert(0, Span::styled("▌", accent));
        } else {
            spans.push(Span::styled("▌", accent));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(accent);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw an inline validation message under a field; blank when `message` is None
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(paragraph, area);
    }
}
