//! Field rendering utilities for forms

use crate::state::{FieldError, FieldStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one single-line input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub status: FieldStatus,
    /// Extra hint rendered in the bottom border (e.g. visibility toggle)
    pub hint: Option<&'a str>,
}

/// Border colour follows validation first, focus second
fn border_color(is_active: bool, status: FieldStatus) -> Color {
    match status {
        FieldStatus::Invalid => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Pristine if is_active => Color::Cyan,
        FieldStatus::Pristine => Color::DarkGray,
    }
}

fn status_marker(status: FieldStatus) -> Option<Span<'static>> {
    match status {
        FieldStatus::Invalid => Some(Span::styled(" ✗", Style::default().fg(Color::Red))),
        FieldStatus::Valid => Some(Span::styled(" ✓", Style::default().fg(Color::Green))),
        FieldStatus::Pristine => None,
    }
}

/// Draw a bordered single-line input
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let color = border_color(field.is_active, field.status);

    let mut spans = if field.value.is_empty() && !field.is_active {
        vec![Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        let text_style = if field.is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![Span::styled(field.value, text_style)]
    };

    if field.is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    if let Some(marker) = status_marker(field.status) {
        spans.push(marker);
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(hint) = field.hint {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {hint} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the inline error line under a field (blank when there is none)
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let line = Line::from(vec![
            Span::styled(" ! ", Style::default().fg(Color::Red)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
