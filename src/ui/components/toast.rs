//! Toast notifications stacked in the top-right corner

use crate::state::{NotificationKind, Notifications};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 40;

fn toast_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("✓", Color::Green),
        NotificationKind::Error => ("✗", Color::Red),
    }
}

/// Render every live notification, newest at the top
pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &Notifications) {
    if notifications.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width);
    // borders + icon column
    let text_width = width.saturating_sub(6) as usize;
    let mut y = area.y + 1;

    for notification in notifications.iter().collect::<Vec<_>>().into_iter().rev() {
        let (icon, color) = toast_style(notification.kind);
        let lines = wrap_text(&notification.message, text_width);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };

        let content: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let prefix = if i == 0 {
                    Span::styled(
                        format!("{icon} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                };
                Line::from(vec![prefix, Span::raw(line)])
            })
            .collect();

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            ),
            toast_area,
        );

        y += height;
    }
}

/// Wrap text to fit within a maximum width, hard-splitting words that
/// are longer than a whole line
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_width) {
                if current_len + piece.len() + 1 > max_width && current_len > 0 {
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                }
                if current_len > 0 {
                    current_line.push(' ');
                    current_len += 1;
                }
                current_line.extend(piece);
                current_len += piece.len();
            }
        }
        lines.push(current_line);
    }

    lines
}
