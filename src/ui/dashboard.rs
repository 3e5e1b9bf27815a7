//! Landing view shown after a successful sign-in

use crate::app::App;
use crate::auth::User;
use crate::ui::layout::centered_rect;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(56, 9, area);
    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let content = match app.state.session.user() {
        Some(user) => user_lines(user, app.state.session.signed_in_at()),
        None => vec![Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center),
        card,
    );
}

fn user_lines(user: &User, signed_in_at: Option<DateTime<Utc>>) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {}!", user.display_name()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email: ", label),
            Span::raw(user.email.as_str()),
        ]),
    ];
    if let Some(role) = &user.role {
        lines.push(Line::from(vec![
            Span::styled("Role: ", label),
            Span::raw(role.as_str()),
        ]));
    }
    if let Some(at) = signed_in_at {
        lines.push(Line::from(vec![
            Span::styled("Signed in: ", label),
            Span::raw(format_signed_in(at)),
        ]));
    }
    lines
}

fn format_signed_in(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
