//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content area above the status bar
pub fn create_layout(area: Rect) -> Rect {
    // Reserve bottom line for status bar
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    }
}

/// A rect of at most `width` x `height`, centered inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Login => "Tab: next field | Enter: sign in | ^P: show password | Esc: quit",
        View::Dashboard => "Esc: back | q: quit",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Session status
    let session_status = if app.state.session.is_authenticated() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(session_status);

    spans.push(Span::styled(
        format!("{} ", app.state.current_view().title()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(
        get_view_hints(app.state.current_view()),
        Style::default().fg(Color::Gray),
    ));

    if app.state.login.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(error) = app.state.login.submission().last_error() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(error, Style::default().fg(Color::Red)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
