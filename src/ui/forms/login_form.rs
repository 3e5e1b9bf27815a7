//! Login card

use super::field_renderer::{draw_field, draw_field_error, FieldView};
use crate::app::App;
use crate::state::{LoginField, LoginForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 18;
const DEMO_PANEL_HEIGHT: u16 = 4;

const DEMO_EMAIL: &str = "admin@taskflow.com";
const DEMO_PASSWORD: &str = "admin123";

/// Draw the login view
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let show_demo = app.state.show_demo_credentials;
    let total_height = if show_demo {
        CARD_HEIGHT + DEMO_PANEL_HEIGHT
    } else {
        CARD_HEIGHT
    };
    let outer = centered_rect(CARD_WIDTH, total_height, area);

    let (card_area, demo_area) = if show_demo {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(DEMO_PANEL_HEIGHT)])
            .split(outer);
        (chunks[0], Some(chunks[1]))
    } else {
        (outer, None)
    };

    draw_card(frame, card_area, app);
    if let Some(demo_area) = demo_area {
        draw_demo_credentials(frame, demo_area);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " TaskFlow ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),             // subtitle
            Constraint::Length(1),             // spacer
            Constraint::Length(3),             // email
            Constraint::Length(1),             // email error
            Constraint::Length(3),             // password
            Constraint::Length(1),             // password error
            Constraint::Length(BUTTON_HEIGHT), // submit
            Constraint::Min(0),                // help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Sign in to continue")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let form = &app.state.login.form;
    draw_login_field(frame, chunks[2], form, LoginField::Email);
    draw_field_error(frame, chunks[3], form.visible_error(LoginField::Email));
    draw_login_field(frame, chunks[4], form, LoginField::Password);
    draw_field_error(frame, chunks[5], form.visible_error(LoginField::Password));

    let submitting = app.state.login.is_submitting();
    let label = if submitting {
        "Signing in..."
    } else {
        "Continue →"
    };
    render_button(
        frame,
        chunks[6],
        label,
        form.is_submit_focused(),
        !submitting,
    );

    draw_help_text(frame, chunks[7]);
}

fn draw_login_field(frame: &mut Frame, area: Rect, form: &LoginForm, field: LoginField) {
    let value = form.display_value(field);
    let hint = match field {
        LoginField::Password if form.show_password => Some("^P hide"),
        LoginField::Password => Some("^P show"),
        LoginField::Email => None,
    };
    draw_field(
        frame,
        area,
        FieldView {
            label: field.label(),
            value: &value,
            placeholder: field.placeholder(),
            is_active: form.active_text_field() == Some(field),
            status: form.field_status(field),
            hint,
        },
    );
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    let help = Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(" next  ", text),
        Span::styled("Enter", key),
        Span::styled(" sign in  ", text),
        Span::styled("Esc", key),
        Span::styled(" quit", text),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}

fn draw_demo_credentials(frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);
    let content = vec![
        Line::from(vec![
            Span::styled("Email:    ", label),
            Span::styled(DEMO_EMAIL, value),
        ]),
        Line::from(vec![
            Span::styled("Password: ", label),
            Span::styled(DEMO_PASSWORD, value),
        ]),
    ];
    let block = Block::default()
        .title(" Demo credentials ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(content).block(block), area);
}
