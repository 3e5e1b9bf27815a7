//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_area = layout::create_layout(area);

    match app.state.current_view() {
        View::Login => forms::draw_login(frame, main_area, app),
        View::Dashboard => dashboard::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Toasts overlay everything else
    components::render_notifications(frame, main_area, &app.state.notifications);
}
