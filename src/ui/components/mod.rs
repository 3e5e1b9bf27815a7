//! Reusable UI components

mod button;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use toast::render_notifications;
