//! Form rendering module
//!
//! - `field_renderer`: single-line input and inline error rendering
//! - `login_form`: the sign-in card

mod field_renderer;
mod login_form;

pub use login_form::draw_login;
