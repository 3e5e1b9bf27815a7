//! Application state module

mod app_state;
mod forms;
mod notification;
mod session;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use notification::*;
pub use session::*;
pub use submission::*;
