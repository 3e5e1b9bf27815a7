//! Login flow: submission controller and its collaborator seams

mod collaborators;
mod controller;

pub use collaborators::{Navigator, Notifier};
pub use controller::LoginController;

#[cfg(test)]
pub use collaborators::{MockNavigator, MockNotifier};
