//! Seams between the login controller and the rest of the application

use crate::state::{NavigateOptions, NotificationKind, View};

/// Performs view redirects
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, view: View, options: NavigateOptions);
}

/// Surfaces transient success/error messages
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}
