//! Application state definitions

use super::notification::Notifications;
use super::session::Session;
use crate::config::TuiConfig;
use crate::login::{LoginController, Navigator};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    /// Authenticated landing view
    Dashboard,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// Options for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing onto it
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Current view plus back-navigation history
#[derive(Debug, Clone, Default)]
pub struct Router {
    pub current_view: View,
    pub view_history: Vec<View>,
}

impl Router {
    /// Go back to the previous view. Does nothing with an empty history.
    pub fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.current_view = view;
        }
    }
}

impl Navigator for Router {
    fn navigate(&mut self, view: View, options: NavigateOptions) {
        tracing::debug!(from = ?self.current_view, to = ?view, replace = options.replace, "Navigate");
        if !options.replace {
            self.view_history.push(self.current_view);
        }
        self.current_view = view;
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub router: Router,
    pub login: LoginController,
    pub session: Session,
    pub notifications: Notifications,
    /// Show the demo credentials panel on the login view
    pub show_demo_credentials: bool,
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            router: Router::default(),
            login: LoginController::new(config.validation_rules()),
            session: Session::default(),
            notifications: Notifications::new(config.notification_timeout()),
            show_demo_credentials: config.show_demo_credentials(),
        }
    }

    pub fn current_view(&self) -> View {
        self.router.current_view
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}
