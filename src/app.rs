//! Application state and core logic

use crate::auth::{AuthClientTrait, AuthError, HttpAuthClient, User};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, LoginField, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results delivered back to the UI task by background requests
#[derive(Debug)]
pub enum AuthEvent {
    LoginFinished(Result<User, AuthError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Authentication collaborator, shared with in-flight login tasks
    auth: Arc<dyn AuthClientTrait>,
    auth_tx: UnboundedSender<AuthEvent>,
    auth_rx: UnboundedReceiver<AuthEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured TaskFlow API
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = HttpAuthClient::new(config)?;
        Ok(Self::with_client(Arc::new(client), config))
    }

    /// Create an App around an arbitrary auth collaborator
    pub fn with_client(auth: Arc<dyn AuthClientTrait>, config: &TuiConfig) -> Self {
        let (auth_tx, auth_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config),
            auth,
            auth_tx,
            auth_rx,
            quit: false,
        }
    }

    /// Restore any existing session, then run the entry guard
    pub async fn mount(&mut self) {
        match self.auth.current_user().await {
            Ok(Some(user)) => self.state.session.sign_in(user),
            Ok(None) => {}
            Err(e) => tracing::warn!("Session check failed: {e}"),
        }
        self.check_entry_guard();
    }

    /// Leave the login view if the session is already authenticated
    fn check_entry_guard(&mut self) {
        if self.state.current_view() == View::Login {
            self.state
                .login
                .guard_entry(&self.state.session, &mut self.state.router);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Expire old notifications
    pub fn tick(&mut self) {
        self.state.notifications.prune_expired(Instant::now());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view() {
            View::Login => self.handle_login_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
    }

    /// Handle keys in Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.login.form;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.toggle_password_visibility();
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => match form.active_text_field() {
                Some(LoginField::Email) => form.next_field(),
                _ => self.submit_login(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c);
            }
            KeyCode::Backspace => form.pop_char(),
            _ => {}
        }
    }

    /// Handle keys in Dashboard view
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.router.go_back(),
            _ => {}
        }
    }

    /// Validate the form and, if valid, dispatch the login on a background task
    pub fn submit_login(&mut self) {
        let Some(credentials) = self
            .state
            .login
            .begin_submit(&mut self.state.notifications)
        else {
            return;
        };

        let auth = Arc::clone(&self.auth);
        let tx = self.auth_tx.clone();
        tokio::spawn(async move {
            let result = auth.login(&credentials).await;
            if tx.send(AuthEvent::LoginFinished(result)).is_err() {
                tracing::debug!("Login finished after the UI shut down");
            }
        });
    }

    /// Apply any finished background requests without blocking
    pub fn poll_auth_events(&mut self) {
        while let Ok(event) = self.auth_rx.try_recv() {
            self.apply_auth_event(event);
        }
    }

    fn apply_auth_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::LoginFinished(result) => {
                let state = &mut self.state;
                state.login.complete_submit(
                    result,
                    &mut state.session,
                    &mut state.router,
                    &mut state.notifications,
                );
            }
        }
        self.check_entry_guard();
    }
}
