//! Submission controller for the login form
//!
//! Drives the form through validate, dispatch and redirect:
//!
//! - `begin_submit` validates every field and, if the form is valid and no
//!   request is in flight, moves to `Submitting` and hands back the
//!   credentials to dispatch.
//! - `complete_submit` applies the collaborator's answer. On success the
//!   session is updated before redirecting; on failure the form is
//!   re-enabled.
//! - `guard_entry` redirects away from the form when a session already
//!   exists.

use super::collaborators::{Navigator, Notifier};
use crate::auth::{AuthError, Credentials, User};
use crate::state::{
    LoginForm, NavigateOptions, NotificationKind, Session, SubmissionState, ValidationRules, View,
};

pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors before submitting";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// View users land on once authenticated
pub const LANDING_VIEW: View = View::Dashboard;

#[derive(Debug, Clone, Default)]
pub struct LoginController {
    pub form: LoginForm,
    submission: SubmissionState,
}

impl LoginController {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            form: LoginForm::new(rules),
            submission: SubmissionState::Idle,
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Start a submission. Returns the credentials to send, or `None` when
    /// a request is already in flight or validation failed.
    pub fn begin_submit(&mut self, notifier: &mut impl Notifier) -> Option<Credentials> {
        if !self.submission.can_submit() {
            tracing::debug!("Submit ignored, login already in flight");
            return None;
        }

        if !self.form.validate_all() {
            tracing::debug!(errors = ?self.form.errors, "Submit blocked by validation");
            notifier.notify(NotificationKind::Error, VALIDATION_FAILED_MESSAGE);
            return None;
        }

        let credentials = self.form.credentials();
        tracing::debug!("Submitting login");
        self.submission = SubmissionState::Submitting;
        Some(credentials)
    }

    /// Apply the result of the login request started by `begin_submit`
    pub fn complete_submit(
        &mut self,
        result: Result<User, AuthError>,
        session: &mut Session,
        navigator: &mut impl Navigator,
        notifier: &mut impl Notifier,
    ) {
        if !self.submission.is_submitting() {
            tracing::debug!("Discarding login result with no submission in flight");
            return;
        }

        match result {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Login succeeded");
                session.sign_in(user);
                self.submission = SubmissionState::Idle;
                notifier.notify(NotificationKind::Success, LOGIN_SUCCESS_MESSAGE);
                navigator.navigate(LANDING_VIEW, NavigateOptions::replace());
            }
            Err(err) => {
                tracing::debug!("Login failed: {err}");
                let message = err.user_message();
                notifier.notify(NotificationKind::Error, &message);
                self.submission = SubmissionState::Failed { message };
            }
        }
    }

    /// Redirect to the landing view if the session is already
    /// authenticated. Returns whether a redirect happened.
    pub fn guard_entry(&self, session: &Session, navigator: &mut impl Navigator) -> bool {
        match session.user() {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Already signed in, skipping login form");
                navigator.navigate(LANDING_VIEW, NavigateOptions::replace());
                true
            }
            None => false,
        }
    }
}
