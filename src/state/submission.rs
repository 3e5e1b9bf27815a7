//! Submission state of the login form

/// Where the login form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A login request is in flight; the submit control is inert
    Submitting,
    /// The last attempt failed. Behaves like `Idle`.
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Message of the most recent failure, if the last attempt failed
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
