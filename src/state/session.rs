//! Authenticated session

use crate::auth::User;
use chrono::{DateTime, Utc};

/// The signed-in user, if any
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn sign_in(&mut self, user: User) {
        tracing::debug!(user_id = %user.id, "Session established");
        self.user = Some(user);
        self.signed_in_at = Some(Utc::now());
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }
}
