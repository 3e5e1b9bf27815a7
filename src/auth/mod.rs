//! Authentication collaborator: HTTP client and the trait it implements

mod client;
mod traits;
mod types;

pub use client::HttpAuthClient;
pub use traits::AuthClientTrait;
pub use types::{AuthError, Credentials, User};

#[cfg(test)]
pub use traits::MockAuthClientTrait;
