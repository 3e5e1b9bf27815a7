//! Form domain layer
//!
//! Type-safe state for the login form: field values, touched flags,
//! validation errors and focus.

mod field;
mod form_state;
mod validation;

pub use field::LoginField;
pub use form_state::{FieldStatus, Form, LoginForm};
pub use validation::{FieldError, ValidationRules, DEFAULT_MIN_PASSWORD_LENGTH};
