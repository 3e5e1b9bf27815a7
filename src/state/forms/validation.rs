//! Field validation rules for the login form

use super::field::LoginField;
use thiserror::Error;

/// Default minimum password length in characters
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// A per-field validation failure. The `Display` text is shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Password is required")]
    Empty,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

/// Tunable validation thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Validate a single field value
pub fn validate(field: LoginField, value: &str, rules: &ValidationRules) -> Option<FieldError> {
    match field {
        LoginField::Email => validate_email(value),
        LoginField::Password => validate_password(value, rules.min_password_length),
    }
}

/// Email must look like `local@domain.tld`
pub fn validate_email(value: &str) -> Option<FieldError> {
    if is_email_shaped(value) {
        None
    } else {
        Some(FieldError::InvalidFormat)
    }
}

/// Password must be present and at least `min_length` characters
pub fn validate_password(value: &str, min_length: usize) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Empty);
    }
    if value.chars().count() < min_length {
        return Some(FieldError::TooShort { min: min_length });
    }
    None
}

fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let valid_part =
        |s: &str| !s.is_empty() && !s.contains('@') && !s.chars().any(char::is_whitespace);
    if !valid_part(local) || !valid_part(domain) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_malformed_emails_are_rejected() {
            for value in [
                "",
                "bad",
                "user.example.com",
                "user@",
                "@example.com",
                "user@example",
                "user@example.",
                "user@.com",
                "user@exa..mple.com",
                "us er@example.com",
                "user@exam ple.com",
                "user@@example.com",
                "user@example@com.org",
            ] {
                assert_eq!(
                    validate_email(value),
                    Some(FieldError::InvalidFormat),
                    "expected {value:?} to be rejected"
                );
            }
        }

        #[test]
        fn test_well_formed_emails_are_accepted() {
            for value in [
                "user@example.com",
                "admin@taskflow.com",
                "first.last+tag@sub.domain.io",
                "a@b.co",
            ] {
                assert!(validate_email(value).is_none(), "expected {value:?} to pass");
            }
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_empty_password() {
            assert_eq!(validate_password("", 6), Some(FieldError::Empty));
        }

        #[test]
        fn test_short_passwords() {
            for value in ["x", "abc", "12345"] {
                assert_eq!(
                    validate_password(value, 6),
                    Some(FieldError::TooShort { min: 6 })
                );
            }
        }

        #[test]
        fn test_threshold_is_inclusive() {
            assert!(validate_password("123456", 6).is_none());
            assert!(validate_password("admin123", 6).is_none());
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            // 5 chars, 10 bytes
            assert!(validate_password("ééééé", 6).is_some());
            assert!(validate_password("éééééé", 6).is_none());
        }
    }

    #[test]
    fn test_validate_dispatches_by_field() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate(LoginField::Email, "bad", &rules),
            Some(FieldError::InvalidFormat)
        );
        assert_eq!(
            validate(LoginField::Password, "x", &rules),
            Some(FieldError::TooShort { min: 6 })
        );
        assert!(validate(LoginField::Email, "user@example.com", &rules).is_none());
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_password_length: 8,
        };
        assert!(validate(LoginField::Password, "1234567", &rules).is_some());
        assert!(validate(LoginField::Password, "12345678", &rules).is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::Empty.to_string(), "Password is required");
        assert_eq!(
            FieldError::TooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
