//! Login form state: values, touched flags, errors and focus

use super::field::{FieldMap, LoginField};
use super::validation::{validate, FieldError, ValidationRules};
use crate::auth::Credentials;

/// Character used to obscure the password while it is hidden
pub const MASK_CHAR: char = '•';

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Inline marker state for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet blurred, or blurred while still empty
    Pristine,
    Valid,
    Invalid,
}

/// Login form state holder
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub data: FieldMap<String>,
    pub touched: FieldMap<bool>,
    pub errors: FieldMap<Option<FieldError>>,
    /// Whether the password is rendered in clear text
    pub show_password: bool,
    /// 0 = email, 1 = password, 2 = submit button
    pub active_field_index: usize,
    rules: ValidationRules,
}

impl LoginForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = 2;

    pub fn new(rules: ValidationRules) -> Self {
        Self {
            data: FieldMap::default(),
            touched: FieldMap::default(),
            errors: FieldMap::default(),
            show_password: false,
            active_field_index: 0,
            rules,
        }
    }

    pub fn value(&self, field: LoginField) -> &str {
        self.data.get(field)
    }

    /// Replace a field value. Once a field has been touched it is
    /// re-validated on every change.
    pub fn set_field(&mut self, field: LoginField, value: String) {
        self.data.set(field, value);
        if *self.touched.get(field) {
            self.validate_field(field);
        }
    }

    /// Record a blur on `field` and validate it
    pub fn mark_touched(&mut self, field: LoginField) {
        self.touched.set(field, true);
        self.validate_field(field);
    }

    /// Validate every field, mark every field touched, and report whether
    /// the form is valid
    pub fn validate_all(&mut self) -> bool {
        for field in LoginField::ALL {
            self.touched.set(field, true);
            self.validate_field(field);
        }
        self.errors.iter().all(|(_, e)| e.is_none())
    }

    fn validate_field(&mut self, field: LoginField) {
        let error = validate(field, self.data.get(field), &self.rules);
        self.errors.set(field, error);
    }

    /// The error to show inline, only once the field has been touched
    pub fn visible_error(&self, field: LoginField) -> Option<&FieldError> {
        if *self.touched.get(field) {
            self.errors.get(field).as_ref()
        } else {
            None
        }
    }

    pub fn field_status(&self, field: LoginField) -> FieldStatus {
        if !*self.touched.get(field) {
            return FieldStatus::Pristine;
        }
        match self.errors.get(field) {
            Some(_) => FieldStatus::Invalid,
            None if self.data.get(field).is_empty() => FieldStatus::Pristine,
            None => FieldStatus::Valid,
        }
    }

    /// The focused text field, or `None` when the submit button is focused
    pub fn active_text_field(&self) -> Option<LoginField> {
        LoginField::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.get(field).clone();
            value.push(c);
            self.set_field(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.get(field).clone();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Value as it should be rendered (masked password unless revealed)
    pub fn display_value(&self, field: LoginField) -> String {
        let value = self.data.get(field);
        match field {
            LoginField::Password if !self.show_password => {
                MASK_CHAR.to_string().repeat(value.chars().count())
            }
            _ => value.clone(),
        }
    }

    /// Snapshot of the current values for dispatch
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.data.email.clone(),
            password: self.data.password.clone(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(ValidationRules::default())
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // email, password, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from a text field counts as a blur
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_INDEX);
        if index != self.active_field_index {
            if let Some(left) = self.active_text_field() {
                self.mark_touched(left);
            }
        }
        self.active_field_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_field(LoginField::Email, email.to_string());
        form.set_field(LoginField::Password, password.to_string());
        form
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty_and_untouched() {
            let form = LoginForm::default();
            assert_eq!(form.data, FieldMap::default());
            assert_eq!(form.touched, FieldMap::default());
            assert_eq!(form.errors, FieldMap::default());
            assert_eq!(form.active_field_index, 0);
            assert!(!form.show_password);
        }

        #[test]
        fn test_untouched_field_is_not_revalidated_on_change() {
            let mut form = LoginForm::default();
            form.set_field(LoginField::Email, "bad".to_string());
            assert!(form.errors.email.is_none());
        }

        #[test]
        fn test_touched_field_is_revalidated_on_change() {
            let mut form = LoginForm::default();
            form.mark_touched(LoginField::Email);
            assert_eq!(form.errors.email, Some(FieldError::InvalidFormat));

            form.set_field(LoginField::Email, "user@example.com".to_string());
            assert!(form.errors.email.is_none());

            form.set_field(LoginField::Email, "user@example".to_string());
            assert_eq!(form.errors.email, Some(FieldError::InvalidFormat));
        }

        #[test]
        fn test_push_and_pop_char_edit_active_field() {
            let mut form = LoginForm::default();
            for c in "ab".chars() {
                form.push_char(c);
            }
            assert_eq!(form.value(LoginField::Email), "ab");
            form.pop_char();
            assert_eq!(form.value(LoginField::Email), "a");
            assert_eq!(form.value(LoginField::Password), "");
        }

        #[test]
        fn test_typing_on_submit_button_is_ignored() {
            let mut form = LoginForm::default();
            form.active_field_index = LoginForm::SUBMIT_INDEX;
            form.push_char('x');
            form.pop_char();
            assert_eq!(form.data, FieldMap::default());
        }

        #[test]
        fn test_pop_char_on_empty_touched_field_keeps_error() {
            let mut form = LoginForm::default();
            form.mark_touched(LoginField::Email);
            form.pop_char();
            assert_eq!(form.errors.email, Some(FieldError::InvalidFormat));
        }
    }

    mod touched {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mark_touched_validates_only_that_field() {
            let mut form = LoginForm::default();
            form.mark_touched(LoginField::Password);
            assert!(form.touched.password);
            assert!(!form.touched.email);
            assert_eq!(form.errors.password, Some(FieldError::Empty));
            assert!(form.errors.email.is_none());
        }

        #[test]
        fn test_leaving_a_field_marks_it_touched() {
            let mut form = LoginForm::default();
            form.next_field();
            assert!(form.touched.email);
            assert!(!form.touched.password);
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_leaving_submit_button_touches_nothing() {
            let mut form = LoginForm::default();
            form.active_field_index = LoginForm::SUBMIT_INDEX;
            form.next_field();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.touched, FieldMap::default());
        }

        #[test]
        fn test_touched_never_resets() {
            let mut form = LoginForm::default();
            form.mark_touched(LoginField::Email);
            form.set_field(LoginField::Email, String::new());
            form.validate_all();
            form.set_field(LoginField::Email, "x".to_string());
            assert!(form.touched.email);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = LoginForm::default();
            form.prev_field();
            assert!(form.is_submit_focused());
            assert!(form.touched.email);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = LoginForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, LoginForm::SUBMIT_INDEX);
        }
    }

    mod validate_all {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_untouched_form_is_invalid_and_becomes_touched() {
            let mut form = LoginForm::default();
            assert!(!form.validate_all());
            assert!(form.touched.email);
            assert!(form.touched.password);
            assert!(form.errors.email.is_some());
            assert!(form.errors.password.is_some());
        }

        #[test]
        fn test_valid_form() {
            let mut form = filled("user@example.com", "admin123");
            assert!(form.validate_all());
            assert_eq!(form.errors, FieldMap::default());
        }

        #[test]
        fn test_invalid_values_set_both_errors() {
            let mut form = filled("bad", "x");
            assert!(!form.validate_all());
            assert_eq!(form.errors.email, Some(FieldError::InvalidFormat));
            assert_eq!(form.errors.password, Some(FieldError::TooShort { min: 6 }));
        }

        #[test]
        fn test_revalidates_even_if_errors_were_stale() {
            let mut form = filled("user@example.com", "admin123");
            form.errors.email = Some(FieldError::InvalidFormat);
            assert!(form.validate_all());
        }
    }

    mod display {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_visible_error_requires_touch() {
            let mut form = filled("bad", "");
            form.errors.email = Some(FieldError::InvalidFormat);
            assert!(form.visible_error(LoginField::Email).is_none());
            form.mark_touched(LoginField::Email);
            assert_eq!(
                form.visible_error(LoginField::Email),
                Some(&FieldError::InvalidFormat)
            );
        }

        #[test]
        fn test_field_status() {
            let mut form = LoginForm::default();
            assert_eq!(form.field_status(LoginField::Email), FieldStatus::Pristine);
            form.mark_touched(LoginField::Email);
            assert_eq!(form.field_status(LoginField::Email), FieldStatus::Invalid);
            form.set_field(LoginField::Email, "user@example.com".to_string());
            assert_eq!(form.field_status(LoginField::Email), FieldStatus::Valid);
        }

        #[test]
        fn test_password_is_masked_until_revealed() {
            let mut form = filled("user@example.com", "secret1");
            assert_eq!(form.display_value(LoginField::Password), "•••••••");
            form.toggle_password_visibility();
            assert_eq!(form.display_value(LoginField::Password), "secret1");
            form.toggle_password_visibility();
            assert!(!form.show_password);
        }

        #[test]
        fn test_visibility_toggle_does_not_affect_validation() {
            let mut form = filled("user@example.com", "x");
            form.toggle_password_visibility();
            assert!(form.errors.password.is_none());
            assert_eq!(form.touched, FieldMap::default());
        }

        #[test]
        fn test_email_is_never_masked() {
            let form = filled("user@example.com", "");
            assert_eq!(form.display_value(LoginField::Email), "user@example.com");
        }
    }

    #[test]
    fn test_credentials_snapshot() {
        let form = filled("user@example.com", "admin123");
        let creds = form.credentials();
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password, "admin123");
    }
}
