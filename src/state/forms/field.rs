//! Login form fields and per-field storage

/// The text fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    /// All fields in tab order
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    /// Label shown on the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Placeholder shown while the field is empty and unfocused
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "Your email",
            Self::Password => "Your password",
        }
    }
}

/// One value per login field.
///
/// Backs the form data, the touched flags and the error state so that
/// every record is indexed the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    pub email: T,
    pub password: T,
}

impl<T> FieldMap<T> {
    pub fn get(&self, field: LoginField) -> &T {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: LoginField) -> &mut T {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, value: T) {
        *self.get_mut(field) = value;
    }

    /// Iterate over `(field, value)` pairs in tab order
    pub fn iter(&self) -> impl Iterator<Item = (LoginField, &T)> {
        LoginField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
