//! Form state and the checks that gate submission.

use shared::{
    domain::{FormField, SecretField},
    protocol::SignupRequest,
};
use zeroize::{Zeroize, Zeroizing};

use crate::error::ValidationError;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Scratch copy for a text widget to edit in place; wiped when dropped.
    pub fn edit_buffer(&self, field: FormField) -> Zeroizing<String> {
        Zeroizing::new(self.get(field).to_string())
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        };
        if field.secret().is_some() {
            slot.zeroize();
        }
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Emptiness is exact: whitespace counts as content. Comparison of the
    /// two passwords is byte-for-byte.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if FormField::ALL.iter().any(|field| self.get(*field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
        self.name.clear();
        self.email.clear();
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_len", &self.password.len())
            .field("confirm_password_len", &self.confirm_password.len())
            .finish()
    }
}

/// Whether each masked field is currently shown in plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub password_visible: bool,
    pub confirm_password_visible: bool,
}

impl VisibilityFlags {
    pub fn is_visible(&self, field: SecretField) -> bool {
        match field {
            SecretField::Password => self.password_visible,
            SecretField::ConfirmPassword => self.confirm_password_visible,
        }
    }

    /// Returns the new value.
    pub fn toggle(&mut self, field: SecretField) -> bool {
        let flag = match field {
            SecretField::Password => &mut self.password_visible,
            SecretField::ConfirmPassword => &mut self.confirm_password_visible,
        };
        *flag = !*flag;
        *flag
    }
}
