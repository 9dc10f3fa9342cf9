use serde::{Deserialize, Serialize};

/// One of the four text inputs on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter your name...",
            FormField::Email => "Enter your email...",
            FormField::Password => "Enter your password...",
            FormField::ConfirmPassword => "Confirm your password...",
        }
    }

    /// Masked fields carry a visibility toggle.
    pub fn secret(self) -> Option<SecretField> {
        match self {
            FormField::Password => Some(SecretField::Password),
            FormField::ConfirmPassword => Some(SecretField::ConfirmPassword),
            FormField::Name | FormField::Email => None,
        }
    }

    pub fn is_email(self) -> bool {
        self == FormField::Email
    }

    /// Advisory cue shown next to a field while it is being typed. Submission
    /// does not check address format.
    pub fn format_hint(self, value: &str) -> Option<&'static str> {
        if self.is_email() && !value.is_empty() && !looks_like_email(value) {
            Some("Expected an address like name@example.com")
        } else {
            None
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretField {
    Password,
    ConfirmPassword,
}

impl SecretField {
    pub fn field(self) -> FormField {
        match self {
            SecretField::Password => FormField::Password,
            SecretField::ConfirmPassword => FormField::ConfirmPassword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_password_fields_are_secret() {
        let secret: Vec<_> = FormField::ALL
            .into_iter()
            .filter_map(FormField::secret)
            .collect();
        assert_eq!(
            secret,
            vec![SecretField::Password, SecretField::ConfirmPassword]
        );
        for field in secret {
            assert_eq!(field.field().secret(), Some(field));
        }
    }

    #[test]
    fn only_the_email_field_gets_a_format_hint() {
        assert!(FormField::Email.format_hint("ana").is_some());
        assert!(FormField::Email.format_hint("ana@").is_some());
        assert!(FormField::Email.format_hint("@example.com").is_some());
        assert!(FormField::Email.format_hint("ana@localhost").is_some());
        assert_eq!(FormField::Email.format_hint("ana@example.com"), None);
        assert_eq!(FormField::Email.format_hint(""), None);

        for field in [FormField::Name, FormField::Password, FormField::ConfirmPassword] {
            assert!(!field.is_email());
            assert_eq!(field.format_hint("no at sign"), None, "{field:?}");
        }
    }

    #[test]
    fn field_names_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&FormField::ConfirmPassword).expect("serialize"),
            "\"confirm_password\""
        );
    }
}
