use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const FIELD_NAME: &str = "nom";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

// The "valid e-mail address" production browsers use for <input type="email">.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Le champ « {0} » est obligatoire")]
    Missing(&'static str),
    #[error("Adresse email invalide")]
    InvalidEmail,
}

/// What the contact form sends to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Mirrors the `required` / `type="email"` constraints on the form so an
    /// invalid submission never reaches the relay.
    pub fn validate(&self) -> Result<(), ContactError> {
        // browsers strip surrounding whitespace from type="email" values only
        let email = self.email.trim();
        let fields = [
            (FIELD_NAME, self.name.as_str()),
            (FIELD_EMAIL, email),
            (FIELD_MESSAGE, self.message.as_str()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(ContactError::Missing(*field));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(
            submission("Ada", "ada@example.com", "Bonjour !\nÀ bientôt").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_empty_email_is_blocked() {
        assert_eq!(
            submission("Ada", "", "Bonjour").validate(),
            Err(ContactError::Missing(FIELD_EMAIL))
        );
        assert_eq!(
            submission("Ada", "   ", "Bonjour").validate(),
            Err(ContactError::Missing(FIELD_EMAIL))
        );
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        assert_eq!(
            ContactSubmission::default().validate(),
            Err(ContactError::Missing(FIELD_NAME))
        );
        assert_eq!(
            submission("Ada", "ada@example.com", "").validate(),
            Err(ContactError::Missing(FIELD_MESSAGE))
        );
    }

    #[test]
    fn test_whitespace_only_name_and_message_are_accepted() {
        assert_eq!(
            submission("   ", "ada@example.com", "  \n ").validate(),
            Ok(())
        );
        assert_eq!(
            submission("Ada", "  ada@example.com ", "hi").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_malformed_email() {
        for email in ["ada", "ada@", "@example.com", "ada@exa mple.com", "a b@example.com"] {
            assert_eq!(
                submission("Ada", email, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
        // browsers accept dotless domains
        assert_eq!(submission("Ada", "ada@localhost", "hi").validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Missing(FIELD_EMAIL).to_string(),
            "Le champ « email » est obligatoire"
        );
    }
}
