//! Boundary payload validation.
//!
//! Form submissions arrive as loosely-shaped JSON. Payload types here accept
//! every field as optional, then [`ContactPayload::validate`] and
//! [`SubscribePayload::validate`] either produce a trusted `New*` input for
//! the store or a [`ValidationError`] listing every failing field. The store
//! itself never validates — it trusts its caller's input shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inbox::{NewContactMessage, NewSubscriber};

/// A single per-field validation failure, serialized into 400 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying one entry per failing field.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("invalid payload: {} field error(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Raw contact form submission, all fields optional until validated.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactPayload {
    /// Check required fields and email shape, collecting every failure.
    pub fn validate(self) -> Result<NewContactMessage, ValidationError> {
        let mut errors = Vec::new();

        let name = required("name", self.name, &mut errors);
        let email = required("email", self.email, &mut errors);
        let subject = required("subject", self.subject, &mut errors);
        let message = required("message", self.message, &mut errors);

        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.push(FieldError::new("email", "must be a valid email address"));
            }
        }

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(NewContactMessage {
                    name,
                    email,
                    phone: self.phone.filter(|p| !p.trim().is_empty()),
                    subject,
                    message,
                })
            }
            _ => Err(ValidationError { errors }),
        }
    }
}

/// Raw newsletter subscription payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribePayload {
    pub email: Option<String>,
}

impl SubscribePayload {
    pub fn validate(self) -> Result<NewSubscriber, ValidationError> {
        let mut errors = Vec::new();
        let email = required("email", self.email, &mut errors);

        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.push(FieldError::new("email", "must be a valid email address"));
            }
        }

        match email {
            Some(email) if errors.is_empty() => Ok(NewSubscriber { email }),
            _ => Err(ValidationError { errors }),
        }
    }
}

fn required(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::new(field, "must not be empty"));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// domain with an interior dot. Deliverability is the mail system's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_payload() -> ContactPayload {
        ContactPayload {
            name: Some("Priya Raman".into()),
            email: Some("priya@example.com".into()),
            phone: Some("+1 555 0100".into()),
            subject: Some("Project inquiry".into()),
            message: Some("We need a new platform.".into()),
        }
    }

    #[test]
    fn valid_contact_payload() {
        let msg = full_payload().validate().unwrap();
        assert_eq!(msg.name, "Priya Raman");
        assert_eq!(msg.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn missing_subject_names_the_field() {
        let mut payload = full_payload();
        payload.subject = None;
        let err = payload.validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "subject");
    }

    #[test]
    fn empty_fields_collected_together() {
        let payload = ContactPayload {
            name: Some("  ".into()),
            email: None,
            phone: None,
            subject: None,
            message: Some("hi".into()),
        };
        let err = payload.validate().unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "subject"]);
    }

    #[test]
    fn malformed_email_rejected() {
        let mut payload = full_payload();
        payload.email = Some("not-an-email".into());
        let err = payload.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "email");
    }

    #[test]
    fn blank_phone_becomes_none() {
        let mut payload = full_payload();
        payload.phone = Some("   ".into());
        let msg = payload.validate().unwrap();
        assert!(msg.phone.is_none());
    }

    #[test]
    fn subscribe_happy_path() {
        let sub = SubscribePayload {
            email: Some("a@b.com".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(sub.email, "a@b.com");
    }

    #[test]
    fn subscribe_missing_email() {
        let err = SubscribePayload { email: None }.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "email");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    proptest! {
        #[test]
        fn strings_without_at_are_never_emails(s in "[^@]*") {
            prop_assert!(!is_valid_email(&s));
        }
    }
}
