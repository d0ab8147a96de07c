//! Visitor-submitted records: contact messages and newsletter subscribers.
//!
//! Unlike the seeded content kinds these grow monotonically at runtime, and
//! the store stamps `created_at` on insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::EntityId;

/// A message submitted through the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    /// Server-assigned at creation time.
    pub created_at: DateTime<Utc>,
}

/// Validated input for a contact message; see
/// [`ContactPayload`](crate::validate::ContactPayload).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn into_record(self, id: EntityId, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

/// A newsletter subscriber. `email` is unique; the API boundary rejects
/// duplicates before the store ever sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: EntityId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a subscriber; see
/// [`SubscribePayload`](crate::validate::SubscribePayload).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriber {
    pub email: String,
}

impl NewSubscriber {
    pub fn into_record(self, id: EntityId, created_at: DateTime<Utc>) -> Subscriber {
        Subscriber {
            id,
            email: self.email,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_message_created_at_serializes() {
        let msg = NewContactMessage {
            name: "A".into(),
            email: "a@b.com".into(),
            phone: None,
            subject: "Hi".into(),
            message: "Hello".into(),
        }
        .into_record(1, Utc::now());

        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["phone"], serde_json::Value::Null);
    }

    #[test]
    fn subscriber_record_keeps_email() {
        let sub = NewSubscriber {
            email: "a@b.com".into(),
        }
        .into_record(4, Utc::now());
        assert_eq!(sub.id, 4);
        assert_eq!(sub.email, "a@b.com");
    }
}
