//! Store-level account records. There is no authentication surface in this
//! service; these exist for admin tooling that talks to the store directly.

use serde::{Deserialize, Serialize};

use crate::content::EntityId;

/// An account record. `username` is unique within the kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: String,
}

/// Input for creating a [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn into_record(self, id: EntityId) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
