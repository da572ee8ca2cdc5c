//! UserSession domain model.

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "usuario";

/// The logged-in user.
///
/// Field names on the wire and in storage follow the catalog API (`nome`).
/// Extra fields the server sends alongside (timestamps, etc.) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl UserSession {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Serializes the record for the key-value store.
    pub fn to_record(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a stored record.
    pub fn from_record(record: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(record)?)
    }
}
