use serde::{Deserialize, Serialize};

/// Identifies one displayed alert so stale timers can tell it apart from a newer one.
pub type AlertId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub kind: AlertKind,
}
