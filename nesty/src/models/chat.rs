//! Chat model representing a single conversation record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::generate_id;

/// A chat is a leaf entity owned by exactly one folder at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique chat identifier.
    pub id: String,
    /// Display title shown in the sidebar.
    pub title: String,
    /// When the chat was last modified.
    pub last_modified: DateTime<Utc>,
}

impl Chat {
    /// Create a new chat with a fresh id.
    pub fn new(title: &str) -> Self {
        Self {
            id: generate_id(),
            title: title.to_string(),
            last_modified: Utc::now(),
        }
    }

    /// Copy of this chat with a different title; identity and timestamp
    /// are preserved.
    pub fn with_title(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}
