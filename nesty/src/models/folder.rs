//! Folder model owning nested subfolders and chats.

use serde::{Deserialize, Serialize};

use crate::ids::generate_id;

use super::chat::Chat;

/// A folder node in the forest.
///
/// Ownership of children is exclusive: a subfolder or chat appears under
/// exactly one folder. `parent_id == None` marks a forest root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: String,
    /// Display name shown in the sidebar.
    pub name: String,
    /// Id of the directly containing folder; `None` for forest roots.
    pub parent_id: Option<String>,
    /// Child folders, in display order.
    pub subfolders: Vec<Folder>,
    /// Chats held directly by this folder, in display order.
    pub chats: Vec<Chat>,
}

impl Folder {
    /// Create a new empty folder with a fresh id.
    pub fn new(name: &str, parent_id: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.to_string(),
            parent_id,
            subfolders: Vec::new(),
            chats: Vec::new(),
        }
    }

    /// Copy of this folder with a different name.
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Copy of this folder with the given subfolder sequence.
    pub fn with_subfolders(&self, subfolders: Vec<Folder>) -> Self {
        Self {
            subfolders,
            ..self.clone()
        }
    }

    /// Copy of this folder with the given chat sequence.
    pub fn with_chats(&self, chats: Vec<Chat>) -> Self {
        Self {
            chats,
            ..self.clone()
        }
    }

    /// Copy of this folder re-homed under a new parent.
    pub fn with_parent(&self, parent_id: Option<String>) -> Self {
        Self {
            parent_id,
            ..self.clone()
        }
    }
}
