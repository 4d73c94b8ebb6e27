//! Drag-and-drop payload exchanged with the presentation layer.

use serde::{Deserialize, Serialize};

/// Kind of item being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// A single chat leaf.
    Chat,
    /// A folder and its whole subtree.
    Folder,
}

impl ItemKind {
    /// Convert kind to its wire string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "CHAT",
            Self::Folder => "FOLDER",
        }
    }

    /// Parse kind from wire or user input, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "chat" => Some(Self::Chat),
            "folder" => Some(Self::Folder),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transferred drag value.
///
/// Produced by the drag source, consumed by the drop target, which calls
/// `move_item(id, kind, dropped_on_folder_id)`. The core receives this
/// already decoded; transport encoding is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    /// Id of the dragged entity.
    pub id: String,
    /// Whether a chat or a folder is being dragged.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Folder currently holding the dragged item; `None` for root folders.
    pub current_folder_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_round_trip() {
        assert_eq!(ItemKind::from_str("CHAT"), Some(ItemKind::Chat));
        assert_eq!(ItemKind::from_str("folder"), Some(ItemKind::Folder));
        assert_eq!(ItemKind::from_str("note"), None);
        assert_eq!(ItemKind::Chat.as_str(), "CHAT");
        assert_eq!(ItemKind::Folder.to_string(), "FOLDER");
    }

    #[test]
    fn test_drag_item_wire_shape() {
        let payload = r#"{"id":"c1","type":"CHAT","currentFolderId":"1"}"#;
        let item: DragItem = serde_json::from_str(payload).unwrap();
        assert_eq!(item.id, "c1");
        assert_eq!(item.kind, ItemKind::Chat);
        assert_eq!(item.current_folder_id.as_deref(), Some("1"));

        let encoded = serde_json::to_string(&item).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_drag_item_root_folder() {
        let payload = r#"{"id":"f9","type":"FOLDER","currentFolderId":null}"#;
        let item: DragItem = serde_json::from_str(payload).unwrap();
        assert_eq!(item.kind, ItemKind::Folder);
        assert_eq!(item.current_folder_id, None);
    }
}
