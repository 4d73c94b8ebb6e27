//! Data models for nesty entities.

mod chat;
mod drag;
mod folder;

pub use chat::Chat;
pub use drag::{DragItem, ItemKind};
pub use folder::Folder;
