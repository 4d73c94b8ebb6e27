//! Nesty - a client-side organizer for chat-like items.
//!
//! Folders nest arbitrarily deep; each folder holds chats and subfolders,
//! and the user reorganizes the tree via rename, create, delete, and move
//! commands. The `store` module is the core: pure commands that rebuild an
//! immutable forest for every edit while preserving tree invariants (unique
//! ids, no cycles, consistent parent linkage). The `cli` module is the
//! presentation layer: an interactive session that owns the single
//! authoritative forest value between commands.

pub mod cli;
pub mod ids;
pub mod models;
pub mod store;

pub use models::{Chat, DragItem, Folder, ItemKind};
pub use store::{
    create_chat, create_folder, delete_chat, delete_folder, find_folder, move_item, rename_chat,
    rename_folder, Forest,
};
