//! The tree store: an immutable folder forest and its command API.
//!
//! Every command takes the current forest by reference and returns a fresh
//! one built by structural recursion; inputs are never mutated. A command
//! whose target id cannot be resolved degrades to a no-op returning the
//! forest structurally unchanged, never to an error.

mod commands;
mod lookup;

pub use commands::{
    create_chat, create_folder, delete_chat, delete_folder, move_item, rename_chat, rename_folder,
    DEFAULT_CHAT_TITLE, DEFAULT_FOLDER_NAME,
};
pub use lookup::find_folder;

use crate::models::Folder;

/// The whole store: an ordered sequence of root folders.
pub type Forest = Vec<Folder>;

/// Total number of chats across the forest.
pub fn chat_count(forest: &[Folder]) -> usize {
    forest
        .iter()
        .map(|folder| folder.chats.len() + chat_count(&folder.subfolders))
        .sum()
}

/// Collect every folder and chat id, depth-first pre-order.
pub fn collect_ids(forest: &[Folder]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_into(forest, &mut ids);
    ids
}

fn collect_into(folders: &[Folder], ids: &mut Vec<String>) {
    for folder in folders {
        ids.push(folder.id.clone());
        for chat in &folder.chats {
            ids.push(chat.id.clone());
        }
        collect_into(&folder.subfolders, ids);
    }
}
