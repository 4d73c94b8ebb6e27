//! The seven edit commands over the folder forest.
//!
//! Each command is a pure transform: map/filter recursion over the ordered
//! sequences, producing a fresh forest and leaving the input untouched.
//! Unresolvable targets make a command a silent no-op.

use crate::models::{Chat, Folder, ItemKind};

use super::lookup::{find_folder, would_create_cycle};
use super::Forest;

/// Name given to folders at creation, before the user renames them.
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// Title given to chats at creation.
pub const DEFAULT_CHAT_TITLE: &str = "New Chat";

/// Create a folder under `parent_id`, or at the forest root when `None`.
///
/// The new folder is appended after its existing siblings. An unknown
/// parent id leaves the forest unchanged.
pub fn create_folder(forest: &[Folder], parent_id: Option<&str>) -> Forest {
    match parent_id {
        None => {
            let mut roots = forest.to_vec();
            roots.push(Folder::new(DEFAULT_FOLDER_NAME, None));
            roots
        }
        Some(parent_id) => {
            let new_folder = Folder::new(DEFAULT_FOLDER_NAME, Some(parent_id.to_string()));
            attach_folder(forest, parent_id, &new_folder)
        }
    }
}

/// Create a chat inside `folder_id`.
///
/// Root-level chats are out of scope, so a `None` folder id is a declared
/// no-op. An unknown folder id leaves the forest unchanged.
pub fn create_chat(forest: &[Folder], folder_id: Option<&str>) -> Forest {
    let Some(folder_id) = folder_id else {
        return forest.to_vec();
    };
    attach_chat(forest, folder_id, &Chat::new(DEFAULT_CHAT_TITLE))
}

/// Replace the name of the folder matching `folder_id`; everything else in
/// the entity keeps its identity. An unmatched id leaves the forest
/// unchanged.
pub fn rename_folder(forest: &[Folder], folder_id: &str, new_name: &str) -> Forest {
    forest
        .iter()
        .map(|folder| {
            if folder.id == folder_id {
                folder.with_name(new_name)
            } else {
                folder.with_subfolders(rename_folder(&folder.subfolders, folder_id, new_name))
            }
        })
        .collect()
}

/// Replace the title of the chat matching `chat_id`, wherever it lives.
///
/// Upstream edit widgets trim and reject empty text before this is
/// invoked; the core applies whatever reaches it.
pub fn rename_chat(forest: &[Folder], chat_id: &str, new_title: &str) -> Forest {
    forest
        .iter()
        .map(|folder| {
            if folder.chats.iter().any(|chat| chat.id == chat_id) {
                let chats = folder
                    .chats
                    .iter()
                    .map(|chat| {
                        if chat.id == chat_id {
                            chat.with_title(new_title)
                        } else {
                            chat.clone()
                        }
                    })
                    .collect();
                folder.with_chats(chats)
            } else {
                folder.with_subfolders(rename_chat(&folder.subfolders, chat_id, new_title))
            }
        })
        .collect()
}

/// Delete the folder matching `folder_id` and its entire subtree,
/// including all nested chats and subfolders.
///
/// The filter runs at every level and the rebuild keeps recursing into the
/// remaining folders' children; the target's depth is not known in
/// advance.
pub fn delete_folder(forest: &[Folder], folder_id: &str) -> Forest {
    forest
        .iter()
        .filter(|folder| folder.id != folder_id)
        .map(|folder| folder.with_subfolders(delete_folder(&folder.subfolders, folder_id)))
        .collect()
}

/// Delete the chat `chat_id` from the folder `folder_id`.
///
/// Chat deletion requires the containing folder, mirroring the root-chat
/// restriction on `create_chat`; a `None` folder id is a no-op.
pub fn delete_chat(forest: &[Folder], folder_id: Option<&str>, chat_id: &str) -> Forest {
    let Some(folder_id) = folder_id else {
        return forest.to_vec();
    };
    delete_chat_in(forest, folder_id, chat_id)
}

fn delete_chat_in(folders: &[Folder], folder_id: &str, chat_id: &str) -> Vec<Folder> {
    folders
        .iter()
        .map(|folder| {
            if folder.id == folder_id {
                let chats = folder
                    .chats
                    .iter()
                    .filter(|chat| chat.id != chat_id)
                    .cloned()
                    .collect();
                folder.with_chats(chats)
            } else {
                folder.with_subfolders(delete_chat_in(&folder.subfolders, folder_id, chat_id))
            }
        })
        .collect()
}

/// Move a chat or a folder subtree under `target`, or a folder to the
/// forest root when `target` is `None`.
///
/// Source and target are resolved against one consistent view before the
/// detach is committed, so the moved item is never present in two places
/// and an unresolvable target is a true no-op rather than a silent drop.
/// A folder may not move into itself or any of its own descendants.
pub fn move_item(forest: &[Folder], item_id: &str, kind: ItemKind, target: Option<&str>) -> Forest {
    match kind {
        ItemKind::Folder => move_folder(forest, item_id, target),
        ItemKind::Chat => move_chat(forest, item_id, target),
    }
}

fn move_folder(forest: &[Folder], item_id: &str, target: Option<&str>) -> Forest {
    if find_folder(item_id, forest).is_none() {
        return forest.to_vec();
    }
    if let Some(target_id) = target {
        if find_folder(target_id, forest).is_none() {
            return forest.to_vec();
        }
        if would_create_cycle(item_id, target_id, forest) {
            return forest.to_vec();
        }
    }

    let (remaining, detached) = detach_folder(forest, item_id);
    let Some(folder) = detached else {
        return forest.to_vec();
    };

    match target {
        None => {
            let mut roots = remaining;
            roots.push(folder.with_parent(None));
            roots
        }
        Some(target_id) => {
            let moved = folder.with_parent(Some(target_id.to_string()));
            attach_folder(&remaining, target_id, &moved)
        }
    }
}

fn move_chat(forest: &[Folder], chat_id: &str, target: Option<&str>) -> Forest {
    // No root-level chat container exists; dropping a chat outside any
    // folder is rejected rather than discarding the chat.
    let Some(target_id) = target else {
        return forest.to_vec();
    };
    if find_folder(target_id, forest).is_none() {
        return forest.to_vec();
    }

    let (remaining, detached) = detach_chat(forest, chat_id);
    let Some(chat) = detached else {
        return forest.to_vec();
    };

    attach_chat(&remaining, target_id, &chat)
}

/// Rebuild `folders`, appending `new_folder` to the subfolders of the
/// folder matching `parent_id`.
fn attach_folder(folders: &[Folder], parent_id: &str, new_folder: &Folder) -> Vec<Folder> {
    folders
        .iter()
        .map(|folder| {
            if folder.id == parent_id {
                let mut subfolders = folder.subfolders.clone();
                subfolders.push(new_folder.clone());
                folder.with_subfolders(subfolders)
            } else {
                folder.with_subfolders(attach_folder(&folder.subfolders, parent_id, new_folder))
            }
        })
        .collect()
}

/// Rebuild `folders`, appending `chat` to the chats of the folder matching
/// `folder_id`.
fn attach_chat(folders: &[Folder], folder_id: &str, chat: &Chat) -> Vec<Folder> {
    folders
        .iter()
        .map(|folder| {
            if folder.id == folder_id {
                let mut chats = folder.chats.clone();
                chats.push(chat.clone());
                folder.with_chats(chats)
            } else {
                folder.with_subfolders(attach_chat(&folder.subfolders, folder_id, chat))
            }
        })
        .collect()
}

/// Rebuild `folders` without the folder matching `folder_id`, returning
/// the detached folder alongside the remaining sequence.
fn detach_folder(folders: &[Folder], folder_id: &str) -> (Vec<Folder>, Option<Folder>) {
    let mut detached = None;
    let mut remaining = Vec::with_capacity(folders.len());

    for folder in folders {
        if folder.id == folder_id {
            detached = Some(folder.clone());
            continue;
        }
        let (subfolders, found) = detach_folder(&folder.subfolders, folder_id);
        if detached.is_none() {
            detached = found;
        }
        remaining.push(folder.with_subfolders(subfolders));
    }

    (remaining, detached)
}

/// Rebuild `folders` without the chat matching `chat_id`, returning the
/// detached chat alongside the remaining sequence.
fn detach_chat(folders: &[Folder], chat_id: &str) -> (Vec<Folder>, Option<Chat>) {
    let mut detached = None;
    let mut remaining = Vec::with_capacity(folders.len());

    for folder in folders {
        if let Some(chat) = folder.chats.iter().find(|chat| chat.id == chat_id) {
            detached = Some(chat.clone());
            let chats = folder
                .chats
                .iter()
                .filter(|chat| chat.id != chat_id)
                .cloned()
                .collect();
            remaining.push(folder.with_chats(chats));
        } else {
            let (subfolders, found) = detach_chat(&folder.subfolders, chat_id);
            if detached.is_none() {
                detached = found;
            }
            remaining.push(folder.with_subfolders(subfolders));
        }
    }

    (remaining, detached)
}
