//! Depth-first folder lookup and move-target validation.

use std::collections::HashSet;

use crate::models::Folder;

/// Find a folder by id, depth-first pre-order across the forest.
///
/// Roots are scanned in sequence order, then each folder's subfolders
/// recursively. Ids are unique, so the first match is the only match.
pub fn find_folder<'a>(folder_id: &str, folders: &'a [Folder]) -> Option<&'a Folder> {
    for folder in folders {
        if folder.id == folder_id {
            return Some(folder);
        }
        if let Some(found) = find_folder(folder_id, &folder.subfolders) {
            return Some(found);
        }
    }
    None
}

/// Whether moving the folder `item_id` under `target_id` would create a
/// containment cycle.
///
/// Walks `parent_id` links upward from the target toward the root; if the
/// chain reaches the moved folder, the target sits inside the moved subtree
/// and the move must be rejected. The visited set bounds the walk when a
/// malformed parent chain loops; such a chain also rejects the move.
pub fn would_create_cycle(item_id: &str, target_id: &str, forest: &[Folder]) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = find_folder(target_id, forest);

    while let Some(folder) = current {
        if folder.id == item_id {
            return true;
        }
        if !visited.insert(folder.id.as_str()) {
            return true;
        }
        current = folder
            .parent_id
            .as_deref()
            .and_then(|parent_id| find_folder(parent_id, forest));
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chat;

    fn folder(id: &str, parent_id: Option<&str>, subfolders: Vec<Folder>) -> Folder {
        Folder {
            id: id.to_string(),
            name: id.to_uppercase(),
            parent_id: parent_id.map(String::from),
            subfolders,
            chats: Vec::new(),
        }
    }

    /// a ─ b ─ c, plus a second root d.
    fn fixture() -> Vec<Folder> {
        vec![
            folder(
                "a",
                None,
                vec![folder("b", Some("a"), vec![folder("c", Some("b"), vec![])])],
            ),
            folder("d", None, vec![]),
        ]
    }

    #[test]
    fn test_find_folder_at_any_depth() {
        let forest = fixture();
        assert_eq!(find_folder("a", &forest).unwrap().name, "A");
        assert_eq!(find_folder("c", &forest).unwrap().parent_id.as_deref(), Some("b"));
        assert_eq!(find_folder("d", &forest).unwrap().name, "D");
        assert!(find_folder("zz", &forest).is_none());
    }

    #[test]
    fn test_find_folder_descends_before_later_roots() {
        // "q" nests under the first root; the scan must go deep before it
        // reaches the second root.
        let forest = vec![
            folder("p", None, vec![folder("q", Some("p"), vec![])]),
            folder("r", None, vec![]),
        ];
        let found = find_folder("q", &forest).unwrap();
        assert_eq!(found.parent_id.as_deref(), Some("p"));
    }

    #[test]
    fn test_find_folder_ignores_chats() {
        let mut forest = fixture();
        forest[0].chats.push(Chat::new("Travel Planning"));
        let chat_id = forest[0].chats[0].id.clone();
        assert!(find_folder(&chat_id, &forest).is_none());
    }

    #[test]
    fn test_cycle_rejected_for_self_target() {
        let forest = fixture();
        assert!(would_create_cycle("b", "b", &forest));
    }

    #[test]
    fn test_cycle_rejected_for_descendant_target() {
        let forest = fixture();
        assert!(would_create_cycle("a", "c", &forest));
        assert!(would_create_cycle("b", "c", &forest));
    }

    #[test]
    fn test_no_cycle_for_unrelated_target() {
        let forest = fixture();
        assert!(!would_create_cycle("d", "c", &forest));
        assert!(!would_create_cycle("c", "d", &forest));
        // Moving into the current parent is a reorder, not a cycle.
        assert!(!would_create_cycle("b", "a", &forest));
    }

    #[test]
    fn test_malformed_parent_chain_terminates() {
        // Two roots claiming each other as parent: the upward walk would
        // loop forever without the visited-set guard.
        let forest = vec![folder("x", Some("y"), vec![]), folder("y", Some("x"), vec![])];
        assert!(would_create_cycle("z", "x", &forest));
    }
}
