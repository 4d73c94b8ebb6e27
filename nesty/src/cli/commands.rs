//! Interactive sidebar session.
//!
//! The session owns the single authoritative forest value for the lifetime
//! of the process. Every edit parses into a command, calls a pure store
//! function, and replaces the held forest with the returned one. Input
//! contracts the edit widgets would enforce in a graphical shell live here:
//! rename text is trimmed and empty names are rejected before the core is
//! invoked, and raw drag payloads are decoded before `move_item` sees them.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use crate::models::{Chat, DragItem, Folder, ItemKind};
use crate::store::{
    self, chat_count, collect_ids, create_chat, create_folder, delete_chat, delete_folder,
    move_item, rename_chat, rename_folder, Forest,
};

use super::args::Cli;

/// Errors produced while interpreting a line of sidebar input.
///
/// These never abort the session; they are reported and the prompt returns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first word is not a known command.
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    /// A required positional argument was not supplied.
    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    /// The item kind was neither `chat` nor `folder`.
    #[error("invalid item kind '{0}' (expected chat or folder)")]
    InvalidKind(String),
    /// Rename text was empty after trimming.
    #[error("{command}: name cannot be empty")]
    EmptyName { command: &'static str },
    /// A `drop` payload did not decode as a drag value.
    #[error("invalid drop payload: {0}")]
    InvalidPayload(String),
}

/// A parsed sidebar command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SidebarCommand {
    Tree,
    Json,
    NewFolder { parent: Option<String> },
    NewChat { folder: Option<String> },
    RenameFolder { id: String, name: String },
    RenameChat { id: String, title: String },
    DeleteFolder { id: String },
    DeleteChat { folder: String, id: String },
    Move {
        id: String,
        kind: ItemKind,
        target: Option<String>,
    },
    Drop {
        item: DragItem,
        target: Option<String>,
    },
    Help,
    Exit,
}

/// Run the interactive session until the user exits.
pub fn execute(cli: Cli) -> Result<()> {
    let mut forest: Forest = if cli.empty { Forest::new() } else { seed_forest() };

    println!("Nesty - organize chats into nested folders");
    println!("Type 'help' for commands, 'exit' to quit.\n");
    print_tree(&forest);

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("nesty> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match parse_command(trimmed) {
                    Ok(SidebarCommand::Exit) => break,
                    Ok(SidebarCommand::Help) => print_help(),
                    Ok(SidebarCommand::Tree) => print_tree(&forest),
                    Ok(SidebarCommand::Json) => {
                        println!("{}", serde_json::to_string_pretty(&forest)?);
                    }
                    Ok(command) => {
                        let next = apply(&forest, &command);
                        if next == forest {
                            println!("No change.");
                        } else {
                            forest = next;
                            print_tree(&forest);
                        }
                    }
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// The forest the session starts with, matching the original sample data.
fn seed_forest() -> Forest {
    let mut personal = Folder::new("Personal", None);
    personal.chats.push(Chat::new("Travel Planning"));
    vec![personal]
}

/// Parse one line of input into a sidebar command.
fn parse_command(line: &str) -> Result<SidebarCommand, ParseError> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default();

    match command {
        "tree" => Ok(SidebarCommand::Tree),
        "json" => Ok(SidebarCommand::Json),
        "help" => Ok(SidebarCommand::Help),
        "exit" | "quit" => Ok(SidebarCommand::Exit),
        "new-folder" => Ok(SidebarCommand::NewFolder {
            parent: tokens.next().and_then(parse_target),
        }),
        "new-chat" => Ok(SidebarCommand::NewChat {
            folder: tokens.next().and_then(parse_target),
        }),
        "rename-folder" => {
            let id = required(tokens.next(), "rename-folder", "folder id")?;
            let name = rename_text(tokens, "rename-folder")?;
            Ok(SidebarCommand::RenameFolder { id, name })
        }
        "rename-chat" => {
            let id = required(tokens.next(), "rename-chat", "chat id")?;
            let title = rename_text(tokens, "rename-chat")?;
            Ok(SidebarCommand::RenameChat { id, title })
        }
        "rm-folder" => Ok(SidebarCommand::DeleteFolder {
            id: required(tokens.next(), "rm-folder", "folder id")?,
        }),
        "rm-chat" => Ok(SidebarCommand::DeleteChat {
            folder: required(tokens.next(), "rm-chat", "folder id")?,
            id: required(tokens.next(), "rm-chat", "chat id")?,
        }),
        "mv" => {
            let id = required(tokens.next(), "mv", "item id")?;
            let kind_token = required(tokens.next(), "mv", "item kind")?;
            let kind = ItemKind::from_str(&kind_token)
                .ok_or_else(|| ParseError::InvalidKind(kind_token.clone()))?;
            Ok(SidebarCommand::Move {
                id,
                kind,
                target: tokens.next().and_then(parse_target),
            })
        }
        "drop" => {
            let target_token = required(tokens.next(), "drop", "target folder")?;
            let payload = tokens.collect::<Vec<_>>().join(" ");
            if payload.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "drop",
                    what: "payload",
                });
            }
            let item: DragItem = serde_json::from_str(&payload)
                .map_err(|e| ParseError::InvalidPayload(e.to_string()))?;
            Ok(SidebarCommand::Drop {
                item,
                target: parse_target(&target_token),
            })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn required(
    token: Option<&str>,
    command: &'static str,
    what: &'static str,
) -> Result<String, ParseError> {
    token
        .map(String::from)
        .ok_or(ParseError::MissingArgument { command, what })
}

/// Join the remaining tokens into the rename text, rejecting empty input.
///
/// This is the edit-commit boundary: the core itself accepts any text, so
/// trimming and the empty check happen here.
fn rename_text<'a>(
    tokens: impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<String, ParseError> {
    let text = tokens.collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        return Err(ParseError::EmptyName { command });
    }
    Ok(text.trim().to_string())
}

/// `root` (or `-`) names the forest root; anything else is a folder id.
fn parse_target(token: &str) -> Option<String> {
    match token {
        "root" | "-" => None,
        id => Some(id.to_string()),
    }
}

/// Apply an edit command to the forest, returning the new forest.
///
/// Typed ids may be unambiguous tails of the long generated ids; they are
/// expanded before the store sees them. Unknown input passes through
/// untouched for the store to ignore.
fn apply(forest: &Forest, command: &SidebarCommand) -> Forest {
    match command {
        SidebarCommand::NewFolder { parent } => {
            let parent = parent.as_deref().map(|id| resolve_id(id, forest));
            create_folder(forest, parent.as_deref())
        }
        SidebarCommand::NewChat { folder } => {
            let folder = folder.as_deref().map(|id| resolve_id(id, forest));
            create_chat(forest, folder.as_deref())
        }
        SidebarCommand::RenameFolder { id, name } => {
            rename_folder(forest, &resolve_id(id, forest), name)
        }
        SidebarCommand::RenameChat { id, title } => {
            rename_chat(forest, &resolve_id(id, forest), title)
        }
        SidebarCommand::DeleteFolder { id } => delete_folder(forest, &resolve_id(id, forest)),
        SidebarCommand::DeleteChat { folder, id } => delete_chat(
            forest,
            Some(&resolve_id(folder, forest)),
            &resolve_id(id, forest),
        ),
        SidebarCommand::Move { id, kind, target } => {
            let id = resolve_id(id, forest);
            let target = target.as_deref().map(|t| resolve_id(t, forest));
            // The session is both drag source and drop target: build the
            // payload a drag source would hand over, then consume it.
            let item = DragItem {
                current_folder_id: current_folder_of(&id, *kind, forest),
                id,
                kind: *kind,
            };
            move_item(forest, &item.id, item.kind, target.as_deref())
        }
        SidebarCommand::Drop { item, target } => {
            let target = target.as_deref().map(|t| resolve_id(t, forest));
            move_item(forest, &item.id, item.kind, target.as_deref())
        }
        SidebarCommand::Tree
        | SidebarCommand::Json
        | SidebarCommand::Help
        | SidebarCommand::Exit => forest.clone(),
    }
}

/// Expand a unique id tail to the full id; ambiguous or unknown input is
/// returned as typed.
///
/// Generated ids are time-ordered, so their leading characters repeat
/// across entities created together; the tail is the distinctive part and
/// is what the tree view shows.
fn resolve_id(input: &str, forest: &[Folder]) -> String {
    let ids = collect_ids(forest);
    let mut matches = ids.iter().filter(|id| id.ends_with(input));
    match (matches.next(), matches.next()) {
        (Some(id), None) => id.clone(),
        _ => input.to_string(),
    }
}

/// Folder currently holding the item, as a drag source would report it.
fn current_folder_of(item_id: &str, kind: ItemKind, forest: &[Folder]) -> Option<String> {
    match kind {
        ItemKind::Folder => {
            store::find_folder(item_id, forest).and_then(|folder| folder.parent_id.clone())
        }
        ItemKind::Chat => containing_folder(item_id, forest).map(|folder| folder.id.clone()),
    }
}

/// Find the folder whose `chats` holds `chat_id`, depth-first.
fn containing_folder<'a>(chat_id: &str, folders: &'a [Folder]) -> Option<&'a Folder> {
    for folder in folders {
        if folder.chats.iter().any(|chat| chat.id == chat_id) {
            return Some(folder);
        }
        if let Some(found) = containing_folder(chat_id, &folder.subfolders) {
            return Some(found);
        }
    }
    None
}

fn print_tree(forest: &[Folder]) {
    if forest.is_empty() {
        println!("(empty forest)");
        return;
    }
    print_folders(forest, 0);
    let folders = collect_ids(forest).len() - chat_count(forest);
    println!("{} folder(s), {} chat(s)", folders, chat_count(forest));
}

fn print_folders(folders: &[Folder], depth: usize) {
    let indent = "  ".repeat(depth);
    for folder in folders {
        println!("{indent}+ {} [{}]", folder.name, short_id(&folder.id));
        for chat in &folder.chats {
            println!(
                "{indent}    {} [{}]  {}",
                chat.title,
                short_id(&chat.id),
                chat.last_modified.format("%Y-%m-%d %H:%M")
            );
        }
        print_folders(&folder.subfolders, depth + 1);
    }
}

fn short_id(id: &str) -> &str {
    &id[id.len().saturating_sub(8)..]
}

fn print_help() {
    println!("Commands:");
    println!("  tree                            Show the forest");
    println!("  json                            Dump the forest as JSON");
    println!("  new-folder [PARENT]             Create a folder (at root without PARENT)");
    println!("  new-chat [FOLDER]               Create a chat inside FOLDER");
    println!("  rename-folder <ID> <NAME...>    Rename a folder");
    println!("  rename-chat <ID> <TITLE...>     Rename a chat");
    println!("  rm-folder <ID>                  Delete a folder and its whole subtree");
    println!("  rm-chat <FOLDER> <CHAT>         Delete a chat from its folder");
    println!("  mv <ID> <chat|folder> [TARGET]  Move an item into TARGET ('root' for the top level)");
    println!("  drop <TARGET|root> <JSON>       Apply a raw drag payload onto TARGET");
    println!("  help                            Show this help");
    println!("  exit                            Quit");
    println!();
    println!("Ids may be any unambiguous tail of the id shown in brackets.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_forest_shape() {
        let forest = seed_forest();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].name, "Personal");
        assert_eq!(forest[0].parent_id, None);
        assert_eq!(forest[0].chats.len(), 1);
        assert_eq!(forest[0].chats[0].title, "Travel Planning");
    }

    #[test]
    fn test_parse_rename_joins_and_trims() {
        let command = parse_command("rename-chat c1   Pasta   al forno ").unwrap();
        assert_eq!(
            command,
            SidebarCommand::RenameChat {
                id: "c1".to_string(),
                title: "Pasta al forno".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rename_rejects_empty_text() {
        assert_eq!(
            parse_command("rename-folder f1"),
            Err(ParseError::EmptyName {
                command: "rename-folder"
            })
        );
    }

    #[test]
    fn test_parse_move_kinds_and_targets() {
        let command = parse_command("mv c1 chat f2").unwrap();
        assert_eq!(
            command,
            SidebarCommand::Move {
                id: "c1".to_string(),
                kind: ItemKind::Chat,
                target: Some("f2".to_string()),
            }
        );

        let command = parse_command("mv b FOLDER root").unwrap();
        assert_eq!(
            command,
            SidebarCommand::Move {
                id: "b".to_string(),
                kind: ItemKind::Folder,
                target: None,
            }
        );

        assert_eq!(
            parse_command("mv c1 note f2"),
            Err(ParseError::InvalidKind("note".to_string()))
        );
    }

    #[test]
    fn test_parse_drop_decodes_payload() {
        let command =
            parse_command(r#"drop f2 {"id":"c1","type":"CHAT","currentFolderId":"1"}"#).unwrap();
        let SidebarCommand::Drop { item, target } = command else {
            panic!("expected drop");
        };
        assert_eq!(item.id, "c1");
        assert_eq!(item.kind, ItemKind::Chat);
        assert_eq!(target.as_deref(), Some("f2"));

        assert!(matches!(
            parse_command("drop f2 not-json"),
            Err(ParseError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_command("frobnicate"),
            Err(ParseError::UnknownCommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_resolve_id_tail() {
        let mut forest = seed_forest();
        forest[0].id = "folder-1".to_string();
        forest[0].chats[0].id = "chat-9".to_string();

        assert_eq!(resolve_id("r-1", &forest), "folder-1");
        assert_eq!(resolve_id("chat-9", &forest), "chat-9");
        // Unknown input passes through for the store to ignore.
        assert_eq!(resolve_id("zz", &forest), "zz");
    }

    #[test]
    fn test_apply_create_and_move() {
        let forest = seed_forest();
        let folder_id = forest[0].id.clone();
        let chat_id = forest[0].chats[0].id.clone();

        let forest = apply(
            &forest,
            &SidebarCommand::NewFolder {
                parent: Some(folder_id),
            },
        );
        assert_eq!(forest[0].subfolders.len(), 1);
        let subfolder_id = forest[0].subfolders[0].id.clone();

        let forest = apply(
            &forest,
            &SidebarCommand::Move {
                id: chat_id.clone(),
                kind: ItemKind::Chat,
                target: Some(subfolder_id),
            },
        );
        assert!(forest[0].chats.is_empty());
        assert_eq!(forest[0].subfolders[0].chats[0].id, chat_id);
    }

    #[test]
    fn test_apply_view_commands_leave_forest_alone() {
        let forest = seed_forest();
        assert_eq!(apply(&forest, &SidebarCommand::Tree), forest);
        assert_eq!(apply(&forest, &SidebarCommand::Help), forest);
    }

    #[test]
    fn test_current_folder_of_reports_drag_source() {
        let forest = seed_forest();
        let folder_id = forest[0].id.clone();
        let chat_id = forest[0].chats[0].id.clone();

        assert_eq!(
            current_folder_of(&chat_id, ItemKind::Chat, &forest),
            Some(folder_id.clone())
        );
        assert_eq!(current_folder_of(&folder_id, ItemKind::Folder, &forest), None);
    }
}
