use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::info;

use crate::board::{Board, Confirm, FixedAnswer};
use crate::config::Config;
use crate::error::{Result, StickyError};
use crate::storage::{FileStorage, NotesStore};

/// Asks on stderr and reads the answer from stdin.
struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        eprint!("{} [y/N] ", message);
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let answer = input.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

fn parse_note_id(id: &str) -> Result<u64> {
    id.trim()
        .parse()
        .map_err(|_| StickyError::InvalidNoteId(id.to_string()))
}

fn open_board(dir: &Path) -> Result<(Board<FileStorage>, Config)> {
    if !dir.is_dir() {
        return Err(StickyError::NotInitialized);
    }

    let config = Config::load(dir)?;
    let store = NotesStore::with_key(FileStorage::new(dir), config.storage_key.clone());
    let board = Board::mount(store).with_placeholder(config.placeholder.clone());
    Ok((board, config))
}

pub fn handle_init(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Err(StickyError::AlreadyInitialized);
    }

    fs::create_dir_all(dir)?;
    Config::default().save(dir)?;

    info!(dir = %dir.display(), "initialized board");
    println!("Initialized sticky notes in {}", dir.display());
    Ok(())
}

pub fn handle_list(dir: &Path, json: bool) -> Result<()> {
    let (board, _) = open_board(dir)?;

    if json {
        let notes = board.store().load();
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if board.is_empty() {
        println!("No notes yet. Run 'sticky-notes add' to create one.");
    } else {
        print!("{}", board.render());
    }

    Ok(())
}

pub fn handle_add(dir: &Path, json: bool) -> Result<()> {
    let (mut board, _) = open_board(dir)?;

    let note = board.add_note()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note {}", note.id);
    }

    Ok(())
}

pub fn handle_edit(
    dir: &Path,
    id: String,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let id = parse_note_id(&id)?;
    let (mut board, _) = open_board(dir)?;

    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content.unwrap_or_default()
    };

    board.change(id, &content)?;

    if json {
        let note = board
            .store()
            .load()
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(StickyError::NoteNotFound(id))?;
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note {}", id);
    }

    Ok(())
}

pub fn handle_delete(dir: &Path, id: String, force: bool) -> Result<()> {
    let id = parse_note_id(&id)?;
    let (mut board, config) = open_board(dir)?;

    if board.element(id).is_none() {
        return Err(StickyError::NoteNotFound(id));
    }

    let confirm: Box<dyn Confirm> = if force || !config.confirm_delete {
        Box::new(FixedAnswer(true))
    } else if atty::is(atty::Stream::Stdin) {
        Box::new(TerminalPrompt)
    } else {
        return Err(StickyError::ConfirmationRequired);
    };

    if board.double_activate(id, confirm.as_ref())? {
        println!("Deleted note {}", id);
    } else {
        println!("Cancelled.");
    }

    Ok(())
}

pub fn handle_path(dir: &Path) -> Result<()> {
    println!("{}", dir.display());
    Ok(())
}
