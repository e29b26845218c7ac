//! The note board: a visual container of editable boxes wired to the
//! notes store.
//!
//! Every mutation is a full read-modify-write of the stored collection. The
//! board itself only tracks which boxes are on screen, front first.

mod confirm;
mod element;

pub use confirm::{Confirm, FixedAnswer};
pub use element::{NoteElement, DEFAULT_PLACEHOLDER};

use tracing::debug;

use crate::entity::{IdGenerator, Note};
use crate::error::{Result, StickyError};
use crate::storage::{KeyValueStorage, NotesStore};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

pub struct Board<S> {
    store: NotesStore<S>,
    elements: Vec<NoteElement>,
    ids: IdGenerator,
    placeholder: String,
}

impl<S: KeyValueStorage> Board<S> {
    /// An empty board over `store`. Nothing is read until [`Board::mount`].
    pub fn new(store: NotesStore<S>) -> Self {
        Self {
            store,
            elements: Vec::new(),
            ids: IdGenerator::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        for element in &mut self.elements {
            element.placeholder = self.placeholder.clone();
        }
        self
    }

    /// Load the stored collection and put a box on the board for each note.
    ///
    /// Each box is prepended, so the last stored note ends up in front.
    pub fn mount(store: NotesStore<S>) -> Self {
        let mut board = Self::new(store);
        board.reload();
        board
    }

    /// Drop every box and rebuild the board from storage.
    pub fn reload(&mut self) {
        let notes = self.store.load();
        self.ids.observe(&notes);
        self.elements.clear();
        for note in &notes {
            let element = self.create_element(note.id, &note.content);
            self.elements.insert(0, element);
        }
        debug!(count = self.elements.len(), "mounted board");
    }

    pub fn store(&self) -> &NotesStore<S> {
        &self.store
    }

    /// Boxes in visual order, front first.
    pub fn elements(&self) -> &[NoteElement] {
        &self.elements
    }

    pub fn element(&self, id: u64) -> Option<&NoteElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build an editable box for `id` pre-filled with `content`.
    pub fn create_element(&self, id: u64, content: &str) -> NoteElement {
        NoteElement {
            id,
            value: content.to_string(),
            placeholder: self.placeholder.clone(),
        }
    }

    /// The "add" control: a new empty note goes in front and into storage.
    pub fn add_note(&mut self) -> Result<Note> {
        let mut notes = self.store.load();
        self.ids.observe(&notes);

        let note = Note::new(self.ids.next_id()?);
        let element = self.create_element(note.id, &note.content);
        self.elements.insert(0, element);

        notes.push(note.clone());
        self.store.save(&notes)?;

        debug!(id = note.id, "added note");
        Ok(note)
    }

    /// Content change on a box: reflect it on screen, then persist it.
    pub fn change(&mut self, id: u64, content: &str) -> Result<()> {
        if let Some(element) = self.elements.iter_mut().find(|el| el.id == id) {
            element.value = content.to_string();
        }
        self.update_note(id, content)
    }

    /// Replace the content of the stored note `id`.
    ///
    /// Nothing is written when the note is not in storage.
    pub fn update_note(&mut self, id: u64, content: &str) -> Result<()> {
        let mut notes = self.store.load();

        let target = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StickyError::NoteNotFound(id))?;
        target.content = content.to_string();

        self.store.save(&notes)?;
        debug!(id, len = content.len(), "updated note");
        Ok(())
    }

    /// Double-activation on a box: delete it once the user confirms.
    ///
    /// Returns whether the note was deleted.
    pub fn double_activate(&mut self, id: u64, confirm: &dyn Confirm) -> Result<bool> {
        if !confirm.confirm(DELETE_PROMPT)? {
            debug!(id, "delete declined");
            return Ok(false);
        }
        self.delete_note(id)?;
        Ok(true)
    }

    /// Remove note `id` from storage, then take its box off the board.
    pub fn delete_note(&mut self, id: u64) -> Result<()> {
        let notes: Vec<Note> = self
            .store
            .load()
            .into_iter()
            .filter(|note| note.id != id)
            .collect();
        self.store.save(&notes)?;

        self.elements.retain(|el| el.id != id);
        debug!(id, remaining = notes.len(), "deleted note");
        Ok(())
    }

    /// Plain-text rendering of the whole board, front first.
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(NoteElement::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, DEFAULT_STORAGE_KEY};

    fn note(id: u64, content: &str) -> Note {
        Note {
            id,
            content: content.to_string(),
        }
    }

    fn board_with(notes: &[Note]) -> Board<MemoryStorage> {
        let json = serde_json::to_string(notes).unwrap();
        let storage = MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, &json);
        Board::mount(NotesStore::new(storage))
    }

    fn empty_board() -> Board<MemoryStorage> {
        Board::mount(NotesStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_mount_prepends_in_stored_order() {
        let board = board_with(&[note(1, "a"), note(2, "b"), note(3, "c")]);
        let ids: Vec<u64> = board.elements().iter().map(|el| el.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(board.element(2).unwrap().value, "b");
    }

    #[test]
    fn test_mount_corrupt_storage_is_empty_board() {
        let storage = MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, "][");
        let board = Board::mount(NotesStore::new(storage));
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_note_grows_collection_by_one() {
        let mut board = board_with(&[note(1, "a")]);
        let added = board.add_note().unwrap();

        let stored = board.store().load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.last().unwrap(), &added);
        assert!(added.content.is_empty());
        assert_ne!(added.id, 1);
    }

    #[test]
    fn test_add_note_goes_in_front() {
        let mut board = board_with(&[note(1, "a")]);
        let added = board.add_note().unwrap();
        assert_eq!(board.elements()[0].id, added.id);
        assert!(board.elements()[0].shows_placeholder());
    }

    #[test]
    fn test_two_adds_on_empty_storage() {
        let mut board = empty_board();
        let first = board.add_note().unwrap();
        let second = board.add_note().unwrap();

        let stored = board.store().load();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|n| n.content.is_empty()));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_new_ids_clear_existing_ones() {
        let far_future = u64::MAX / 2;
        let mut board = board_with(&[note(far_future, "later")]);
        let added = board.add_note().unwrap();
        assert_eq!(added.id, far_future + 1);
    }

    #[test]
    fn test_add_note_after_largest_id_fails_cleanly() {
        let mut board = board_with(&[note(u64::MAX, "a")]);
        let err = board.add_note().unwrap_err();
        assert!(matches!(err, StickyError::IdsExhausted));
        assert_eq!(board.len(), 1);
        assert_eq!(board.store().load(), vec![note(u64::MAX, "a")]);
    }

    #[test]
    fn test_update_note_changes_only_target() {
        let mut board = board_with(&[note(1, "a"), note(2, "b")]);
        board.update_note(1, "x").unwrap();
        assert_eq!(board.store().load(), vec![note(1, "x"), note(2, "b")]);
    }

    #[test]
    fn test_update_missing_note_is_reported() {
        let mut board = board_with(&[note(1, "a")]);
        let err = board.update_note(99, "x").unwrap_err();
        assert!(matches!(err, StickyError::NoteNotFound(99)));
        assert_eq!(board.store().load(), vec![note(1, "a")]);
    }

    #[test]
    fn test_change_updates_element_and_storage() {
        let mut board = board_with(&[note(1, "")]);
        board.change(1, "remember the milk").unwrap();
        assert_eq!(board.element(1).unwrap().value, "remember the milk");
        assert_eq!(board.store().load(), vec![note(1, "remember the milk")]);
    }

    #[test]
    fn test_delete_note_scenario() {
        let mut board = board_with(&[note(1, "a"), note(2, "b")]);
        board.delete_note(1).unwrap();
        assert_eq!(board.store().load(), vec![note(2, "b")]);
        assert!(board.element(1).is_none());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_double_activate_confirmed_deletes() {
        let mut board = board_with(&[note(1, "a"), note(2, "b")]);
        let asked = std::cell::RefCell::new(String::new());
        let confirm = |msg: &str| {
            *asked.borrow_mut() = msg.to_string();
            true
        };

        assert!(board.double_activate(2, &confirm).unwrap());
        assert_eq!(asked.borrow().as_str(), DELETE_PROMPT);
        assert_eq!(board.store().load(), vec![note(1, "a")]);
        assert!(board.element(2).is_none());
    }

    #[test]
    fn test_double_activate_declined_changes_nothing() {
        let mut board = board_with(&[note(1, "a")]);
        assert!(!board.double_activate(1, &FixedAnswer(false)).unwrap());
        assert_eq!(board.store().load(), vec![note(1, "a")]);
        assert!(board.element(1).is_some());
    }

    #[test]
    fn test_failed_delete_keeps_element() {
        let json = serde_json::to_string(&[note(1, "a")]).unwrap();
        let storage = MemoryStorage::failing().with_value(DEFAULT_STORAGE_KEY, &json);
        let mut board = Board::mount(NotesStore::new(storage));

        assert!(board.delete_note(1).is_err());
        assert!(board.element(1).is_some());
        assert_eq!(board.store().load(), vec![note(1, "a")]);
    }

    #[test]
    fn test_render_front_first_with_placeholder() {
        let board = board_with(&[note(1, "a"), note(2, "")]).with_placeholder("(empty)");
        assert_eq!(board.render(), "[2]\n  (empty)\n\n[1]\n  a\n");
    }
}
