//! Note use-case service.
//!
//! # Invariants
//! - `all_notes` is ordered by `modified_at` descending.
//! - A stored update always refreshes `modified_at` from the clock.

use crate::clock::Clock;
use crate::model::note::{Note, NoteId};
use log::debug;
use std::sync::Arc;

/// Note storage contract.
pub trait NoteService {
    /// All notes, most recently modified first.
    fn all_notes(&self) -> Vec<Note>;
    fn create_note(&mut self, note: Note) -> Note;
    /// Replaces the note with the same id and stamps `modified_at`.
    /// Unknown ids are ignored and the input is returned unchanged.
    fn update_note(&mut self, note: Note) -> Note;
    /// Removes one note. Unknown ids are ignored.
    fn delete_note(&mut self, id: NoteId);
    fn replace_all(&mut self, notes: Vec<Note>);
}

/// Local list-backed note store.
pub struct InMemoryNoteService {
    notes: Vec<Note>,
    clock: Arc<dyn Clock>,
}

impl InMemoryNoteService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            notes: Vec::new(),
            clock,
        }
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteService for InMemoryNoteService {
    fn all_notes(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        notes
    }

    fn create_note(&mut self, note: Note) -> Note {
        debug!("event=note_create module=notes status=ok note_id={}", note.id);
        self.notes.push(note.clone());
        note
    }

    fn update_note(&mut self, mut note: Note) -> Note {
        if let Some(index) = self.position(note.id) {
            self.notes.remove(index);
            note.modified_at = self.clock.now();
            self.notes.push(note.clone());
            debug!("event=note_update module=notes status=ok note_id={}", note.id);
        }
        note
    }

    fn delete_note(&mut self, id: NoteId) {
        if let Some(index) = self.position(id) {
            self.notes.remove(index);
            debug!("event=note_delete module=notes status=ok note_id={id}");
        }
    }

    fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }
}
