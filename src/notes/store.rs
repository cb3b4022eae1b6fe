//! In-memory note collection.
//!
//! Holds notes in display order (newest first) and offers the operations
//! the note list needs: add, update, delete, lookup, and search. How notes
//! are persisted is up to the caller.

use tracing::debug;

use super::note::Note;

/// An ordered, in-memory collection of notes.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new note at the front of the list and return it.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> &Note {
        self.next_id += 1;
        let note = Note::new(format!("note-{}", self.next_id), title, content);
        debug!(id = %note.id, "added note");
        self.notes.insert(0, note);
        &self.notes[0]
    }

    /// Replace the title and content of an existing note.
    ///
    /// Returns the updated note, or `None` if no note has this id.
    pub fn update(
        &mut self,
        id: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<&Note> {
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        note.title = title.into();
        note.content = content.into();
        Some(note)
    }

    /// Remove a note. Returns `true` if a note with this id existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        before != self.notes.len()
    }

    /// Look up a note by id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// All notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes whose title or content contains the query, case-insensitively.
    ///
    /// An empty query returns every note, preserving order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.trim().is_empty() {
            return self.notes.iter().collect();
        }
        self.notes.iter().filter(|n| n.matches_query(query)).collect()
    }

    /// Number of notes in the store.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
