//! Notebook: ordered note collection with its own id counter

use chrono::NaiveDateTime;
use log::debug;

use super::note::{Note, NoteId};

/// Requested change for [`Notebook::modify`]
///
/// An empty `memo` or `tags` leaves that field untouched. When `delete` is
/// set the other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChange {
    pub delete: bool,
    pub memo: String,
    pub tags: Vec<String>,
}

impl NoteChange {
    /// Change that removes the note
    pub fn delete() -> Self {
        Self {
            delete: true,
            ..Self::default()
        }
    }

    /// Replace the memo
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Replace the whole tag list
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Result of [`Notebook::modify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    /// The note was found; memo and/or tags were replaced (possibly neither)
    Updated,
    /// The note was found and removed
    Deleted,
    /// No note carries that id
    NotFound,
}

impl ModifyOutcome {
    /// Whether the id referred to an existing note
    pub fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Ordered collection of notes
///
/// Insertion order is display order. All lookups are linear scans.
#[derive(Debug, Clone)]
pub struct Notebook {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new note stamped with the current time
    pub fn create(&mut self, memo: impl Into<String>, tags: Vec<String>) -> &Note {
        let id = self.allocate_id();
        let note = Note::new(id, memo.into(), tags);
        debug!("created note {} with {} tag(s)", id, note.tags.len());
        self.push(note)
    }

    /// Append a note that keeps a previously recorded creation time
    ///
    /// The note still receives a fresh id from this notebook's counter.
    pub fn restore(
        &mut self,
        memo: impl Into<String>,
        tags: Vec<String>,
        creation_date: NaiveDateTime,
    ) -> &Note {
        let id = self.allocate_id();
        self.push(Note::with_date(id, memo.into(), tags, creation_date))
    }

    /// All notes matching `query`, in storage order
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(query)).collect()
    }

    /// Update or delete the first note with `id`
    pub fn modify(&mut self, id: NoteId, change: NoteChange) -> ModifyOutcome {
        let Some(pos) = self.notes.iter().position(|n| n.id() == id) else {
            debug!("modify: note {} not found", id);
            return ModifyOutcome::NotFound;
        };

        if change.delete {
            self.notes.remove(pos);
            debug!("deleted note {}", id);
            return ModifyOutcome::Deleted;
        }

        let note = &mut self.notes[pos];
        if !change.memo.is_empty() {
            note.memo = change.memo;
        }
        if !change.tags.is_empty() {
            note.tags = change.tags;
        }
        debug!("updated note {}", id);
        ModifyOutcome::Updated
    }

    /// Remove every note and restart ids at 1
    pub fn clear(&mut self) {
        debug!("clearing {} note(s)", self.notes.len());
        self.notes.clear();
        self.next_id = 1;
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, note: Note) -> &Note {
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
