//! In-memory note store
//!
//! A [`Notebook`] owns an ordered list of [`Note`]s and answers
//! create/search/modify/clear requests by linear scan.

pub mod book;
pub mod note;

pub use book::{ModifyOutcome, NoteChange, Notebook};
pub use note::{format_timestamp, parse_timestamp, Note, NoteId};
