//! notebook-cli library
//!
//! Core functionality for a personal command-line notebook: the in-memory
//! note store with its search predicate, and the flat-file persistence
//! formats.

pub mod config;
pub mod notebook;
pub mod storage;

pub use notebook::{ModifyOutcome, Note, NoteChange, NoteId, Notebook};
