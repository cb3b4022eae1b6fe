//! Note model and in-memory note management.

mod note;
mod store;

pub use note::Note;
pub use store::NoteStore;
