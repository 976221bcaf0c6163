// src/application/mod.rs
pub mod folder_manager;
pub mod ids;
pub mod note_composer;
pub mod popup;
pub mod recent_notes;
pub mod repository;

pub use folder_manager::FolderManager;
pub use ids::{IdClock, SystemClock};
pub use note_composer::NoteComposer;
pub use popup::{DeleteTarget, Popup, PopupState};
pub use recent_notes::{NoteFilter, NoteView, RecentNotes};
pub use repository::{FolderRepository, NoteRepository};
