// src/domain/mod.rs
pub mod error;
pub mod folder;
pub mod note;
pub mod request;

pub use error::DomainError;
pub use folder::Folder;
pub use note::Note;
pub use request::{CreateFolder, CreateNote, UpdateFolder, UpdateNote};
