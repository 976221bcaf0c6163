// src/application/repository.rs
use crate::domain::{DomainError, Folder, Note, UpdateFolder, UpdateNote};

/// Whole-collection access to the stored folders.
///
/// Backends only load and store the full list; every mutation is a
/// read-modify-write of that list, provided here once for all backends.
pub trait FolderRepository {
    fn load_folders(&mut self) -> Result<Vec<Folder>, DomainError>;

    fn store_folders(&mut self, folders: &[Folder]) -> Result<(), DomainError>;

    fn get_folder(&mut self, id: i64) -> Result<Folder, DomainError> {
        self.load_folders()?
            .into_iter()
            .find(|f| f.id == id)
            .ok_or(DomainError::FolderNotFound(id))
    }

    /// Append in insertion order
    fn append_folder(&mut self, folder: Folder) -> Result<(), DomainError> {
        let mut folders = self.load_folders()?;
        folders.push(folder);
        self.store_folders(&folders)
    }

    /// Returns the updated folder, or `None` (store untouched) if no folder has that id
    fn update_folder(&mut self, request: &UpdateFolder) -> Result<Option<Folder>, DomainError> {
        let mut folders = self.load_folders()?;
        let Some(folder) = folders.iter_mut().find(|f| f.id == request.id) else {
            return Ok(None);
        };
        request.apply(folder);
        let updated = folder.clone();
        self.store_folders(&folders)?;
        Ok(Some(updated))
    }

    /// Returns whether a folder was removed. Notes pointing at it are left alone.
    fn delete_folder(&mut self, id: i64) -> Result<bool, DomainError> {
        let mut folders = self.load_folders()?;
        let before = folders.len();
        folders.retain(|f| f.id != id);
        if folders.len() == before {
            return Ok(false);
        }
        self.store_folders(&folders)?;
        Ok(true)
    }
}

/// Whole-collection access to the stored notes, most recent first.
pub trait NoteRepository {
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn store_notes(&mut self, notes: &[Note]) -> Result<(), DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.load_notes()?
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))
    }

    /// Insert at the front so the stored order stays most-recent-first
    fn prepend_note(&mut self, note: Note) -> Result<(), DomainError> {
        let mut notes = self.load_notes()?;
        notes.insert(0, note);
        self.store_notes(&notes)
    }

    fn update_note(&mut self, request: &UpdateNote) -> Result<Option<Note>, DomainError> {
        let mut notes = self.load_notes()?;
        let Some(note) = notes.iter_mut().find(|n| n.id == request.id) else {
            return Ok(None);
        };
        request.apply(note);
        let updated = note.clone();
        self.store_notes(&notes)?;
        Ok(Some(updated))
    }

    fn delete_note(&mut self, id: i64) -> Result<bool, DomainError> {
        let mut notes = self.load_notes()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.store_notes(&notes)?;
        Ok(true)
    }
}
