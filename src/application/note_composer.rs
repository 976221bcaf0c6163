// src/application/note_composer.rs
use crate::application::ids::{next_id, IdClock, SystemClock};
use crate::application::popup::Popup;
use crate::application::{FolderRepository, NoteRepository};
use crate::domain::{CreateNote, DomainError, Folder, Note};
use std::time::Instant;
use tracing::{debug, info, instrument};

pub const NOTE_SAVED: &str = "Note saved successfully!";

/// Creation form for notes, with the folder selector's choices
pub struct NoteComposer<R, C: IdClock = SystemClock>
where
    R: NoteRepository + FolderRepository,
{
    repository: R,
    clock: C,
    popup: Popup,
}

impl<R: NoteRepository + FolderRepository> NoteComposer<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C> NoteComposer<R, C>
where
    R: NoteRepository + FolderRepository,
    C: IdClock,
{
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self {
            repository,
            clock,
            popup: Popup::default(),
        }
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = popup;
        self
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Folders a new note may be filed under
    pub fn folder_choices(&mut self) -> Result<Vec<Folder>, DomainError> {
        self.repository.load_folders()
    }

    /// Returns `None` without touching the store unless title and content are
    /// both filled in. A folder id must name one of `folder_choices`.
    #[instrument(level = "debug", skip(self, request, now), fields(title = %request.title))]
    pub fn create(
        &mut self,
        request: CreateNote,
        now: Instant,
    ) -> Result<Option<Note>, DomainError> {
        if !request.is_valid() {
            debug!("Title or content missing, nothing created");
            return Ok(None);
        }

        if let Some(folder_id) = request.folder_id {
            self.repository.get_folder(folder_id)?;
        }

        let existing = self.repository.load_notes()?;
        let id = next_id(&self.clock, existing.iter().map(|n| n.id))?;
        let note = request.into_note(id);
        self.repository.prepend_note(note.clone())?;

        info!(note_id = id, folder_id = ?note.folder_id, "Created note");
        self.popup.notify_success(NOTE_SAVED, now);
        Ok(Some(note))
    }
}
