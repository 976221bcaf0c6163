// src/application/folder_manager.rs
use crate::application::ids::{next_id, IdClock, SystemClock};
use crate::application::popup::{DeleteTarget, Popup};
use crate::application::FolderRepository;
use crate::domain::{CreateFolder, DomainError, Folder, UpdateFolder};
use std::time::Instant;
use tracing::{debug, info, instrument};

pub const FOLDER_SAVED: &str = "Folder saved successfully!";
pub const FOLDER_DELETE_PROMPT: &str = "Are you sure you want to delete this folder?";
pub const FOLDER_DELETED: &str = "Folder deleted successfully!";

/// Create, list, edit and confirmation-gated delete of folders
pub struct FolderManager<R: FolderRepository, C: IdClock = SystemClock> {
    repository: R,
    clock: C,
    popup: Popup,
}

impl<R: FolderRepository> FolderManager<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R: FolderRepository, C: IdClock> FolderManager<R, C> {
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

    /// Returns `None` without touching the store when the name is empty
    #[instrument(level = "debug", skip(self, now))]
    pub fn create(
        &mut self,
        request: CreateFolder,
        now: Instant,
    ) -> Result<Option<Folder>, DomainError> {
        if !request.is_valid() {
            debug!("Folder name is empty, nothing created");
            return Ok(None);
        }

        let existing = self.repository.load_folders()?;
        let id = next_id(&self.clock, existing.iter().map(|f| f.id))?;
        let folder = request.into_folder(id);
        self.repository.append_folder(folder.clone())?;

        info!(folder_id = id, name = %folder.name, "Created folder");
        self.popup.notify_success(FOLDER_SAVED, now);
        Ok(Some(folder))
    }

    pub fn list(&mut self) -> Result<Vec<Folder>, DomainError> {
        self.repository.load_folders()
    }

    #[instrument(level = "debug", skip(self, now))]
    pub fn update(
        &mut self,
        request: &UpdateFolder,
        now: Instant,
    ) -> Result<Option<Folder>, DomainError> {
        let updated = self.repository.update_folder(request)?;
        match &updated {
            Some(folder) => {
                info!(folder_id = folder.id, "Updated folder");
                self.popup.notify_success(FOLDER_SAVED, now);
            }
            None => debug!(folder_id = request.id, "No folder to update"),
        }
        Ok(updated)
    }

    /// First half of a delete: park the folder id behind a confirmation
    pub fn request_delete(&mut self, id: i64) -> Result<(), DomainError> {
        self.repository.get_folder(id)?;
        self.popup
            .request_delete(FOLDER_DELETE_PROMPT, DeleteTarget::Folder(id));
        Ok(())
    }

    /// Delete the folder awaiting confirmation, if any. Notes keep their
    /// `folder_id` even when it now points nowhere.
    #[instrument(level = "debug", skip(self, now))]
    pub fn confirm_delete(&mut self, now: Instant) -> Result<Option<i64>, DomainError> {
        let Some(DeleteTarget::Folder(id)) = self.popup.take_confirmed() else {
            return Ok(None);
        };

        if !self.repository.delete_folder(id)? {
            debug!(folder_id = id, "Folder vanished before confirmation");
            return Ok(None);
        }

        info!(folder_id = id, "Deleted folder");
        self.popup.notify_success(FOLDER_DELETED, now);
        Ok(Some(id))
    }

    pub fn cancel_delete(&mut self) {
        self.popup.cancel();
    }
}
