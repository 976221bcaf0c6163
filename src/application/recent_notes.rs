// src/application/recent_notes.rs
use crate::application::popup::{DeleteTarget, Popup};
use crate::application::{FolderRepository, NoteRepository};
use crate::domain::{DomainError, Folder, Note, UpdateNote};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument};

pub const NOTE_DELETE_PROMPT: &str = "Are you sure you want to delete this note?";
pub const NOTE_DELETED: &str = "Note deleted successfully!";

/// A note with its folder name resolved, if the folder still exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    #[serde(flatten)]
    pub note: Note,
    pub folder_name: Option<String>,
}

impl NoteView {
    fn resolve(note: Note, folders: &[Folder]) -> Self {
        let folder_name = note
            .folder_id
            .and_then(|id| folders.iter().find(|f| f.id == id))
            .map(|f| f.name.clone());
        Self { note, folder_name }
    }
}

/// Filters for listing notes; both are optional and combine with AND
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Case-insensitive substring of title or content
    pub search: Option<String>,
    pub folder_id: Option<i64>,
}

impl NoteFilter {
    fn matches(&self, note: &Note) -> bool {
        if let Some(folder_id) = self.folder_id {
            if !note.belongs_to(folder_id) {
                return false;
            }
        }
        match &self.search {
            None => true,
            Some(query) => {
                let query = query.to_lowercase();
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            }
        }
    }
}

/// Listing, inline editing, deletion and export source for stored notes.
///
/// Deletion has two paths: `delete_immediately` skips the popup entirely,
/// `request_delete` + `confirm_delete` goes through it.
pub struct RecentNotes<R: NoteRepository + FolderRepository> {
    repository: R,
    popup: Popup,
}

impl<R: NoteRepository + FolderRepository> RecentNotes<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
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

    /// All notes in stored order (most recent first)
    pub fn list(&mut self) -> Result<Vec<NoteView>, DomainError> {
        self.search(&NoteFilter::default())
    }

    pub fn search(&mut self, filter: &NoteFilter) -> Result<Vec<NoteView>, DomainError> {
        let folders = self.repository.load_folders()?;
        Ok(self
            .repository
            .load_notes()?
            .into_iter()
            .filter(|n| filter.matches(n))
            .map(|n| NoteView::resolve(n, &folders))
            .collect())
    }

    pub fn show(&mut self, id: i64) -> Result<NoteView, DomainError> {
        let note = self.repository.get_note(id)?;
        let folders = self.repository.load_folders()?;
        Ok(NoteView::resolve(note, &folders))
    }

    /// Saves an inline edit. No popup, as the inline editor just closes.
    /// Returns `None` (store untouched) if no note has that id.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, request: &UpdateNote) -> Result<Option<Note>, DomainError> {
        if let Some(Some(folder_id)) = request.folder_id {
            self.repository.get_folder(folder_id)?;
        }
        let updated = self.repository.update_note(request)?;
        match &updated {
            Some(note) => info!(note_id = note.id, "Updated note"),
            None => debug!(note_id = request.id, "No note to update"),
        }
        Ok(updated)
    }

    /// Unconfirmed delete; returns whether a note was removed
    #[instrument(level = "debug", skip(self))]
    pub fn delete_immediately(&mut self, id: i64) -> Result<bool, DomainError> {
        let removed = self.repository.delete_note(id)?;
        if removed {
            info!(note_id = id, "Deleted note");
        }
        Ok(removed)
    }

    pub fn request_delete(&mut self, id: i64) -> Result<(), DomainError> {
        self.repository.get_note(id)?;
        self.popup
            .request_delete(NOTE_DELETE_PROMPT, DeleteTarget::Note(id));
        Ok(())
    }

    pub fn confirm_delete(&mut self, now: Instant) -> Result<Option<i64>, DomainError> {
        let Some(DeleteTarget::Note(id)) = self.popup.take_confirmed() else {
            return Ok(None);
        };
        if !self.delete_immediately(id)? {
            return Ok(None);
        }
        self.popup.notify_success(NOTE_DELETED, now);
        Ok(Some(id))
    }

    pub fn cancel_delete(&mut self) {
        self.popup.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateNote;
    use crate::util::testing::MockRepository;

    fn note(id: i64, title: &str, folder_id: Option<i64>) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: format!("{title} body"),
            folder_id,
        }
    }

    fn folder(id: i64, name: &str) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn given_dangling_folder_id_when_listing_then_has_no_folder_name() {
        // Arrange
        let repo = MockRepository::builder()
            .with_folder(folder(1, "Ideas"))
            .with_note(note(10, "Filed", Some(1)))
            .with_note(note(11, "Orphan", Some(999)))
            .with_note(note(12, "Loose", None))
            .build();
        let mut recent = RecentNotes::new(repo);

        // Act
        let views = recent.list().expect("List should succeed");

        // Assert
        let names: Vec<_> = views.iter().map(|v| v.folder_name.as_deref()).collect();
        assert_eq!(names, vec![Some("Ideas"), None, None]);
        assert_eq!(views[1].note.folder_id, Some(999));
    }

    #[test]
    fn given_edit_when_saving_then_changes_only_matching_note() {
        // Arrange
        let notes = vec![note(1, "A", None), note(2, "B", None), note(3, "C", None)];
        let mut builder = MockRepository::builder();
        for n in &notes {
            builder = builder.with_note(n.clone());
        }
        let mut recent = RecentNotes::new(builder.build());
        let request = UpdateNote {
            id: 2,
            title: Some("B edited".to_string()),
            content: Some("new body".to_string()),
            folder_id: None,
        };

        // Act
        let updated = recent.update(&request).expect("Update should succeed");

        // Assert
        assert!(updated.is_some());
        let stored = recent.into_repository().notes();
        assert_eq!(stored[0], notes[0]);
        assert_eq!(stored[1].title, "B edited");
        assert_eq!(stored[1].content, "new body");
        assert_eq!(stored[2], notes[2]);
    }

    #[test]
    fn given_immediate_delete_when_deleting_then_no_popup_is_shown() {
        let repo = MockRepository::builder().with_note(note(1, "A", None)).build();
        let mut recent = RecentNotes::new(repo);

        assert!(recent.delete_immediately(1).expect("Delete should succeed"));
        assert!(!recent.popup().is_visible());
        assert!(!recent.delete_immediately(1).expect("Second delete is a no-op"));
    }

    #[test]
    fn given_confirmed_delete_when_confirming_then_removes_and_notifies() {
        let repo = MockRepository::builder()
            .with_note(note(1, "A", None))
            .with_note(note(2, "B", None))
            .build();
        let mut recent = RecentNotes::new(repo);

        recent.request_delete(1).expect("Note exists");
        assert_eq!(recent.popup().message(), Some(NOTE_DELETE_PROMPT));
        let deleted = recent.confirm_delete(Instant::now()).expect("Delete should succeed");

        assert_eq!(deleted, Some(1));
        assert_eq!(recent.popup().message(), Some(NOTE_DELETED));
        let remaining: Vec<_> = recent
            .list()
            .expect("List")
            .into_iter()
            .map(|v| v.note.id)
            .collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn given_search_and_folder_filter_when_searching_then_applies_both() {
        let repo = MockRepository::builder()
            .with_folder(folder(1, "Work"))
            .with_note(note(1, "Meeting notes", Some(1)))
            .with_note(note(2, "Meeting prep", None))
            .with_note(note(3, "Groceries", Some(1)))
            .build();
        let mut recent = RecentNotes::new(repo);
        let filter = NoteFilter {
            search: Some("MEETING".to_string()),
            folder_id: Some(1),
        };

        let views = recent.search(&filter).expect("Search should succeed");

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].note.id, 1);
    }

    #[test]
    fn given_unknown_note_when_showing_then_returns_not_found() {
        let mut recent = RecentNotes::new(MockRepository::builder().build());

        assert!(matches!(recent.show(5), Err(DomainError::NoteNotFound(5))));
    }

    #[test]
    fn given_view_when_serializing_then_flattens_note_fields() {
        let view = NoteView {
            note: CreateNote::new("T", "C").in_folder(4).into_note(1),
            folder_name: Some("Ideas".to_string()),
        };

        let json = serde_json::to_value(&view).expect("Serialize");

        assert_eq!(json["folderId"], 4);
        assert_eq!(json["folderName"], "Ideas");
        assert_eq!(json["title"], "T");
    }

    #[test]
    fn given_empty_title_when_saving_edit_then_stores_it_as_is() {
        let repo = MockRepository::builder().with_note(note(1, "A", None)).build();
        let mut recent = RecentNotes::new(repo);
        let request = UpdateNote {
            id: 1,
            title: Some(String::new()),
            ..UpdateNote::default()
        };

        let updated = recent
            .update(&request)
            .expect("Update should succeed")
            .expect("Note exists");

        assert_eq!(updated.title, "");
        let stored = recent.into_repository().notes();
        assert_eq!(stored[0].title, "");
        assert_eq!(stored[0].content, "A body");
    }

    #[test]
    fn given_failing_store_when_saving_edit_then_returns_storage_error() {
        let repo = MockRepository::builder()
            .with_note(note(1, "A", None))
            .with_failing_writes()
            .build();
        let mut recent = RecentNotes::new(repo);
        let request = UpdateNote {
            id: 1,
            title: Some("Changed".to_string()),
            ..UpdateNote::default()
        };

        let result = recent.update(&request);

        assert!(matches!(result, Err(DomainError::StorageError(_))));
        assert_eq!(recent.into_repository().notes()[0].title, "A");
    }

    #[test]
    fn given_failing_store_when_confirming_delete_then_keeps_note_and_shows_no_success() {
        // Arrange
        let repo = MockRepository::builder()
            .with_note(note(1, "A", None))
            .with_failing_writes()
            .build();
        let mut recent = RecentNotes::new(repo);
        recent.request_delete(1).expect("Note exists");

        // Act
        let result = recent.confirm_delete(Instant::now());

        // Assert
        assert!(matches!(result, Err(DomainError::StorageError(_))));
        assert_ne!(recent.popup().message(), Some(NOTE_DELETED));
        assert_eq!(recent.into_repository().notes().len(), 1);
    }

    #[test]
    fn given_failing_store_when_deleting_immediately_then_returns_storage_error() {
        let repo = MockRepository::builder()
            .with_note(note(1, "A", None))
            .with_failing_writes()
            .build();
        let mut recent = RecentNotes::new(repo);

        assert!(matches!(
            recent.delete_immediately(1),
            Err(DomainError::StorageError(_))
        ));
    }
}
