// src/infrastructure/json_repository.rs
use crate::application::{FolderRepository, NoteRepository};
use crate::constants::{FOLDERS_KEY, NOTES_KEY};
use crate::domain::{DomainError, Folder, Note};
use crate::infrastructure::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// Folders and notes as JSON arrays under their fixed keys in one store.
///
/// An absent key reads as an empty collection. A present but malformed value
/// is reported, never replaced.
#[derive(Debug, Clone)]
pub struct JsonRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> JsonRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DomainError> {
        let raw = self
            .store
            .get(key)
            .map_err(|e| DomainError::StorageError(format!("{:#}", e)))?;

        match raw {
            None => {
                debug!(key, "Collection not stored yet, treating as empty");
                Ok(Vec::new())
            }
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                DomainError::CorruptCollection {
                    key: key.to_string(),
                    source,
                }
            }),
        }
    }

    fn write_collection<T: Serialize>(
        &mut self,
        key: &str,
        items: &[T],
    ) -> Result<(), DomainError> {
        let json = serde_json::to_string(items)
            .map_err(|e| DomainError::StorageError(format!("Failed to serialize {key}: {e}")))?;
        self.store
            .set(key, &json)
            .map_err(|e| DomainError::StorageError(format!("{:#}", e)))?;
        debug!(key, count = items.len(), "Persisted collection");
        Ok(())
    }
}

impl<S: KeyValueStore> FolderRepository for JsonRepository<S> {
    #[instrument(level = "trace", skip(self))]
    fn load_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        self.read_collection(FOLDERS_KEY)
    }

    fn store_folders(&mut self, folders: &[Folder]) -> Result<(), DomainError> {
        self.write_collection(FOLDERS_KEY, folders)
    }
}

impl<S: KeyValueStore> NoteRepository for JsonRepository<S> {
    #[instrument(level = "trace", skip(self))]
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.read_collection(NOTES_KEY)
    }

    fn store_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        self.write_collection(NOTES_KEY, notes)
    }
}
