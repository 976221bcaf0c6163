// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{FolderRepository, IdClock, NoteRepository};
use crate::domain::{DomainError, Folder, Note};

/// Clock pinned to one millisecond value
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl IdClock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Shared in-memory repository for testing use cases
///
/// Implements both repository traits over plain vectors and counts writes,
/// so tests can assert that a rejected request never reached the store.
///
/// # Examples
///
/// ```
/// use notecase::util::testing::MockRepository;
/// use notecase::domain::Folder;
///
/// let mock = MockRepository::builder()
///     .with_folder(Folder {
///         id: 1,
///         name: "Ideas".to_string(),
///         description: String::new(),
///     })
///     .build();
/// assert_eq!(mock.folders().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockRepository {
    folders: Vec<Folder>,
    notes: Vec<Note>,
    folder_writes: usize,
    note_writes: usize,
    fail_writes: bool,
}

impl MockRepository {
    pub fn builder() -> MockRepositoryBuilder {
        MockRepositoryBuilder::new()
    }

    pub fn folders(&self) -> Vec<Folder> {
        self.folders.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn folder_writes(&self) -> usize {
        self.folder_writes
    }

    pub fn note_writes(&self) -> usize {
        self.note_writes
    }
}

impl FolderRepository for MockRepository {
    fn load_folders(&mut self) -> Result<Vec<Folder>, DomainError> {
        Ok(self.folders.clone())
    }

    fn store_folders(&mut self, folders: &[Folder]) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::StorageError("write refused".to_string()));
        }
        self.folder_writes += 1;
        self.folders = folders.to_vec();
        Ok(())
    }
}

impl NoteRepository for MockRepository {
    fn load_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.clone())
    }

    fn store_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::StorageError("write refused".to_string()));
        }
        self.note_writes += 1;
        self.notes = notes.to_vec();
        Ok(())
    }
}

/// Builder for MockRepository
///
/// Entities are kept in the order they are added, which is their stored order.
pub struct MockRepositoryBuilder {
    folders: Vec<Folder>,
    notes: Vec<Note>,
    fail_writes: bool,
}

impl MockRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            folders: vec![],
            notes: vec![],
            fail_writes: false,
        }
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every store call fail with a storage error
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockRepository {
        MockRepository {
            folders: self.folders,
            notes: self.notes,
            folder_writes: 0,
            note_writes: 0,
            fail_writes: self.fail_writes,
        }
    }
}

impl Default for MockRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
