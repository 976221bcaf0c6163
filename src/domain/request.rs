// src/domain/request.rs
//
// Typed payloads for every mutation. Creation requests carry their own
// validation; update requests use `None` for "keep the stored value".
use crate::domain::{Folder, Note};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFolder {
    pub name: String,
    pub description: String,
}

impl CreateFolder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn into_folder(self, id: i64) -> Folder {
        Folder {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFolder {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateFolder {
    pub fn apply(&self, folder: &mut Folder) {
        if let Some(name) = &self.name {
            folder.name = name.clone();
        }
        if let Some(description) = &self.description {
            folder.description = description.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub folder_id: Option<i64>,
}

impl CreateNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            folder_id: None,
        }
    }

    pub fn in_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Both title and content are required
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn into_note(self, id: i64) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            folder_id: self.folder_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateNote {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    /// `Some(None)` detaches the note from its folder
    pub folder_id: Option<Option<i64>>,
}

impl UpdateNote {
    pub fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(folder_id) = self.folder_id {
            note.folder_id = folder_id;
        }
    }
}
