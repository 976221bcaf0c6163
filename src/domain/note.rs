// src/domain/note.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Weak reference; the folder may have been deleted since.
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl Note {
    pub fn belongs_to(&self, folder_id: i64) -> bool {
        self.folder_id == Some(folder_id)
    }
}
