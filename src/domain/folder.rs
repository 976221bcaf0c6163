// src/domain/folder.rs
use serde::{Deserialize, Serialize};

/// A named grouping that notes may point at through `Note::folder_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
