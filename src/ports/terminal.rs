// src/ports/terminal.rs
use crate::application::NoteView;
use crate::constants::PREVIEW_CHARS;
use crate::domain::Folder;
use crate::util::text::preview;
use anyhow::{Context, Result};

/// Plain-text views of folders and notes for the terminal
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn folder_line(&self, folder: &Folder) -> String {
        if folder.description.is_empty() {
            format!("{}\t{}", folder.id, folder.name)
        } else {
            format!("{}\t{}\t{}", folder.id, folder.name, folder.description)
        }
    }

    pub fn folder_list(&self, folders: &[Folder]) -> String {
        if folders.is_empty() {
            return "No folders yet.".to_string();
        }
        folders
            .iter()
            .map(|f| self.folder_line(f))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Title, a content preview and the folder label when it resolves
    pub fn note_summary(&self, view: &NoteView) -> String {
        let mut out = format!(
            "{}\t{}\n    {}",
            view.note.id,
            view.note.title,
            preview(&view.note.content, PREVIEW_CHARS).replace('\n', " ")
        );
        if let Some(name) = &view.folder_name {
            out.push_str(&format!("\n    Folder: {name}"));
        }
        out
    }

    pub fn note_list(&self, views: &[NoteView]) -> String {
        if views.is_empty() {
            return "No notes yet.".to_string();
        }
        views
            .iter()
            .map(|v| self.note_summary(v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn note_detail(&self, view: &NoteView) -> String {
        let folder = view.folder_name.as_deref().unwrap_or("(none)");
        format!(
            "Note ID: {}\nTitle: {}\nFolder: {}\n\n{}",
            view.note.id, view.note.title, folder, view.note.content
        )
    }

    pub fn note_json(&self, view: &NoteView) -> Result<String> {
        serde_json::to_string_pretty(view).context("Failed to serialize note to JSON")
    }
}
