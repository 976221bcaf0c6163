// src/ports/pdf.rs
use crate::application::NoteView;
use crate::constants::{
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PDF_CONTENT_FONT_PT, PDF_CONTENT_TOP_MM, PDF_CONTENT_WIDTH_MM,
    PDF_FOLDER_FONT_PT, PDF_LINE_HEIGHT_FACTOR, PDF_MARGIN_MM, PDF_TITLE_FONT_PT,
};
use crate::infrastructure::pdf_writer::{mm_to_pt, text_width_pt, PdfDocument};
use crate::util::text::{sanitize_file_stem, wrap_text};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Page geometry and font sizes. Lengths in millimetres, sizes in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub content_top_mm: f32,
    pub content_width_mm: f32,
    pub title_font_pt: f32,
    pub content_font_pt: f32,
    pub folder_font_pt: f32,
    pub line_height_factor: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            margin_mm: PDF_MARGIN_MM,
            content_top_mm: PDF_CONTENT_TOP_MM,
            content_width_mm: PDF_CONTENT_WIDTH_MM,
            title_font_pt: PDF_TITLE_FONT_PT,
            content_font_pt: PDF_CONTENT_FONT_PT,
            folder_font_pt: PDF_FOLDER_FONT_PT,
            line_height_factor: PDF_LINE_HEIGHT_FACTOR,
        }
    }
}

/// Lays a note out as a PDF: title, wrapped content, and the folder name
/// pinned near the bottom of the first page.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    layout: PdfLayout,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: PdfLayout) -> Self {
        Self { layout }
    }

    /// `<title>.pdf`, made safe for the file system
    pub fn file_name(title: &str) -> String {
        format!("{}.pdf", sanitize_file_stem(title))
    }

    pub fn render_note(&self, view: &NoteView) -> PdfDocument {
        self.render(&view.note.title, &view.note.content, view.folder_name.as_deref())
    }

    /// Content lines that do not fit above the bottom margin continue on
    /// further pages.
    #[instrument(level = "debug", skip(self, content))]
    pub fn render(&self, title: &str, content: &str, folder_name: Option<&str>) -> PdfDocument {
        let layout = &self.layout;
        let height = mm_to_pt(layout.page_height_mm);
        let left = mm_to_pt(layout.margin_mm);
        let from_top = |mm: f32| height - mm_to_pt(mm);

        let mut doc = PdfDocument::new(title, mm_to_pt(layout.page_width_mm), height);
        doc.add_page()
            .text(left, from_top(layout.margin_mm), layout.title_font_pt, title);

        let font = layout.content_font_pt;
        let line_height = font * layout.line_height_factor;
        let bottom = mm_to_pt(layout.margin_mm) + line_height;
        let lines = wrap_text(content, mm_to_pt(layout.content_width_mm), |s| {
            text_width_pt(s, font)
        });
        debug!(lines = lines.len(), "Wrapped content");

        let mut page_index = 0;
        let mut y = from_top(layout.content_top_mm);
        for line in lines {
            if y < bottom {
                doc.add_page();
                page_index += 1;
                y = from_top(layout.margin_mm);
            }
            if !line.is_empty() {
                if let Some(page) = doc.page_mut(page_index) {
                    page.text(left, y, font, line);
                }
            }
            y -= line_height;
        }

        if let Some(name) = folder_name {
            if let Some(first) = doc.page_mut(0) {
                first.text(
                    left,
                    mm_to_pt(layout.margin_mm),
                    layout.folder_font_pt,
                    format!("Folder: {name}"),
                );
            }
        }

        doc
    }

    /// Render and write to `path`, returning the path written
    pub fn export(&self, view: &NoteView, path: &Path) -> Result<PathBuf> {
        let doc = self.render_note(view);
        doc.save(path)?;
        info!(note_id = view.note.id, ?path, pages = doc.pages().len(), "Exported note to PDF");
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;

    fn view(content: &str, folder_name: Option<&str>) -> NoteView {
        NoteView {
            note: Note {
                id: 1,
                title: "Title A".to_string(),
                content: content.to_string(),
                folder_id: folder_name.map(|_| 7),
            },
            folder_name: folder_name.map(str::to_string),
        }
    }

    #[test]
    fn given_short_note_when_rendering_then_places_title_and_content() {
        // Arrange
        let exporter = PdfExporter::new();

        // Act
        let doc = exporter.render_note(&view("Body A", None));

        // Assert
        assert_eq!(doc.pages().len(), 1);
        let runs = doc.pages()[0].runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Title A");
        assert_eq!(runs[0].font_size, 18.0);
        assert_eq!(runs[1].text, "Body A");
        assert_eq!(runs[1].font_size, 12.0);
        assert!(runs[0].y > runs[1].y, "title sits above content");
    }

    #[test]
    fn given_folder_name_when_rendering_then_pins_label_near_bottom() {
        let doc = PdfExporter::new().render_note(&view("Body", Some("Ideas")));

        let runs = doc.pages()[0].runs();
        let label = runs.last().expect("folder label");
        assert_eq!(label.text, "Folder: Ideas");
        assert_eq!(label.font_size, 10.0);
        assert!((label.y - mm_to_pt(20.0)).abs() < 1e-3);
    }

    #[test]
    fn given_long_paragraph_when_rendering_then_lines_fit_content_width() {
        let content = "lorem ipsum dolor sit amet ".repeat(40);
        let doc = PdfExporter::new().render_note(&view(&content, None));

        let max = mm_to_pt(180.0);
        let content_runs = &doc.pages()[0].runs()[1..];
        assert!(content_runs.len() > 1);
        for run in content_runs {
            assert!(text_width_pt(&run.text, 12.0) <= max);
        }
    }

    #[test]
    fn given_content_taller_than_page_when_rendering_then_continues_on_new_page() {
        let content = (1..=120).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let doc = PdfExporter::new().render_note(&view(&content, Some("Ideas")));

        assert!(doc.pages().len() >= 2);
        let folder_labels = doc
            .pages()
            .iter()
            .flat_map(|p| p.runs())
            .filter(|r| r.text.starts_with("Folder: "))
            .count();
        assert_eq!(folder_labels, 1);
        let total_lines = doc
            .pages()
            .iter()
            .flat_map(|p| p.runs())
            .filter(|r| r.text.starts_with("line "))
            .count();
        assert_eq!(total_lines, 120);
    }

    #[test]
    fn given_narrow_layout_when_rendering_then_wraps_earlier() {
        let layout = PdfLayout {
            content_width_mm: 30.0,
            ..PdfLayout::default()
        };

        let note = view("one two three four five six", None);

        let narrow = PdfExporter::with_layout(layout).render_note(&note);
        let wide = PdfExporter::new().render_note(&note);

        assert!(narrow.pages()[0].runs().len() > wide.pages()[0].runs().len());
    }

    #[test]
    fn given_hostile_title_when_naming_file_then_sanitizes() {
        assert_eq!(PdfExporter::file_name("Plans/2024"), "Plans_2024.pdf");
    }

    #[test]
    fn given_target_path_when_exporting_then_writes_pdf_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(PdfExporter::file_name("Title A"));

        let written = PdfExporter::new()
            .export(&view("Body", None), &path)
            .unwrap();

        assert_eq!(written, path);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
