// src/constants.rs
//
// Application-wide constants. Storage keys and layout values are part of the
// on-disk and on-page contract, so they live here rather than inline.

/// Store key holding the JSON array of folders.
///
/// Used in: `infrastructure/json_repository.rs`
pub const FOLDERS_KEY: &str = "folders";

/// Store key holding the JSON array of notes, most recent first.
///
/// Used in: `infrastructure/json_repository.rs`
pub const NOTES_KEY: &str = "notes";

/// Milliseconds a success popup stays visible before it dismisses itself.
///
/// Used in: `application/popup.rs`, `infrastructure/config.rs`
pub const POPUP_DISMISS_MS: u64 = 3000;

/// Number of content characters shown per note in list views.
///
/// Used in: `ports/terminal.rs`
pub const PREVIEW_CHARS: usize = 100;

/// A4 portrait page, in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Left margin and title baseline, in millimetres from the top-left corner.
///
/// Used in: `ports/pdf.rs`
pub const PDF_MARGIN_MM: f32 = 20.0;

/// Baseline of the first content line, in millimetres from the top.
pub const PDF_CONTENT_TOP_MM: f32 = 30.0;

/// Width that note content is wrapped to, in millimetres.
pub const PDF_CONTENT_WIDTH_MM: f32 = 180.0;

/// Font sizes in points.
pub const PDF_TITLE_FONT_PT: f32 = 18.0;
pub const PDF_CONTENT_FONT_PT: f32 = 12.0;
pub const PDF_FOLDER_FONT_PT: f32 = 10.0;

/// Line height as a multiple of the font size.
pub const PDF_LINE_HEIGHT_FACTOR: f32 = 1.15;
