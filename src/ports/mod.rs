// src/ports/mod.rs
pub mod pdf;
pub mod terminal;

pub use pdf::{PdfExporter, PdfLayout};
pub use terminal::TerminalPresenter;
