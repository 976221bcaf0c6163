// src/infrastructure/pdf_writer.rs
//
// Minimal PDF 1.4 writer: text only, one built-in font (Helvetica,
// WinAnsiEncoding), no compression. Coordinates are PDF points with the
// origin at the bottom-left corner of the page.
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126, from the AFM
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' - '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' - 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' - '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' - 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p' - '~'
];
const DEFAULT_WIDTH: u16 = 556;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Rendered width of `text` in points at `font_size`
pub fn text_width_pt(text: &str, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let width = match c as u32 {
                code @ 32..=126 => HELVETICA_WIDTHS[(code - 32) as usize],
                _ => DEFAULT_WIDTH,
            };
            u32::from(width)
        })
        .sum();
    units as f32 / 1000.0 * font_size
}

/// Escape text for a PDF literal string. Latin-1 characters become octal
/// escapes so the content stream stays ASCII; anything wider becomes `?`.
fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\t' => out.push(' '),
            ' '..='~' => out.push(c),
            c if (c as u32) >= 0xA0 && (c as u32) <= 0xFF => {
                out.push_str(&format!("\\{:03o}", c as u32))
            }
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    runs: Vec<TextRun>,
}

impl PdfPage {
    pub fn text(&mut self, x: f32, y: f32, font_size: f32, text: impl Into<String>) {
        self.runs.push(TextRun {
            x,
            y,
            font_size,
            text: text.into(),
        });
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    fn content_stream(&self) -> String {
        let mut stream = String::new();
        for run in &self.runs {
            stream.push_str(&format!(
                "BT\n/F1 {:.2} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                run.font_size,
                run.x,
                run.y,
                encode_text(&run.text)
            ));
        }
        stream
    }
}

#[derive(Debug, Clone)]
pub struct PdfDocument {
    title: String,
    width: f32,
    height: f32,
    pages: Vec<PdfPage>,
}

impl PdfDocument {
    /// Page size in points
    pub fn new(title: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            pages: Vec::new(),
        }
    }

    pub fn add_page(&mut self) -> &mut PdfPage {
        self.pages.push(PdfPage::default());
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn pages(&self) -> &[PdfPage] {
        &self.pages
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut PdfPage> {
        self.pages.get_mut(index)
    }

    /// Serialize the document. An empty document still gets one blank page.
    pub fn to_bytes(&self) -> Vec<u8> {
        let blank = [PdfPage::default()];
        let pages: &[PdfPage] = if self.pages.is_empty() { &blank } else { &self.pages };

        // Object layout: 1 catalog, 2 page tree, 3 font, 4 info,
        // then a page object and its content stream per page.
        let page_obj = |i: usize| 5 + 2 * i;
        let object_count = 4 + 2 * pages.len();

        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::with_capacity(object_count);
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut object = |out: &mut Vec<u8>, body: String| {
            offsets.push(out.len());
            let number = offsets.len();
            out.extend_from_slice(format!("{number} 0 obj\n{body}\nendobj\n").as_bytes());
        };

        object(&mut out, "<< /Type /Catalog /Pages 2 0 R >>".to_string());
        let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", page_obj(i))).collect();
        object(
            &mut out,
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
        );
        object(
            &mut out,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );
        object(
            &mut out,
            format!(
                "<< /Title ({}) /Producer (notecase {}) >>",
                encode_text(&self.title),
                env!("CARGO_PKG_VERSION")
            ),
        );

        for (i, page) in pages.iter().enumerate() {
            object(
                &mut out,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                    self.width,
                    self.height,
                    page_obj(i) + 1
                ),
            );
            let stream = page.content_stream();
            object(
                &mut out,
                format!("<< /Length {} >>\nstream\n{}endstream", stream.len(), stream),
            );
        }

        let xref_start = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", object_count + 1);
        for offset in &offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        out.extend_from_slice(xref.as_bytes());
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R /Info 4 0 R >>\nstartxref\n{}\n%%EOF\n",
                object_count + 1,
                xref_start
            )
            .as_bytes(),
        );
        out
    }

    #[instrument(level = "debug", skip(self), fields(pages = self.pages.len()))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let bytes = self.to_bytes();
        fs::write(path, &bytes)
            .with_context(|| format!("Failed to write PDF to {}", path.display()))?;
        debug!(?path, bytes = bytes.len(), "Wrote PDF");
        Ok(())
    }
}
