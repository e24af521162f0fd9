use std::cell::OnceCell;
use std::path::Path;

use thiserror::Error;

use outline_core::{NativeOutlineItem, OutlineSource, Span};
use parser::backend::{LopdfBackend, PageId};
use parser::layout::PageText;

pub mod parser;
pub mod text;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// An opened PDF, readable through [`OutlineSource`].
///
/// Page text is decoded on first access and cached, so the engine's two scans
/// walk each content stream once. Dropping the value releases the document.
pub struct PdfDocument {
    backend: LopdfBackend,
    pages: Vec<PageId>,
    page_text: Vec<OnceCell<PageText>>,
}

impl PdfDocument {
    /// Read and parse the PDF at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Parse PDF bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PdfError> {
        let backend = LopdfBackend::load_bytes(bytes)?;
        Ok(Self::from_backend(backend))
    }

    fn from_backend(backend: LopdfBackend) -> Self {
        let pages: Vec<PageId> = backend.raw_doc().get_pages().into_values().collect();
        let page_text = pages.iter().map(|_| OnceCell::new()).collect();
        PdfDocument {
            backend,
            pages,
            page_text,
        }
    }

    fn page_text(&self, page_index: usize) -> Option<&PageText> {
        let page_id = *self.pages.get(page_index)?;
        let cell = self.page_text.get(page_index)?;
        Some(cell.get_or_init(|| {
            log::debug!("decoding page {}", page_index + 1);
            parser::layout::extract_page_text(&self.backend, page_id)
        }))
    }
}

impl OutlineSource for PdfDocument {
    fn native_outline(&self) -> Vec<NativeOutlineItem> {
        parser::outline::native_outline(self.backend.raw_doc())
    }

    fn metadata_title(&self) -> Option<String> {
        self.backend.metadata_title()
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_spans(&self, page_index: usize) -> Vec<Span> {
        self.page_text(page_index)
            .map(|p| p.spans.clone())
            .unwrap_or_default()
    }

    fn page_lines(&self, page_index: usize) -> Vec<String> {
        self.page_text(page_index)
            .map(|p| p.lines.clone())
            .unwrap_or_default()
    }
}
