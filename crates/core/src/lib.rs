//! Core library for pdfoutline
//!
//! This crate implements the **Functional Core** of the pdfoutline application:
//! outline inference over already-decoded page data, with zero I/O.
//!
//! # Architecture Overview
//!
//! - **`outline_core`** (this crate): pure transformation from spans and lines
//!   to an [`ExtractionResult`]
//! - **`pdf`**: the lopdf-backed reader implementing [`OutlineSource`]
//! - **`pdfoutline`**: directory scanning, JSON output and orchestration
//!
//! # Pipeline
//!
//! [`extract_outline`] first tries the document's embedded navigation tree
//! ([`native`]). When there is none it falls back to the heuristic engine:
//!
//! - [`profile`]: document-wide font sizes and the heading tier
//! - [`candidates`]: per-page span texts that look like headings
//! - [`numbering`]: numeric-prefix patterns and level assignment
//! - [`assemble`]: the line scanner that emits entries in reading order
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use outline_core::{extract_outline, HeuristicConfig};
//!
//! let doc = pdf::PdfDocument::open("report.pdf")?;
//! let result = extract_outline(&doc, "report", &HeuristicConfig::default());
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```

use std::path::Path;

pub mod assemble;
pub mod candidates;
pub mod config;
pub mod native;
pub mod numbering;
pub mod profile;
pub mod source;
pub mod types;

pub use config::HeuristicConfig;
pub use source::OutlineSource;
pub use types::*;

/// Produce the outline of one document.
///
/// Never fails: sparse or malformed page data yields a shorter (possibly empty)
/// outline and a title derived from `file_stem`.
pub fn extract_outline<S>(source: &S, file_stem: &str, config: &HeuristicConfig) -> ExtractionResult
where
    S: OutlineSource + ?Sized,
{
    let metadata_title = source.metadata_title();
    if let Some(result) = native::map_native_outline(
        &source.native_outline(),
        metadata_title.as_deref(),
        file_stem,
    ) {
        return result;
    }

    assemble::infer_outline(source, file_stem, config)
}

/// File name without its extension, used as the fallback title.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory document used to drive the engine without a PDF.
    #[derive(Default)]
    struct FixtureDocument {
        native: Vec<NativeOutlineItem>,
        title: Option<String>,
        pages: Vec<(Vec<Span>, Vec<String>)>,
    }

    impl FixtureDocument {
        fn page(mut self, spans: Vec<Span>, lines: &[&str]) -> Self {
            self.pages
                .push((spans, lines.iter().map(|l| l.to_string()).collect()));
            self
        }
    }

    impl OutlineSource for FixtureDocument {
        fn native_outline(&self) -> Vec<NativeOutlineItem> {
            self.native.clone()
        }

        fn metadata_title(&self) -> Option<String> {
            self.title.clone()
        }

        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_spans(&self, page_index: usize) -> Vec<Span> {
            self.pages[page_index].0.clone()
        }

        fn page_lines(&self, page_index: usize) -> Vec<String> {
            self.pages[page_index].1.clone()
        }
    }

    #[test]
    fn test_empty_document_uses_file_stem() {
        let doc = FixtureDocument::default();
        let result = extract_outline(&doc, "empty", &HeuristicConfig::default());
        assert_eq!(result.title, "empty");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_pages_without_spans_or_numbers() {
        let doc = FixtureDocument::default()
            .page(Vec::new(), &["Plain body text", "More body text"])
            .page(Vec::new(), &[]);
        let result = extract_outline(&doc, "notes", &HeuristicConfig::default());
        assert_eq!(result.title, "notes");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_native_outline_bypasses_heuristics() {
        let doc = FixtureDocument {
            native: vec![
                NativeOutlineItem {
                    depth: 1,
                    text: "Preface".to_string(),
                    page: 1,
                },
                NativeOutlineItem {
                    depth: 4,
                    text: "Deep".to_string(),
                    page: 7,
                },
            ],
            title: Some("Book".to_string()),
            ..Default::default()
        }
        .page(
            vec![Span::new("EXECUTIVE SUMMARY", 20.0, true)],
            &["EXECUTIVE SUMMARY", "1. Introduction"],
        );

        let result = extract_outline(&doc, "book", &HeuristicConfig::default());
        assert_eq!(result.title, "Book");
        assert_eq!(result.outline.len(), 2);
        assert_eq!(result.outline[0].text, "Preface");
        assert_eq!(result.outline[1].level.to_string(), "H4");
    }

    #[test]
    fn test_heuristic_document_in_reading_order() {
        let doc = FixtureDocument::default()
            .page(
                vec![
                    Span::new("EXECUTIVE SUMMARY", 18.0, false),
                    Span::new("Body text paragraph", 10.0, false),
                ],
                &["EXECUTIVE SUMMARY", "Body text paragraph"],
            )
            .page(
                vec![Span::new("Body text paragraph", 10.0, false)],
                &["1. Introduction", "1.2.", "Background and Motivation"],
            );

        let result = extract_outline(&doc, "report", &HeuristicConfig::default());
        assert_eq!(result.title, "EXECUTIVE SUMMARY");
        assert_eq!(
            result.outline,
            vec![
                OutlineEntry {
                    level: HeadingLevel::H1,
                    text: "EXECUTIVE SUMMARY".to_string(),
                    page: 1,
                },
                OutlineEntry {
                    level: HeadingLevel::H1,
                    text: "1. Introduction".to_string(),
                    page: 2,
                },
                OutlineEntry {
                    level: HeadingLevel::H2,
                    text: "1.2. Background and Motivation".to_string(),
                    page: 2,
                },
            ]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let doc = FixtureDocument::default().page(
            vec![
                Span::new("Alpha Heading", 16.0, true),
                Span::new("Beta Heading", 16.0, true),
            ],
            &["Beta Heading", "Alpha Heading", "2. Scope"],
        );
        let config = HeuristicConfig::default();

        let first = serde_json::to_string_pretty(&extract_outline(&doc, "d", &config)).unwrap();
        let second = serde_json::to_string_pretty(&extract_outline(&doc, "d", &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/in/report.final.pdf")), "report.final");
        assert_eq!(file_stem(Path::new("plain")), "plain");
    }
}
