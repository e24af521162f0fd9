use crate::types::{NativeOutlineItem, Span};

/// Read access to an opened document.
///
/// The engine only ever reads through this trait, so it can be driven by a
/// real PDF reader or by fixture data in tests. Page indices are 0-based and
/// always below [`OutlineSource::page_count`]; implementations degrade to
/// empty results instead of failing for pages they cannot decode.
pub trait OutlineSource {
    /// Entries of the embedded navigation tree in document order, if any.
    fn native_outline(&self) -> Vec<NativeOutlineItem>;

    /// The title recorded in the document metadata.
    fn metadata_title(&self) -> Option<String>;

    fn page_count(&self) -> usize;

    /// Styled spans of a page in reading order.
    fn page_spans(&self, page_index: usize) -> Vec<Span>;

    /// Plain-text lines of a page in reading order.
    fn page_lines(&self, page_index: usize) -> Vec<String>;
}
