use crate::types::{ExtractionResult, HeadingLevel, NativeOutlineItem, OutlineEntry};

/// Map an embedded navigation tree straight into an [`ExtractionResult`].
///
/// Returns `None` for an empty tree so the caller can fall back to the
/// heuristic engine. Depths are kept as-is (`H4`, `H5`, ... included) and no
/// entry is dropped or merged.
pub fn map_native_outline(
    items: &[NativeOutlineItem],
    metadata_title: Option<&str>,
    file_stem: &str,
) -> Option<ExtractionResult> {
    if items.is_empty() {
        return None;
    }

    let outline = items
        .iter()
        .map(|item| OutlineEntry {
            level: HeadingLevel::try_from(item.depth).unwrap_or(HeadingLevel::H1),
            text: item.text.trim().to_string(),
            page: item.page,
        })
        .collect();

    let title = metadata_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(file_stem)
        .trim()
        .to_string();

    Some(ExtractionResult { title, outline })
}
