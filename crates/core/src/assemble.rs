//! Heuristic outline assembly.
//!
//! Two passes over the document:
//!
//! ```text
//! all spans  ->  FontProfile  ->  HeadingTier
//! per page:  spans + HeadingTier  ->  HeadingCandidates
//!            lines + HeadingCandidates  ->  OutlineAssembler::scan_page
//! ```
//!
//! Numeric prefixes always win over the typography candidates: a line is only
//! looked up in the candidate set once neither numeric form matched.

use crate::candidates::HeadingCandidates;
use crate::config::HeuristicConfig;
use crate::numbering::{level_for_prefix, numbered_heading_text, NumberingRules};
use crate::profile::FontProfile;
use crate::source::OutlineSource;
use crate::types::{ExtractionResult, HeadingLevel, OutlineEntry, Span};

/// Accumulates outline entries page by page, in reading order.
#[derive(Debug)]
pub struct OutlineAssembler<'a> {
    config: &'a HeuristicConfig,
    rules: NumberingRules,
    outline: Vec<OutlineEntry>,
    title: Option<String>,
}

impl<'a> OutlineAssembler<'a> {
    pub fn new(config: &'a HeuristicConfig) -> Self {
        OutlineAssembler {
            config,
            rules: NumberingRules::new(config.max_prefix_groups),
            outline: Vec::new(),
            title: None,
        }
    }

    /// Scan one page's lines. `page` is 1-based.
    pub fn scan_page(&mut self, page: u32, lines: &[String], candidates: &HeadingCandidates) {
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor].trim();

            // A bare prefix line takes its title from the next line.
            if let Some(prefix) = self.rules.match_bare(line) {
                let next = lines
                    .get(cursor + 1)
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty());
                if let Some(title) = next {
                    self.push_numbered(prefix, title, page);
                    cursor += 2;
                    continue;
                }
            }

            if line.chars().count() < self.config.min_heading_chars {
                cursor += 1;
                continue;
            }

            if let Some((prefix, title)) = self.rules.match_inline(line) {
                self.push_numbered(prefix, title, page);
            } else if candidates.contains(line) {
                self.push(HeadingLevel::H1, line.to_string(), page);
            }
            cursor += 1;
        }
    }

    fn push_numbered(&mut self, prefix: &str, title: &str, page: u32) {
        if let Some(level) = level_for_prefix(prefix) {
            self.push(level, numbered_heading_text(prefix, title), page);
        }
    }

    fn push(&mut self, level: HeadingLevel, text: String, page: u32) {
        let text = text.trim().to_string();
        if self
            .outline
            .iter()
            .any(|entry| entry.page == page && entry.text == text)
        {
            return;
        }

        if self.title.is_none() && level == HeadingLevel::H1 {
            self.title = Some(text.clone());
        }

        self.outline.push(OutlineEntry { level, text, page });
    }

    /// Finalize, falling back to `file_stem` when no H1 was found.
    pub fn finish(self, file_stem: &str) -> ExtractionResult {
        let title = self.title.unwrap_or_else(|| file_stem.trim().to_string());
        ExtractionResult {
            title,
            outline: self.outline,
        }
    }
}

/// Infer an outline from page text and typography alone.
pub fn infer_outline<S>(source: &S, file_stem: &str, config: &HeuristicConfig) -> ExtractionResult
where
    S: OutlineSource + ?Sized,
{
    let page_count = source.page_count();
    let pages: Vec<Vec<Span>> = (0..page_count).map(|i| source.page_spans(i)).collect();

    let profile = FontProfile::from_pages(pages.iter().map(Vec::as_slice));
    let tier = profile.heading_tier(config.heading_tiers);

    let mut assembler = OutlineAssembler::new(config);
    for (index, spans) in pages.iter().enumerate() {
        let candidates = HeadingCandidates::collect(spans, &tier, config);
        let lines = source.page_lines(index);
        assembler.scan_page(index as u32 + 1, &lines, &candidates);
    }

    assembler.finish(file_stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn scan(raw: &[&str]) -> ExtractionResult {
        let config = HeuristicConfig::default();
        let mut assembler = OutlineAssembler::new(&config);
        assembler.scan_page(1, &lines(raw), &HeadingCandidates::default());
        assembler.finish("fallback")
    }

    #[test]
    fn test_inline_numbered_heading() {
        let result = scan(&["1. Introduction"]);
        assert_eq!(
            result.outline,
            vec![OutlineEntry {
                level: HeadingLevel::H1,
                text: "1. Introduction".to_string(),
                page: 1,
            }]
        );
        assert_eq!(result.title, "1. Introduction");
    }

    #[test]
    fn test_split_numbered_heading_consumes_two_lines() {
        let result = scan(&["1.2.", "  Background and Motivation ", "2.1. Second"]);
        assert_eq!(result.outline.len(), 2);
        assert_eq!(result.outline[0].level, HeadingLevel::H2);
        assert_eq!(result.outline[0].text, "1.2. Background and Motivation");
        assert_eq!(result.outline[1].text, "2.1. Second");
    }

    #[test]
    fn test_split_title_line_is_not_rescanned() {
        // The consumed title line would otherwise match inline on its own.
        let result = scan(&["3.", "4. Not a heading of its own"]);
        assert_eq!(result.outline.len(), 1);
        assert_eq!(result.outline[0].text, "3. 4. Not a heading of its own");
    }

    #[test]
    fn test_bare_prefix_on_last_line_is_ignored() {
        let result = scan(&["Some body text here", "1.2.3."]);
        assert!(result.outline.is_empty());
        assert_eq!(result.title, "fallback");
    }

    #[test]
    fn test_bare_prefix_before_blank_line_is_ignored() {
        let result = scan(&["1.", "   ", "Body"]);
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_levels_follow_group_count() {
        let result = scan(&["1. One", "1.1. Two", "1.1.1. Three", "1.1.1.1. Four"]);
        let levels: Vec<String> = result.outline.iter().map(|e| e.level.to_string()).collect();
        assert_eq!(levels, vec!["H1", "H2", "H3"]);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let result = scan(&["1. A", "Tiny"]);
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_title_is_first_h1() {
        let result = scan(&["1.1. Subsection first", "2. Chapter Two", "3. Chapter Three"]);
        assert_eq!(result.title, "2. Chapter Two");
    }

    #[test]
    fn test_candidate_lines_become_h1_once_per_page() {
        let config = HeuristicConfig::default();
        let tier = FontProfile::from_pages([[Span::new("x", 18.0, false)].as_slice()])
            .heading_tier(1);
        let spans = vec![Span::new("EXECUTIVE SUMMARY", 18.0, true)];
        let candidates = HeadingCandidates::collect(&spans, &tier, &config);

        let mut assembler = OutlineAssembler::new(&config);
        let page = lines(&["EXECUTIVE SUMMARY", "body text", " EXECUTIVE SUMMARY "]);
        assembler.scan_page(2, &page, &candidates);
        assembler.scan_page(3, &page, &candidates);
        let result = assembler.finish("doc");

        assert_eq!(result.outline.len(), 2);
        assert_eq!(result.outline[0].page, 2);
        assert_eq!(result.outline[1].page, 3);
        assert_eq!(result.title, "EXECUTIVE SUMMARY");
    }

    #[test]
    fn test_numeric_form_takes_precedence_over_candidates() {
        let config = HeuristicConfig::default();
        let tier = FontProfile::from_pages([[Span::new("x", 18.0, false)].as_slice()])
            .heading_tier(1);
        let spans = vec![Span::new("2.1. Methods", 18.0, true)];
        let candidates = HeadingCandidates::collect(&spans, &tier, &config);

        let mut assembler = OutlineAssembler::new(&config);
        assembler.scan_page(1, &lines(&["2.1. Methods"]), &candidates);
        let result = assembler.finish("doc");

        assert_eq!(result.outline.len(), 1);
        assert_eq!(result.outline[0].level, HeadingLevel::H2);
        assert_eq!(result.title, "doc");
    }

    #[test]
    fn test_repeated_numbered_line_on_same_page_is_deduplicated() {
        let result = scan(&["1. Introduction", "1. Introduction"]);
        assert_eq!(result.outline.len(), 1);
    }
}
