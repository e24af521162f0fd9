use std::collections::HashSet;

use crate::config::HeuristicConfig;
use crate::profile::HeadingTier;
use crate::types::Span;

/// Distinct span texts on one page that look like headings typographically.
#[derive(Debug, Clone, Default)]
pub struct HeadingCandidates {
    texts: HashSet<String>,
}

impl HeadingCandidates {
    /// Scan a page's spans against the document's heading tier.
    pub fn collect(spans: &[Span], tier: &HeadingTier, config: &HeuristicConfig) -> Self {
        let texts = spans
            .iter()
            .filter(|span| is_heading_span(span, tier, config))
            .map(|span| span.text.trim().to_string())
            .collect();

        HeadingCandidates { texts }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

fn is_heading_span(span: &Span, tier: &HeadingTier, config: &HeuristicConfig) -> bool {
    let text = span.text.trim();
    if text.chars().count() < config.min_heading_chars || !tier.contains(span.font_size) {
        return false;
    }

    span.is_bold
        || is_all_caps(text, config.all_caps_min_chars)
        || tier.largest() == Some(span.font_size)
}

/// Upper-case with at least one cased character, and longer than `min_chars`.
pub fn is_all_caps(text: &str, min_chars: usize) -> bool {
    text.chars().count() > min_chars
        && text.chars().any(char::is_uppercase)
        && !text.chars().any(char::is_lowercase)
}
