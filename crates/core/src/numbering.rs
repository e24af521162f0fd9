//! Numeric-prefix heading conventions ("1.", "1.2.", "1.2.3.").

use regex::Regex;

use crate::config::{MAX_PREFIX_GROUPS_LIMIT, NUMBERED_HEADING_LEVELS};
use crate::types::HeadingLevel;

/// Compiled prefix patterns for a given maximum number of `digit.` groups.
#[derive(Debug, Clone)]
pub struct NumberingRules {
    bare: Regex,
    inline: Regex,
}

impl NumberingRules {
    /// `max_groups` is clamped to `1..=MAX_PREFIX_GROUPS_LIMIT`, which keeps
    /// both patterns well inside the regex size limit.
    pub fn new(max_groups: usize) -> Self {
        let groups = max_groups.clamp(1, MAX_PREFIX_GROUPS_LIMIT);
        let bare = Regex::new(&format!(r"^((?:\d+\.){{1,{groups}}})$")).unwrap();
        let inline = Regex::new(&format!(r"^((?:\d+\.){{1,{groups}}})\s+(.+)")).unwrap();
        NumberingRules { bare, inline }
    }

    /// Match a line that holds nothing but a numeric prefix, returning the prefix.
    pub fn match_bare<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.bare
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Match `<prefix> <title>` on one line, returning `(prefix, title)`.
    pub fn match_inline<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.inline.captures(line)?;
        let prefix = caps.get(1)?.as_str();
        let title = caps.get(2)?.as_str();
        Some((prefix, title))
    }
}

/// Number of `digit.` groups in a prefix such as `"1.2."`.
pub fn prefix_groups(prefix: &str) -> usize {
    prefix.matches('.').count()
}

/// Heading level implied by a prefix, or `None` past the deepest defined level.
pub fn level_for_prefix(prefix: &str) -> Option<HeadingLevel> {
    match prefix_groups(prefix) {
        n @ 1..=NUMBERED_HEADING_LEVELS => HeadingLevel::try_from(n as u32).ok(),
        _ => None,
    }
}

/// `"<prefix> <title>"` with both parts trimmed and a single space between.
pub fn numbered_heading_text(prefix: &str, title: &str) -> String {
    format!("{} {}", prefix.trim(), title.trim())
}
