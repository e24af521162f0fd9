//! Tunable thresholds of the heuristic engine.

/// Minimum trimmed length, in characters, of any heading text.
pub const DEFAULT_MIN_HEADING_CHARS: usize = 5;

/// An all-caps span counts as heading-like only when strictly longer than this.
pub const DEFAULT_ALL_CAPS_MIN_CHARS: usize = 3;

/// Number of distinct font sizes, counted from the largest, that form the
/// heading-candidate tier.
pub const DEFAULT_HEADING_TIERS: usize = 1;

/// Maximum number of `digit.` groups a numeric prefix may have.
pub const DEFAULT_MAX_PREFIX_GROUPS: usize = 3;

/// Upper bound on `max_prefix_groups`; larger values are clamped.
pub const MAX_PREFIX_GROUPS_LIMIT: usize = 9;

/// Heading levels the numeric-prefix rule can assign (`H1`..`H3`).
pub const NUMBERED_HEADING_LEVELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicConfig {
    pub min_heading_chars: usize,
    pub all_caps_min_chars: usize,
    pub heading_tiers: usize,
    pub max_prefix_groups: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            min_heading_chars: DEFAULT_MIN_HEADING_CHARS,
            all_caps_min_chars: DEFAULT_ALL_CAPS_MIN_CHARS,
            heading_tiers: DEFAULT_HEADING_TIERS,
            max_prefix_groups: DEFAULT_MAX_PREFIX_GROUPS,
        }
    }
}
