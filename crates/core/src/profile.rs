//! Document-wide font-size population and heading-tier selection.

use std::collections::HashMap;

use crate::types::Span;

/// Font sizes observed across a whole document.
#[derive(Debug, Clone, Default)]
pub struct FontProfile {
    /// `(font_size, span_count)` pairs sorted by descending size.
    pub size_histogram: Vec<(f32, usize)>,
}

/// The font sizes whose spans are treated as heading candidates.
///
/// Sizes are held in descending order; an empty tier means the document
/// produced no usable spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingTier {
    sizes: Vec<f32>,
}

impl FontProfile {
    /// Build the profile from every page's spans.
    ///
    /// Sizes are compared exactly; spans with a non-finite or non-positive size
    /// carry no typographic signal and are ignored.
    pub fn from_pages<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = &'a [Span]>,
    {
        let mut histogram: HashMap<u32, usize> = HashMap::new();

        for spans in pages {
            for span in spans {
                if !span.font_size.is_finite() || span.font_size <= 0.0 {
                    continue;
                }
                *histogram.entry(span.font_size.to_bits()).or_insert(0) += 1;
            }
        }

        let mut size_histogram: Vec<(f32, usize)> = histogram
            .into_iter()
            .map(|(bits, count)| (f32::from_bits(bits), count))
            .collect();
        size_histogram.sort_by(|a, b| b.0.total_cmp(&a.0));

        FontProfile { size_histogram }
    }

    pub fn is_empty(&self) -> bool {
        self.size_histogram.is_empty()
    }

    /// Select the `tiers` largest distinct sizes.
    pub fn heading_tier(&self, tiers: usize) -> HeadingTier {
        HeadingTier {
            sizes: self
                .size_histogram
                .iter()
                .take(tiers)
                .map(|(size, _)| *size)
                .collect(),
        }
    }
}

impl HeadingTier {
    pub fn contains(&self, size: f32) -> bool {
        self.sizes.iter().any(|s| *s == size)
    }

    pub fn largest(&self) -> Option<f32> {
        self.sizes.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
}
