use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contiguous run of text sharing one style on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub font_size: f32,
    pub is_bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, font_size: f32, is_bold: bool) -> Self {
        Span {
            text: text.into(),
            font_size,
            is_bold,
        }
    }
}

/// Heading depth, rendered as `H<n>` in the output.
///
/// The heuristic engine only produces `H1`..`H3`; native outlines keep whatever
/// depth the document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HeadingLevel(u32);

impl HeadingLevel {
    pub const H1: Self = HeadingLevel(1);
    pub const H2: Self = HeadingLevel(2);
    pub const H3: Self = HeadingLevel(3);

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value >= 1 {
            Ok(HeadingLevel(value))
        } else {
            Err(InvalidHeadingLevel(value.to_string()))
        }
    }
}

impl TryFrom<String> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix('H')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| InvalidHeadingLevel(value.clone()))
            .and_then(HeadingLevel::try_from)
    }
}

impl From<HeadingLevel> for String {
    fn from(level: HeadingLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

/// One row of the extracted outline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
}

/// The title and outline produced for a single document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub title: String,
    pub outline: Vec<OutlineEntry>,
}

/// An entry of a document's embedded navigation tree, as reported by the reader.
///
/// `depth` is 1-based. A destination that could not be resolved carries page `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOutlineItem {
    pub depth: u32,
    pub text: String,
    pub page: u32,
}

#[derive(Debug, Error)]
#[error("Invalid heading level '{0}' (expected 'H<n>' with n >= 1)")]
pub struct InvalidHeadingLevel(String);
