//! Span extraction and line grouping.
//!
//! ```text
//! content ops  ->  TextSpan[]  ->  TextLine[]  ->  PageText
//!   (per page)     extract         group_spans     spans + plain lines
//! ```
//!
//! Only the text-showing subset of the content-stream language and the CTM
//! operators (`q`, `Q`, `cm`) are interpreted; everything else is ignored.

use outline_core::Span;

use super::backend::{Operand, PageBackend, PageFont, PageId};
use crate::text::normalize_text;
use crate::PdfError;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A single run of text at a specific position on the page.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub font_size: f32,
    pub font_name: String,
    pub is_bold: bool,
}

impl TextSpan {
    fn same_style(&self, other: &TextSpan) -> bool {
        self.font_name == other.font_name
            && self.is_bold == other.is_bold
            && (self.font_size - other.font_size).abs() < FONT_SIZE_TOLERANCE
    }
}

/// Spans sharing (approximately) one baseline, left to right.
#[derive(Debug, Clone, Default)]
pub struct TextLine {
    pub spans: Vec<TextSpan>,
    pub y: f32,
}

impl TextLine {
    /// The line's plain text. Spans are separated by one space unless the
    /// boundary already carries whitespace or sits between spaceless-script
    /// characters.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let needs_space = match (out.chars().next_back(), span.text.chars().next()) {
                (Some(l), Some(f)) => {
                    !l.is_whitespace()
                        && !f.is_whitespace()
                        && !(is_spaceless_script_char(l) && is_spaceless_script_char(f))
                }
                _ => false,
            };
            if needs_space {
                out.push(' ');
            }
            out.push_str(&span.text);
        }
        out
    }
}

/// What the outline engine reads from one page.
#[derive(Debug, Clone, Default)]
pub struct PageText {
    pub spans: Vec<Span>,
    pub lines: Vec<String>,
}

impl PageText {
    pub fn from_lines(lines: &[TextLine]) -> Self {
        let spans = lines
            .iter()
            .flat_map(|line| &line.spans)
            .map(|s| Span::new(normalize_text(&s.text), s.font_size, s.is_bold))
            .collect();
        let lines = lines.iter().map(|l| normalize_text(&l.text())).collect();
        PageText { spans, lines }
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Two spans whose Y coordinates differ by less than this share a line.
const Y_TOLERANCE: f32 = 1.0;

/// Approximate glyph width as a fraction of the font size.
const APPROX_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Horizontal gap (points) below which same-style spans are glued together.
const MIN_WORD_GAP: f32 = 1.5;

/// Sizes closer than this are the same size for style comparison.
const FONT_SIZE_TOLERANCE: f32 = 0.01;

/// The identity 2x3 text matrix: [a, b, c, d, tx, ty].
const IDENTITY_MATRIX: [f32; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Returns `true` if `c` belongs to a script written without inter-word spaces.
pub fn is_spaceless_script_char(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF     // CJK Unified Ideographs
        | 0x3400..=0x4DBF   // Extension A
        | 0x20000..=0x2A6DF // Extension B
        | 0xF900..=0xFAFF   // Compatibility Ideographs
        | 0x3040..=0x30FF   // Hiragana, Katakana
        | 0x31F0..=0x31FF   // Katakana Phonetic Extensions
        | 0xAC00..=0xD7AF   // Hangul Syllables
        | 0x1100..=0x11FF   // Hangul Jamo
        | 0x3130..=0x318F   // Hangul Compatibility Jamo
        | 0x3000..=0x303F   // CJK Symbols and Punctuation
        | 0xFF00..=0xFFEF   // Fullwidth Forms
        | 0x0E00..=0x0EFF   // Thai, Lao
        | 0x1000..=0x109F   // Myanmar
        | 0x1780..=0x17FF   // Khmer
        | 0x0F00..=0x0FFF   // Tibetan
    )
}

// ---------------------------------------------------------------------------
// Internal: PDF text-state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct TextState {
    font: Option<PageFont>,
    font_name: String,
    font_size: f32,
    is_bold: bool,
    text_matrix: [f32; 6],
    line_matrix: [f32; 6],
    horiz_scale: f32,
    char_spacing: f32,
    word_spacing: f32,
    text_rise: f32,
    leading: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font: None,
            font_name: String::new(),
            font_size: 0.0,
            is_bold: false,
            text_matrix: IDENTITY_MATRIX,
            line_matrix: IDENTITY_MATRIX,
            horiz_scale: 1.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            text_rise: 0.0,
            leading: 0.0,
        }
    }
}

impl TextState {
    fn x(&self) -> f32 {
        self.text_matrix[4]
    }

    fn y(&self) -> f32 {
        self.text_matrix[5] + self.text_rise
    }

    /// Rendered size: `font_size * sqrt(b^2 + d^2)` of the text matrix.
    fn effective_font_size(&self) -> f32 {
        let scale = self.text_matrix[1].hypot(self.text_matrix[3]);
        (self.font_size * scale).abs()
    }

    fn char_width(&self) -> f32 {
        self.font_size * APPROX_CHAR_WIDTH_RATIO * self.horiz_scale
    }

    fn advance_x(&mut self, dx: f32) {
        self.text_matrix[4] += dx * self.text_matrix[0];
        self.text_matrix[5] += dx * self.text_matrix[1];
    }

    /// `Td`: translate the line matrix and reset the text matrix to it.
    fn translate_line(&mut self, tx: f32, ty: f32) {
        let m = self.line_matrix;
        self.line_matrix[4] = m[0] * tx + m[2] * ty + m[4];
        self.line_matrix[5] = m[1] * tx + m[3] * ty + m[5];
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        self.translate_line(0.0, -self.leading);
    }

    /// `Tf`: bold is inferred from the base-font name.
    fn set_font(&mut self, key: &[u8], fonts: &[PageFont], size: f32) {
        let font = fonts.iter().find(|f| f.key == key).cloned();
        let name = font
            .as_ref()
            .and_then(|f| f.base_font.clone())
            .unwrap_or_else(|| String::from_utf8_lossy(key).into_owned());

        self.is_bold = name.to_uppercase().contains("BOLD");
        self.font_name = name;
        self.font_size = size;
        self.font = font;
    }

    /// Move past `text` and return the width it covered.
    fn advance_after_show(&mut self, text: &str) -> f32 {
        let char_width = self.char_width();
        let dx: f32 = text
            .chars()
            .map(|ch| {
                let spacing = if ch == ' ' { self.word_spacing } else { 0.0 };
                char_width + self.char_spacing + spacing
            })
            .sum();
        self.advance_x(dx);
        dx
    }
}

/// `m` followed by `n`, both as `[a, b, c, d, e, f]` affine matrices.
fn multiply(m: [f32; 6], n: [f32; 6]) -> [f32; 6] {
    [
        m[0] * n[0] + m[1] * n[2],
        m[0] * n[1] + m[1] * n[3],
        m[2] * n[0] + m[3] * n[2],
        m[2] * n[1] + m[3] * n[3],
        m[4] * n[0] + m[5] * n[2] + n[4],
        m[4] * n[1] + m[5] * n[3] + n[5],
    ]
}

/// Walks one page's operators and accumulates spans.
///
/// Span geometry is reported in default user space: text-space positions are
/// mapped through the CTM (`cm`, saved and restored by `q`/`Q`).
struct SpanCollector<'a> {
    backend: &'a dyn PageBackend,
    fonts: Vec<PageFont>,
    state: TextState,
    ctm: [f32; 6],
    saved_ctm: Vec<[f32; 6]>,
    spans: Vec<TextSpan>,
}

impl<'a> SpanCollector<'a> {
    fn new(backend: &'a dyn PageBackend, fonts: Vec<PageFont>) -> Self {
        SpanCollector {
            backend,
            fonts,
            state: TextState::default(),
            ctm: IDENTITY_MATRIX,
            saved_ctm: Vec::new(),
            spans: Vec::new(),
        }
    }

    fn decode(&self, val: &Operand) -> String {
        match val {
            Operand::Str(bytes) => self.backend.decode_text(self.state.font.as_ref(), bytes),
            _ => String::new(),
        }
    }

    fn push_span(&mut self, text: String, x: f32, y: f32, width: f32) {
        if text.trim().is_empty() {
            return;
        }
        let [a, b, c, d, e, f] = self.ctm;
        self.spans.push(TextSpan {
            text,
            x: a * x + c * y + e,
            y: b * x + d * y + f,
            width: width * a.hypot(b),
            font_size: self.state.effective_font_size() * c.hypot(d),
            font_name: self.state.font_name.clone(),
            is_bold: self.state.is_bold,
        });
    }

    /// `Tj`, `'` and `"`.
    fn show(&mut self, operand: &Operand) {
        let text = self.decode(operand);
        if text.is_empty() {
            return;
        }
        let (x, y) = (self.state.x(), self.state.y());
        let width = self.state.advance_after_show(&text);
        self.push_span(text, x, y, width);
    }

    /// `TJ`: strings interleaved with kerning in thousandths of text space.
    /// A large negative kern reads as a word gap.
    fn show_array(&mut self, items: &[Operand]) {
        let mut buf = String::new();
        let (start_x, y) = (self.state.x(), self.state.y());

        for item in items {
            if let Operand::Str(_) = item {
                let fragment = self.decode(item);
                buf.push_str(&fragment);
                self.state.advance_after_show(&fragment);
            } else if let Some(adj) = item.as_number() {
                let dx = -adj / 1000.0 * self.state.font_size * self.state.horiz_scale;
                if dx > self.state.char_width() * 0.3 && !buf.is_empty() && !buf.ends_with(' ') {
                    buf.push(' ');
                }
                self.state.advance_x(dx);
            }
        }

        let width = self.state.x() - start_x;
        let text = buf.trim_end().to_string();
        self.push_span(text, start_x, y, width);
    }

    fn apply(&mut self, op: &str, operands: &[Operand]) {
        let num = |i: usize| operands.get(i).and_then(Operand::as_number);

        match op {
            "q" => self.saved_ctm.push(self.ctm),
            "Q" => {
                if let Some(ctm) = self.saved_ctm.pop() {
                    self.ctm = ctm;
                }
            }
            "cm" => {
                let vals: Vec<f32> = operands.iter().filter_map(Operand::as_number).collect();
                if let &[a, b, c, d, e, f, ..] = vals.as_slice() {
                    self.ctm = multiply([a, b, c, d, e, f], self.ctm);
                }
            }
            "BT" => {
                self.state.text_matrix = IDENTITY_MATRIX;
                self.state.line_matrix = IDENTITY_MATRIX;
            }
            "Tf" => {
                let key = match operands.first() {
                    Some(Operand::Name(n)) | Some(Operand::Str(n)) => n.clone(),
                    _ => return,
                };
                let size = num(1).unwrap_or(0.0);
                self.state.set_font(&key, &self.fonts, size);
            }
            "Tm" => {
                let vals: Vec<f32> = operands.iter().filter_map(Operand::as_number).collect();
                if let &[a, b, c, d, e, f, ..] = vals.as_slice() {
                    self.state.text_matrix = [a, b, c, d, e, f];
                    self.state.line_matrix = self.state.text_matrix;
                }
            }
            "Td" | "TD" => {
                if let (Some(tx), Some(ty)) = (num(0), num(1)) {
                    if op == "TD" {
                        self.state.leading = -ty;
                    }
                    self.state.translate_line(tx, ty);
                }
            }
            "T*" => self.state.next_line(),
            "TL" => self.state.leading = num(0).unwrap_or(self.state.leading),
            "Tc" => self.state.char_spacing = num(0).unwrap_or(self.state.char_spacing),
            "Tw" => self.state.word_spacing = num(0).unwrap_or(self.state.word_spacing),
            "Tz" => self.state.horiz_scale = num(0).map_or(self.state.horiz_scale, |v| v / 100.0),
            "Ts" => self.state.text_rise = num(0).unwrap_or(self.state.text_rise),
            "Tj" => {
                if let Some(first) = operands.first() {
                    self.show(first);
                }
            }
            "TJ" => {
                if let Some(Operand::Array(items)) = operands.first() {
                    self.show_array(items);
                }
            }
            "'" => {
                self.state.next_line();
                if let Some(first) = operands.first() {
                    self.show(first);
                }
            }
            "\"" => {
                if let [aw, ac, text, ..] = operands {
                    if let Some(aw) = aw.as_number() {
                        self.state.word_spacing = aw;
                    }
                    if let Some(ac) = ac.as_number() {
                        self.state.char_spacing = ac;
                    }
                    self.state.next_line();
                    self.show(text);
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Walk a single page's content stream and produce its [`TextSpan`]s in
/// stream order.
pub fn extract_page_spans(
    backend: &dyn PageBackend,
    page_id: PageId,
) -> Result<Vec<TextSpan>, PdfError> {
    let raw_content = backend.page_content(page_id)?;
    let ops = backend.parse_operations(&raw_content)?;
    let fonts = backend.page_fonts(page_id).unwrap_or_default();

    let mut collector = SpanCollector::new(backend, fonts);
    for op in &ops {
        collector.apply(&op.operator, &op.operands);
    }

    Ok(collector.spans)
}

/// Group spans into lines, top of the page first.
///
/// Spans within [`Y_TOLERANCE`] of a line's baseline join it; within a line,
/// adjacent same-style spans are merged into one run.
pub fn group_spans_into_lines(mut spans: Vec<TextSpan>) -> Vec<TextLine> {
    spans.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let mut lines: Vec<TextLine> = Vec::new();
    for span in spans {
        match lines.last_mut() {
            Some(line) if (line.y - span.y).abs() <= Y_TOLERANCE => line.spans.push(span),
            _ => lines.push(TextLine {
                y: span.y,
                spans: vec![span],
            }),
        }
    }

    lines.into_iter().map(merge_line).collect()
}

fn merge_line(mut line: TextLine) -> TextLine {
    line.spans.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut merged: Vec<TextSpan> = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        if let Some(prev) = merged.last_mut() {
            let gap = span.x - (prev.x + prev.width);
            if prev.same_style(&span) && gap > -prev.font_size && gap < prev.font_size * 2.0 {
                let spaceless = match (prev.text.chars().next_back(), span.text.chars().next()) {
                    (Some(l), Some(f)) => is_spaceless_script_char(l) && is_spaceless_script_char(f),
                    _ => false,
                };
                if gap >= MIN_WORD_GAP && !spaceless && !prev.text.ends_with(' ') {
                    prev.text.push(' ');
                }
                prev.text.push_str(&span.text);
                prev.width = (span.x + span.width) - prev.x;
                continue;
            }
        }
        merged.push(span);
    }

    TextLine {
        spans: merged,
        y: line.y,
    }
}

/// Extract one page as [`PageText`].
///
/// A page whose content cannot be decoded is logged and comes back empty.
pub fn extract_page_text(backend: &dyn PageBackend, page_id: PageId) -> PageText {
    match extract_page_spans(backend, page_id) {
        Ok(spans) => PageText::from_lines(&group_spans_into_lines(spans)),
        Err(e) => {
            log::warn!("skipping text of page object {:?}: {}", page_id, e);
            PageText::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::backend::{decode_text_simple, TextOp};

    /// Backend serving a fixed operator list for page (1, 0).
    struct ScriptedBackend {
        ops: Vec<TextOp>,
        fonts: Vec<PageFont>,
    }

    impl PageBackend for ScriptedBackend {
        fn page_fonts(&self, _page: PageId) -> Result<Vec<PageFont>, PdfError> {
            Ok(self.fonts.clone())
        }

        fn page_content(&self, _page: PageId) -> Result<Vec<u8>, PdfError> {
            Ok(Vec::new())
        }

        fn parse_operations(&self, _content: &[u8]) -> Result<Vec<TextOp>, PdfError> {
            Ok(self.ops.clone())
        }

        fn decode_text(&self, _font: Option<&PageFont>, bytes: &[u8]) -> String {
            decode_text_simple(bytes)
        }
    }

    fn font(key: &str, base: &str) -> PageFont {
        PageFont {
            key: key.as_bytes().to_vec(),
            base_font: Some(base.to_string()),
            encoding: None,
        }
    }

    fn op(operator: &str, operands: Vec<Operand>) -> TextOp {
        TextOp {
            operator: operator.to_string(),
            operands,
        }
    }

    fn name(n: &str) -> Operand {
        Operand::Name(n.as_bytes().to_vec())
    }

    fn s(text: &str) -> Operand {
        Operand::Str(text.as_bytes().to_vec())
    }

    fn n(v: f32) -> Operand {
        Operand::Number(v)
    }

    fn span(text: &str, x: f32, y: f32, size: f32) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            x,
            y,
            width: text.chars().count() as f32 * size * APPROX_CHAR_WIDTH_RATIO,
            font_size: size,
            font_name: "Helvetica".to_string(),
            is_bold: false,
        }
    }

    fn scripted(ops: Vec<TextOp>) -> ScriptedBackend {
        ScriptedBackend {
            ops,
            fonts: vec![font("F1", "Helvetica"), font("F2", "Helvetica-Bold")],
        }
    }

    #[test]
    fn test_tj_records_font_and_position() {
        let backend = scripted(vec![
            op("BT", vec![]),
            op("Tf", vec![name("F2"), n(24.0)]),
            op("Td", vec![n(72.0), n(700.0)]),
            op("Tj", vec![s("EXECUTIVE SUMMARY")]),
            op("ET", vec![]),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "EXECUTIVE SUMMARY");
        assert_eq!(spans[0].font_size, 24.0);
        assert_eq!(spans[0].x, 72.0);
        assert_eq!(spans[0].y, 700.0);
        assert!(spans[0].is_bold);
    }

    #[test]
    fn test_tm_scale_affects_effective_size() {
        let backend = scripted(vec![
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(1.0)]),
            op("Tm", vec![n(12.0), n(0.0), n(0.0), n(12.0), n(50.0), n(500.0)]),
            op("Tj", vec![s("Scaled text")]),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!(spans[0].font_size, 12.0);
        assert!(!spans[0].is_bold);
    }

    #[test]
    fn test_tj_array_inserts_word_gaps() {
        let backend = scripted(vec![
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op(
                "TJ",
                vec![Operand::Array(vec![
                    s("Table"),
                    Operand::Number(-300.0),
                    s("of"),
                    Operand::Number(-20.0),
                    s("Contents"),
                ])],
            ),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!(spans[0].text, "Table ofContents");
    }

    #[test]
    fn test_flipped_ctm_keeps_reading_order() {
        let backend = scripted(vec![
            op("q", vec![]),
            op("cm", vec![n(1.0), n(0.0), n(0.0), n(-1.0), n(0.0), n(792.0)]),
            op("BT", vec![]),
            op("Tf", vec![name("F2"), n(18.0)]),
            op("Tm", vec![n(1.0), n(0.0), n(0.0), n(-1.0), n(72.0), n(100.0)]),
            op("Tj", vec![s("Overview")]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op("Tm", vec![n(1.0), n(0.0), n(0.0), n(-1.0), n(72.0), n(700.0)]),
            op("Tj", vec![s("Footer")]),
            op("ET", vec![]),
            op("Q", vec![]),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!(spans[0].y, 692.0);
        assert_eq!(spans[0].font_size, 18.0);
        assert_eq!(spans[1].y, 92.0);

        let lines = group_spans_into_lines(spans);
        assert_eq!(lines[0].text(), "Overview");
        assert_eq!(lines[1].text(), "Footer");
    }

    #[test]
    fn test_ctm_scale_is_restored_by_q() {
        let backend = scripted(vec![
            op("q", vec![]),
            op("cm", vec![n(2.0), n(0.0), n(0.0), n(2.0), n(0.0), n(0.0)]),
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op("Td", vec![n(10.0), n(300.0)]),
            op("Tj", vec![s("Scaled")]),
            op("ET", vec![]),
            op("Q", vec![]),
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op("Td", vec![n(10.0), n(300.0)]),
            op("Tj", vec![s("Plain")]),
            op("ET", vec![]),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!((spans[0].x, spans[0].y, spans[0].font_size), (20.0, 600.0, 20.0));
        assert_eq!((spans[1].x, spans[1].y, spans[1].font_size), (10.0, 300.0, 10.0));
    }

    #[test]
    fn test_tstar_moves_by_leading() {
        let backend = scripted(vec![
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op("TD", vec![n(72.0), n(-14.0)]),
            op("Tj", vec![s("first")]),
            op("T*", vec![]),
            op("Tj", vec![s("second")]),
        ]);

        let spans = extract_page_spans(&backend, (1, 0)).unwrap();
        assert_eq!(spans[0].y, -14.0);
        assert_eq!(spans[1].y, -28.0);
        assert_eq!(spans[1].x, 72.0);
    }

    #[test]
    fn test_whitespace_only_strings_are_dropped() {
        let backend = scripted(vec![
            op("BT", vec![]),
            op("Tf", vec![name("F1"), n(10.0)]),
            op("Tj", vec![s("   ")]),
        ]);
        assert!(extract_page_spans(&backend, (1, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_group_spans_orders_lines_top_down() {
        let spans = vec![
            span("Body line", 72.0, 600.0, 10.0),
            span("Heading", 72.0, 700.0, 18.0),
            span("more", 200.0, 600.4, 10.0),
        ];

        let lines = group_spans_into_lines(spans);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Heading");
        assert_eq!(lines[1].text(), "Body line more");
    }

    #[test]
    fn test_adjacent_same_style_spans_merge() {
        // "1." ends at x = 72 + 2 * 5 = 82.
        let spans = vec![
            span("1.", 72.0, 500.0, 10.0),
            span("Introduction", 85.0, 500.0, 10.0),
        ];

        let lines = group_spans_into_lines(spans);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].text(), "1. Introduction");
    }

    #[test]
    fn test_different_styles_stay_separate_spans() {
        let mut bold = span("2.", 72.0, 500.0, 10.0);
        bold.is_bold = true;
        let lines = group_spans_into_lines(vec![bold, span("Scope", 90.0, 500.0, 10.0)]);

        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].text(), "2. Scope");
    }

    #[test]
    fn test_cjk_spans_join_without_space() {
        let line = TextLine {
            spans: vec![span("日本", 0.0, 0.0, 10.0), span("語", 40.0, 0.0, 12.0)],
            y: 0.0,
        };
        assert_eq!(line.text(), "日本語");
    }

    #[test]
    fn test_page_text_normalizes_ligatures() {
        let lines = group_spans_into_lines(vec![span("\u{FB01}nal report", 72.0, 700.0, 12.0)]);
        let page = PageText::from_lines(&lines);
        assert_eq!(page.lines, vec!["final report".to_string()]);
        assert_eq!(page.spans[0].text, "final report");
        assert_eq!(page.spans[0].font_size, 12.0);
    }
}
