//! The slice of lopdf that span extraction reads through.

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object};

use crate::PdfError;

/// `lopdf::ObjectId` of a page object.
pub type PageId = (u32, u16);

/// One entry of a page's `/Resources /Font` dictionary.
#[derive(Debug, Clone)]
pub struct PageFont {
    /// Resource key selected by `Tf`, e.g. `F1`.
    pub key: Vec<u8>,
    pub base_font: Option<String>,
    pub encoding: Option<String>,
}

impl PageFont {
    /// Two-byte CID encodings (`Identity-H`, `Identity-V`).
    fn is_identity(&self) -> bool {
        self.encoding
            .as_deref()
            .is_some_and(|enc| enc.starts_with("Identity"))
    }
}

/// A content-stream operand, reduced to what the text operators consume.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<Operand>),
    Other,
}

impl Operand {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Operand::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&Object> for Operand {
    fn from(obj: &Object) -> Self {
        match obj {
            Object::Integer(i) => Operand::Number(*i as f32),
            Object::Real(r) => Operand::Number(*r),
            Object::Name(n) => Operand::Name(n.clone()),
            Object::String(s, _) => Operand::Str(s.clone()),
            Object::Array(items) => Operand::Array(items.iter().map(Operand::from).collect()),
            _ => Operand::Other,
        }
    }
}

/// An operator with its operands, in stream order.
#[derive(Debug, Clone)]
pub struct TextOp {
    pub operator: String,
    pub operands: Vec<Operand>,
}

/// Decode a PDF text string: UTF-16BE when it starts with a BOM, otherwise
/// UTF-8, otherwise Latin-1.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(payload) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16_be(payload);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

fn decode_utf16_be(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Page access needed by the text-state machine in [`super::layout`].
pub trait PageBackend {
    fn page_fonts(&self, page: PageId) -> Result<Vec<PageFont>, PdfError>;

    /// Decompressed, concatenated content streams of the page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>, PdfError>;

    fn parse_operations(&self, content: &[u8]) -> Result<Vec<TextOp>, PdfError>;

    /// Turn the bytes of a `Tj`/`TJ` string into text for the current font.
    fn decode_text(&self, font: Option<&PageFont>, bytes: &[u8]) -> String;
}

/// [`PageBackend`] over a parsed [`lopdf::Document`].
pub struct LopdfBackend {
    doc: Document,
}

impl LopdfBackend {
    pub fn load_bytes(data: &[u8]) -> Result<Self, PdfError> {
        let doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    /// Encrypted documents are refused.
    pub fn from_document(doc: Document) -> Result<Self, PdfError> {
        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        Ok(LopdfBackend { doc })
    }

    pub fn raw_doc(&self) -> &Document {
        &self.doc
    }

    /// `/Title` of the trailer's `/Info` dictionary.
    pub fn metadata_title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info = match info.as_reference() {
            Ok(id) => self.doc.get_object(id).ok()?,
            Err(_) => info,
        };

        match info.as_dict().ok()?.get(b"Title").ok()? {
            Object::String(bytes, _) => Some(decode_text_simple(bytes)),
            Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

impl PageBackend for LopdfBackend {
    fn page_fonts(&self, page: PageId) -> Result<Vec<PageFont>, PdfError> {
        let fonts = self
            .doc
            .get_page_fonts(page)
            .map_err(|e| PdfError::Parse(format!("page fonts of {:?}: {}", page, e)))?;

        Ok(fonts
            .into_iter()
            .map(|(key, dict)| PageFont {
                key,
                base_font: name_entry(dict, b"BaseFont"),
                encoding: name_entry(dict, b"Encoding"),
            })
            .collect())
    }

    fn page_content(&self, page: PageId) -> Result<Vec<u8>, PdfError> {
        self.doc
            .get_page_content(page)
            .map_err(|e| PdfError::Parse(format!("page content of {:?}: {}", page, e)))
    }

    fn parse_operations(&self, content: &[u8]) -> Result<Vec<TextOp>, PdfError> {
        let content =
            Content::decode(content).map_err(|e| PdfError::Parse(format!("content stream: {}", e)))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| TextOp {
                operands: op.operands.iter().map(Operand::from).collect(),
                operator: op.operator,
            })
            .collect())
    }

    fn decode_text(&self, font: Option<&PageFont>, bytes: &[u8]) -> String {
        let two_byte = font.is_some_and(PageFont::is_identity);
        if two_byte && !bytes.is_empty() && bytes.len() % 2 == 0 {
            let text = decode_utf16_be(bytes);
            if text.chars().any(|c| c != '\u{FFFD}' && c != '\0') {
                return text;
            }
        }

        decode_text_simple(bytes)
    }
}

fn name_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let name = dict.get(key).ok()?.as_name().ok()?;
    Some(String::from_utf8_lossy(name).into_owned())
}
