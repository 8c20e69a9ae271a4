use serde::{Deserialize, Serialize};
use std::fmt;

/// Table-detection strategy for a single extraction attempt.
///
/// `Stream` relies on text-position/whitespace heuristics and needs no visible
/// ruling lines; `Lattice` uses detected ruling lines (borders) to delimit
/// cells. Which strategy wins for a page is decided by
/// [`ModeSelector`](crate::select::ModeSelector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    Stream,
    Lattice,
}

impl TableMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableMode::Stream => "stream",
            TableMode::Lattice => "lattice",
        }
    }
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A straight line segment on a page, in PDF units (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl LineSegment {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// One decoded PDF page as supplied by the upstream PDF-analysis engine.
///
/// The core does not parse raw PDF bytes; line geometry and text arrive
/// already decoded. `text: None` means the page's text could not be decoded
/// upstream — that page contributes an empty string to the document text
/// rather than failing extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,

    /// Line geometry detected on the page.
    #[serde(default)]
    pub lines: Vec<LineSegment>,

    /// Decoded page text, if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            lines: Vec::new(),
            text: None,
        }
    }
}

/// A decoded PDF document: pages in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

/// A candidate table extraction for one page under one mode.
///
/// Rows may be ragged at this stage; normalization pads them to the modal
/// column count. A candidate with zero rows is a valid "no table found"
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCandidate {
    /// Raw cell strings, rows × columns.
    pub rows: Vec<Vec<String>>,

    /// The detection strategy that produced this candidate.
    pub mode: TableMode,

    /// Zero-based index of the originating page.
    pub page_index: usize,

    /// Quality score, unset until the candidate has been scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl TableCandidate {
    pub fn new(mode: TableMode, page_index: usize, rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            mode,
            page_index,
            score: None,
        }
    }

    /// The canonical "no table on this page" candidate.
    pub fn empty(mode: TableMode, page_index: usize) -> Self {
        Self::new(mode, page_index, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A normalized cell value: text, or a number after successful coercion.
///
/// Serializes untagged, so numbers appear as JSON numbers and text as JSON
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// The cleaned form of a winning [`TableCandidate`].
///
/// The row count may exceed the candidate's: multi-value cells are expanded
/// into sibling rows during normalization. All rows have equal column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    /// Normalized cells, rows × columns.
    pub rows: Vec<Vec<CellValue>>,

    /// Mode of the winning candidate this table was derived from.
    pub mode: TableMode,

    /// Zero-based index of the originating page.
    pub page_index: usize,
}

impl NormalizedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Per-document extraction aggregate handed to the export layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Full document text with page-boundary markers.
    pub content: String,

    /// One normalized table per page that contained a table, in page order.
    /// Pages without a table are excluded.
    pub tables: Vec<NormalizedTable>,
}
