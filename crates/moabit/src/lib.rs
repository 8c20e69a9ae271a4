//! Moabit - Hybrid Table Extraction Core for PDF Documents
//!
//! Moabit decides, per PDF page, whether a "stream" (whitespace-based) or
//! "lattice" (ruling-line-based) table-detection strategy yields the better
//! result, then cleans the winning table into a well-formed grid: ragged rows
//! padded, multi-value cells split into sibling rows, numeric-looking strings
//! coerced to numbers. It targets semi-structured business documents, notably
//! Japanese documents whose table cells carry several newline-separated
//! values.
//!
//! The raw PDF work — page decoding, geometry extraction, cell segmentation —
//! is supplied by an external engine behind the [`TableExtractor`] trait; this
//! crate owns the arbitration, scoring, and normalization on top of it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use moabit::{Document, DocumentProcessor, ExtractionConfig};
//! use std::sync::Arc;
//!
//! # struct MyEngine;
//! # #[async_trait::async_trait]
//! # impl moabit::TableExtractor for MyEngine {
//! #     fn name(&self) -> &str { "my-engine" }
//! #     async fn extract(&self, page: &moabit::Page, mode: moabit::TableMode)
//! #         -> moabit::Result<moabit::TableCandidate> {
//! #         Ok(moabit::TableCandidate::empty(mode, page.index))
//! #     }
//! # }
//! # fn main() -> moabit::Result<()> {
//! let engine = Arc::new(MyEngine);
//! let processor = DocumentProcessor::new(engine, ExtractionConfig::default())?;
//!
//! let document = Document::default(); // pages from your PDF engine
//! let result = processor.process_document_sync(&document);
//! println!("{} tables, {} chars of text", result.tables.len(), result.content.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`select`]: per-page stream/lattice arbitration with quality scoring
//! - [`score`]: candidate quality heuristics
//! - [`normalize`]: row padding, multi-value expansion, numeric coercion
//! - [`lines`]: vertical ruling-line analysis (the tie-break prior)
//! - [`text`]: full-document text concatenation
//! - [`pipeline`]: per-document orchestration with sync and batch wrappers

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod lines;
pub mod normalize;
pub mod pipeline;
pub mod score;
pub mod select;
pub mod text;
pub mod types;

pub use config::{ExtractionConfig, NumericLocale};
pub use error::{MoabitError, Result};
pub use extractor::TableExtractor;
pub use lines::count_vertical_lines;
pub use normalize::CellNormalizer;
pub use pipeline::DocumentProcessor;
pub use score::score_candidate;
pub use select::ModeSelector;
pub use text::extract_text;
pub use types::*;
