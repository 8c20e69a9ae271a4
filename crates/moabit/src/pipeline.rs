//! Document processing orchestration.
//!
//! Drives the per-document flow: select the best table candidate for each
//! page, normalize the winners, and aggregate them with the full document
//! text into an [`ExtractionResult`]. No per-page failure is fatal — a page
//! that yields nothing is skipped, and processing continues.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractor::TableExtractor;
use crate::normalize::CellNormalizer;
use crate::select::ModeSelector;
use crate::text::extract_text;
use crate::types::{Document, ExtractionResult};
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create global Tokio runtime - system may be out of resources")
});

/// Per-document extraction driver.
///
/// Owns the mode selector and normalizer; construction validates the
/// configuration and compiles the locale patterns once. Each call processes
/// its own document graph exclusively — the processor holds no per-request
/// state and may be shared across threads.
pub struct DocumentProcessor {
    selector: ModeSelector,
    normalizer: CellNormalizer,
    config: ExtractionConfig,
}

impl DocumentProcessor {
    /// Create a processor around an extraction engine.
    ///
    /// # Errors
    ///
    /// Returns `MoabitError::Validation` if the configuration is invalid.
    pub fn new(extractor: Arc<dyn TableExtractor>, config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: ModeSelector::new(extractor, config.clone()),
            normalizer: CellNormalizer::new(&config),
            config,
        })
    }

    /// Process one document: tables per page plus full text.
    ///
    /// Pages without a table are excluded from the result rather than
    /// represented as empty tables. Never fails: extraction errors degrade
    /// the affected page's contribution and processing continues.
    pub async fn process_document(&self, document: &Document) -> ExtractionResult {
        let mut tables = Vec::new();

        for page in &document.pages {
            let candidate = self.selector.select_best_table(page).await;
            if candidate.is_empty() {
                tracing::debug!(page = page.index, "skipping page without table");
                continue;
            }
            tables.push(self.normalizer.normalize(&candidate));
        }

        let content = extract_text(document, &self.config.page_marker_format);
        ExtractionResult { content, tables }
    }

    /// Process multiple documents sequentially, preserving input order.
    ///
    /// Documents are independent: a document that yields nothing produces an
    /// empty result in its slot, never an error.
    pub async fn process_batch(&self, documents: &[Document]) -> Vec<ExtractionResult> {
        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            results.push(self.process_document(document).await);
        }
        results
    }

    /// Synchronous wrapper for [`process_document`](Self::process_document).
    ///
    /// Blocks on a shared global Tokio runtime rather than creating a
    /// runtime per call. For async code, use `process_document` directly.
    pub fn process_document_sync(&self, document: &Document) -> ExtractionResult {
        GLOBAL_RUNTIME.block_on(self.process_document(document))
    }

    /// Synchronous wrapper for [`process_batch`](Self::process_batch).
    pub fn process_batch_sync(&self, documents: &[Document]) -> Vec<ExtractionResult> {
        GLOBAL_RUNTIME.block_on(self.process_batch(documents))
    }
}
