//! Per-page stream/lattice mode arbitration.
//!
//! For each page, both detection strategies run and the candidate with the
//! higher quality score wins. The vertical-line count serves as a prior for
//! the tie case: ruled borders are structural evidence for lattice even when
//! the scores cannot separate the candidates.

use crate::config::ExtractionConfig;
use crate::extractor::TableExtractor;
use crate::lines::count_vertical_lines;
use crate::score::score_candidate;
use crate::types::{Page, TableCandidate, TableMode};
use std::sync::Arc;

/// Picks the better of the stream and lattice extractions for a page.
pub struct ModeSelector {
    extractor: Arc<dyn TableExtractor>,
    config: ExtractionConfig,
}

impl ModeSelector {
    pub fn new(extractor: Arc<dyn TableExtractor>, config: ExtractionConfig) -> Self {
        Self { extractor, config }
    }

    /// Select the winning table candidate for one page.
    ///
    /// Never fails: an extraction error from either mode is recovered as an
    /// empty candidate for that mode. When both modes yield zero rows the
    /// canonical empty stream candidate is returned — callers treat it as
    /// "no table on this page", not as an error.
    ///
    /// The two extraction calls are independent and run concurrently; both
    /// complete before scoring, since both scores are needed for the
    /// comparison.
    pub async fn select_best_table(&self, page: &Page) -> TableCandidate {
        let line_count = count_vertical_lines(page, self.config.line_merge_tolerance);

        let (stream, lattice) = tokio::join!(
            self.extractor.extract(page, TableMode::Stream),
            self.extractor.extract(page, TableMode::Lattice),
        );
        let mut stream = self.recover(stream, TableMode::Stream, page.index);
        let mut lattice = self.recover(lattice, TableMode::Lattice, page.index);

        if stream.is_empty() && lattice.is_empty() {
            tracing::debug!(page = page.index, "no table detected in either mode");
            return TableCandidate::empty(TableMode::Stream, page.index);
        }

        let stream_score = score_candidate(&stream);
        let lattice_score = score_candidate(&lattice);
        stream.score = Some(stream_score);
        lattice.score = Some(lattice_score);

        let winner = if lattice_score > stream_score {
            lattice
        } else if stream_score > lattice_score {
            stream
        } else if line_count > self.config.line_count_threshold {
            // Equal scores: the ruling lines tip the balance toward lattice.
            lattice
        } else {
            stream
        };

        tracing::debug!(
            page = page.index,
            mode = %winner.mode,
            line_count,
            stream_score,
            lattice_score,
            "selected table candidate"
        );
        winner
    }

    fn recover(
        &self,
        result: crate::error::Result<TableCandidate>,
        mode: TableMode,
        page_index: usize,
    ) -> TableCandidate {
        match result {
            Ok(candidate) => candidate,
            Err(error) => {
                tracing::warn!(
                    extractor = self.extractor.name(),
                    page = page_index,
                    mode = %mode,
                    %error,
                    "extraction failed, treating mode as empty candidate"
                );
                TableCandidate::empty(mode, page_index)
            }
        }
    }
}
