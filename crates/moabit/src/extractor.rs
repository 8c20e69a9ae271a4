//! External table-extraction capability boundary.
//!
//! The raw geometry work of finding table cells on a page is supplied by an
//! external PDF engine. This trait keeps that engine behind a seam so it can
//! be swapped without touching mode selection or scoring.

use crate::error::Result;
use crate::types::{Page, TableCandidate, TableMode};
use async_trait::async_trait;

/// A table-extraction engine, polymorphic over the stream and lattice
/// strategies.
///
/// # Contract
///
/// - A candidate with zero rows is a valid "no table found" result, not an
///   error.
/// - Engine timeouts or parse failures surface as
///   [`MoabitError::TableExtraction`](crate::MoabitError::TableExtraction);
///   [`ModeSelector`](crate::select::ModeSelector) recovers them as empty
///   candidates instead of aborting the page. The engine is expected to
///   enforce its own timeout — no call here blocks indefinitely.
/// - `extract` has no side effects, so the two per-page calls (stream,
///   lattice) may run concurrently.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use moabit::{Page, Result, TableCandidate, TableExtractor, TableMode};
///
/// struct FixtureEngine;
///
/// #[async_trait]
/// impl TableExtractor for FixtureEngine {
///     fn name(&self) -> &str {
///         "fixture"
///     }
///
///     async fn extract(&self, page: &Page, mode: TableMode) -> Result<TableCandidate> {
///         Ok(TableCandidate::empty(mode, page.index))
///     }
/// }
/// ```
#[async_trait]
pub trait TableExtractor: Send + Sync {
    /// Engine name, used in logs when a mode fails and is recovered.
    fn name(&self) -> &str;

    /// Extract a candidate table from one page under one mode.
    ///
    /// # Errors
    ///
    /// - `MoabitError::TableExtraction` - the engine failed or timed out
    /// - `MoabitError::PageDecode` - the page's geometry could not be read
    ///
    /// Both are recovered by the mode selector as empty candidates.
    async fn extract(&self, page: &Page, mode: TableMode) -> Result<TableCandidate>;
}
