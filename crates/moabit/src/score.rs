//! Candidate quality scoring.
//!
//! Produces a scalar estimate of how well a candidate resembles a well-formed
//! table, used to arbitrate between the stream and lattice results for a
//! page. The score combines three signals:
//!
//! - non-empty row count (dominant; zero non-empty rows scores 0.0)
//! - column-count consistency: the fraction of rows matching the modal
//!   column count
//! - cell fill ratio: the fraction of non-empty cells in the grid
//!
//! The consistency and fill factors are mapped into (0.5, 1.0], which keeps
//! the ordering guarantees: a candidate with strictly more non-empty rows at
//! equal consistency and fill always scores strictly higher, and any
//! candidate with at least one non-empty row scores strictly above an empty
//! one.

use crate::types::TableCandidate;

/// Score a candidate table extraction.
///
/// Returns 0.0 for a candidate with no non-empty rows; otherwise a positive
/// value that grows with row count, column consistency, and cell fill.
pub fn score_candidate(candidate: &TableCandidate) -> f64 {
    let non_empty_rows = candidate
        .rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .count();

    if non_empty_rows == 0 {
        return 0.0;
    }

    let modal = modal_column_count(&candidate.rows);
    let consistent_rows = candidate.rows.iter().filter(|row| row.len() == modal).count();
    let consistency = consistent_rows as f64 / candidate.rows.len() as f64;

    let total_cells: usize = candidate.rows.iter().map(Vec::len).sum();
    let filled_cells = candidate
        .rows
        .iter()
        .flatten()
        .filter(|cell| !cell.trim().is_empty())
        .count();
    let fill = if total_cells == 0 {
        0.0
    } else {
        filled_cells as f64 / total_cells as f64
    };

    non_empty_rows as f64 * (0.5 + 0.5 * consistency) * (0.5 + 0.5 * fill)
}

/// The most frequent per-row cell count in a grid.
///
/// Ties break toward the wider count, so padding never truncates data.
/// Returns 0 for an empty grid.
pub(crate) fn modal_column_count(rows: &[Vec<String>]) -> usize {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(width, _)| *width == row.len()) {
            Some((_, frequency)) => *frequency += 1,
            None => counts.push((row.len(), 1)),
        }
    }
    counts
        .into_iter()
        .max_by_key(|&(width, frequency)| (frequency, width))
        .map_or(0, |(width, _)| width)
}
