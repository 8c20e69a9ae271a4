//! Cell normalization: row padding, multi-value expansion, numeric coercion.
//!
//! The winning candidate for a page is cleaned in three steps:
//!
//! 1. Rows are right-padded with empty strings to a uniform width: the
//!    modal column count, or the widest row when a minority row exceeds the
//!    mode.
//! 2. Multi-value cells are split on the embedded carriage-return separator
//!    common in Japanese business-document cells, and the row is replicated
//!    so each sub-value lands on its own row.
//! 3. Numeric-looking strings are coerced to numbers under the configured
//!    locale profile; anything ambiguous or malformed stays a string.
//!
//! Normalization is mode-agnostic: the same rules apply whether the winning
//! candidate came from stream or lattice detection.

use crate::config::{ExtractionConfig, NumericLocale};
use crate::score::modal_column_count;
use crate::types::{CellValue, NormalizedTable, TableCandidate};
use regex::Regex;

/// Separator embedded in multi-value cells.
const VALUE_SEPARATOR: char = '\r';

/// Normalizes winning table candidates.
///
/// Locale patterns are compiled once at construction; the normalizer is
/// read-only afterwards and safe to share across pages.
pub struct CellNormalizer {
    numeric_pattern: Regex,
    group_separator: char,
    decimal_separator: char,
}

impl CellNormalizer {
    pub fn new(config: &ExtractionConfig) -> Self {
        // Optional leading currency marker, optional sign, digits with
        // optional grouping, optional decimal part, optional trailing
        // percent. Full-match only: partial numeric content stays text.
        match config.numeric_locale {
            NumericLocale::CommaGrouping => Self {
                numeric_pattern: Regex::new(r"^[¥$€]?[+-]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?%?$")
                    .expect("comma-grouping numeric pattern is valid"),
                group_separator: ',',
                decimal_separator: '.',
            },
            NumericLocale::PeriodGrouping => Self {
                numeric_pattern: Regex::new(r"^[¥$€]?[+-]?(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d+)?%?$")
                    .expect("period-grouping numeric pattern is valid"),
                group_separator: '.',
                decimal_separator: ',',
            },
        }
    }

    /// Normalize a winning candidate into its final tabular form.
    ///
    /// A row containing multi-value cells expands into as many rows as the
    /// largest split count among its cells; cells with fewer sub-values are
    /// padded with empty strings, and non-splitting cells contribute their
    /// value on the first expanded row only. Expanded rows are independent
    /// copies.
    ///
    /// Idempotent: normalizing the string rendering of an already-normalized
    /// table yields the same table.
    pub fn normalize(&self, candidate: &TableCandidate) -> NormalizedTable {
        // Every emitted row must have identical length. The modal count is
        // the usual padding target, but a minority row wider than the mode
        // would leave the grid ragged, so the target is whichever is wider.
        let modal = modal_column_count(&candidate.rows);
        let width = candidate.rows.iter().map(Vec::len).max().unwrap_or(0).max(modal);
        let mut rows = Vec::with_capacity(candidate.rows.len());

        for raw_row in &candidate.rows {
            let mut row = raw_row.clone();
            if row.len() < width {
                row.resize(width, String::new());
            }

            let max_splits = row
                .iter()
                .map(|cell| {
                    if cell.contains(VALUE_SEPARATOR) {
                        cell.split(VALUE_SEPARATOR).count()
                    } else {
                        1
                    }
                })
                .max()
                .unwrap_or(1);

            for split_index in 0..max_splits {
                let expanded: Vec<CellValue> = row
                    .iter()
                    .map(|cell| {
                        let value = if cell.contains(VALUE_SEPARATOR) {
                            cell.split(VALUE_SEPARATOR).nth(split_index).unwrap_or("").to_string()
                        } else if split_index == 0 {
                            cell.clone()
                        } else {
                            String::new()
                        };
                        self.coerce(value)
                    })
                    .collect();
                rows.push(expanded);
            }
        }

        NormalizedTable {
            rows,
            mode: candidate.mode,
            page_index: candidate.page_index,
        }
    }

    /// Coerce a numeric-looking string into a number.
    ///
    /// Conversion failure leaves the value as the original string — never an
    /// error.
    fn coerce(&self, value: String) -> CellValue {
        let trimmed = value.trim();
        if trimmed.is_empty() || !self.numeric_pattern.is_match(trimmed) {
            return CellValue::Text(value);
        }

        let mut cleaned: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '¥' | '$' | '€' | '%') && *c != self.group_separator)
            .collect();
        if self.decimal_separator != '.' {
            cleaned = cleaned.replace(self.decimal_separator, ".");
        }

        match cleaned.parse::<f64>() {
            Ok(number) => CellValue::Number(number),
            Err(_) => CellValue::Text(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TableMode;

    fn normalizer() -> CellNormalizer {
        CellNormalizer::new(&ExtractionConfig::default())
    }

    fn candidate(rows: Vec<Vec<&str>>) -> TableCandidate {
        TableCandidate::new(
            TableMode::Stream,
            0,
            rows.into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    /// Re-run normalization on the string rendering of a normalized table.
    fn renormalize(normalizer: &CellNormalizer, table: &NormalizedTable) -> NormalizedTable {
        let rows = table
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        normalizer.normalize(&TableCandidate::new(table.mode, table.page_index, rows))
    }

    #[test]
    fn test_plain_table_passes_through() {
        let table = normalizer().normalize(&candidate(vec![vec!["品名", "数量"], vec!["鉛筆", "12本"]]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1][0], CellValue::Text("鉛筆".to_string()));
    }

    #[test]
    fn test_short_rows_padded_to_modal_width() {
        let table = normalizer().normalize(&candidate(vec![
            vec!["a", "b", "c"],
            vec!["d"],
            vec!["e", "f", "g"],
        ]));
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[1][1], CellValue::Text(String::new()));
        assert_eq!(table.rows[1][2], CellValue::Text(String::new()));
    }

    #[test]
    fn test_wider_than_modal_row_pads_grid_to_uniform_width() {
        // A minority row wider than the modal count raises the target width;
        // the output must never be ragged.
        let table = normalizer().normalize(&candidate(vec![
            vec!["a", "b"],
            vec!["c", "d"],
            vec!["e", "f", "g"],
        ]));
        assert!(table.rows.iter().all(|row| row.len() == 3));
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[0][2], CellValue::Text(String::new()));
        assert_eq!(table.rows[2][2], CellValue::Text("g".to_string()));
    }

    #[test]
    fn test_wider_row_with_multi_value_split_stays_rectangular() {
        let table = normalizer().normalize(&candidate(vec![
            vec!["x\ry", "1"],
            vec!["z", "2", "extra"],
        ]));
        assert!(table.rows.iter().all(|row| row.len() == 3));
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0][0], CellValue::Text("x".to_string()));
        assert_eq!(table.rows[1][0], CellValue::Text("y".to_string()));
        assert_eq!(table.rows[1][2], CellValue::Text(String::new()));
        assert_eq!(table.rows[2][2], CellValue::Text("extra".to_string()));
    }

    #[test]
    fn test_multi_value_cell_expands_rows() {
        let table = normalizer().normalize(&candidate(vec![vec!["商品A\r商品B", "100"]]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][0], CellValue::Text("商品A".to_string()));
        assert_eq!(table.rows[1][0], CellValue::Text("商品B".to_string()));
        // Non-splitting cell contributes on the first expanded row only.
        assert_eq!(table.rows[0][1], CellValue::Number(100.0));
        assert_eq!(table.rows[1][1], CellValue::Text(String::new()));
    }

    #[test]
    fn test_uneven_splits_padded_to_max() {
        // 3-way and 2-way splits in one row: exactly 3 rows, the shorter
        // list padded with an empty string on the last row.
        let table = normalizer().normalize(&candidate(vec![vec!["a\rb\rc", "x\ry"]]));
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0][1], CellValue::Text("x".to_string()));
        assert_eq!(table.rows[1][1], CellValue::Text("y".to_string()));
        assert_eq!(table.rows[2][1], CellValue::Text(String::new()));
        assert_eq!(table.rows[2][0], CellValue::Text("c".to_string()));
    }

    #[test]
    fn test_expanded_rows_are_independent_copies() {
        let mut table = normalizer().normalize(&candidate(vec![vec!["a\rb", "shared"]]));
        table.rows[0][1] = CellValue::Text("mutated".to_string());
        assert_eq!(table.rows[1][1], CellValue::Text(String::new()));
        assert_eq!(table.rows[0][0], CellValue::Text("a".to_string()));
    }

    #[test]
    fn test_numeric_coercion_comma_grouping() {
        let n = normalizer();
        let table = n.normalize(&candidate(vec![vec!["1,234.50", "12月", "¥5,000", "85%", "-42"]]));
        assert_eq!(table.rows[0][0], CellValue::Number(1234.50));
        assert_eq!(table.rows[0][1], CellValue::Text("12月".to_string()));
        assert_eq!(table.rows[0][2], CellValue::Number(5000.0));
        assert_eq!(table.rows[0][3], CellValue::Number(85.0));
        assert_eq!(table.rows[0][4], CellValue::Number(-42.0));
    }

    #[test]
    fn test_numeric_coercion_period_grouping() {
        let config = ExtractionConfig {
            numeric_locale: NumericLocale::PeriodGrouping,
            ..Default::default()
        };
        let n = CellNormalizer::new(&config);
        let table = n.normalize(&candidate(vec![vec!["1.234,50", "1,5"]]));
        assert_eq!(table.rows[0][0], CellValue::Number(1234.50));
        assert_eq!(table.rows[0][1], CellValue::Number(1.5));
    }

    #[test]
    fn test_malformed_grouping_stays_text() {
        let table = normalizer().normalize(&candidate(vec![vec!["1,23", "1,2345"]]));
        assert_eq!(table.rows[0][0], CellValue::Text("1,23".to_string()));
        assert_eq!(table.rows[0][1], CellValue::Text("1,2345".to_string()));
    }

    #[test]
    fn test_empty_candidate_normalizes_to_empty_table() {
        let table = normalizer().normalize(&TableCandidate::empty(TableMode::Stream, 2));
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.page_index, 2);
    }

    #[test]
    fn test_idempotence() {
        let n = normalizer();
        let once = n.normalize(&candidate(vec![
            vec!["商品A\r商品B", "1,234.50"],
            vec!["合計", "5,000"],
        ]));
        let twice = renormalize(&n, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_idempotence_on_clean_table() {
        let n = normalizer();
        let once = n.normalize(&candidate(vec![vec!["a", "b"], vec!["c", "42"]]));
        let twice = renormalize(&n, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mode_preserved() {
        let c = TableCandidate::new(TableMode::Lattice, 4, vec![vec!["x".to_string()]]);
        let table = normalizer().normalize(&c);
        assert_eq!(table.mode, TableMode::Lattice);
        assert_eq!(table.page_index, 4);
    }
}
