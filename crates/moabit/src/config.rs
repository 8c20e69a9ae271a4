//! Configuration loading and management.
//!
//! This module provides the extraction configuration consumed by the core,
//! loadable from TOML or JSON files or created programmatically. Locale
//! behavior (numeric coercion rules) is explicit configuration rather than
//! process-global state: [`CellNormalizer`](crate::normalize::CellNormalizer)
//! compiles its patterns once at construction from these values.

use crate::error::{MoabitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Numeric-coercion locale profile.
///
/// Controls which characters are treated as grouping and decimal separators
/// when coercing numeric-looking cell strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericLocale {
    /// `1,234.50` style: comma grouping, period decimal point. Used by
    /// Japanese and US business documents.
    #[default]
    CommaGrouping,

    /// `1.234,50` style: period grouping, comma decimal point.
    PeriodGrouping,
}

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use moabit::ExtractionConfig;
///
/// // Create with defaults
/// let config = ExtractionConfig::default();
///
/// // Load from TOML file
/// // let config = ExtractionConfig::from_toml_file("moabit.toml")?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Tie-break threshold for mode selection: when stream and lattice
    /// candidates score equally, lattice wins if the page has strictly more
    /// vertical ruling lines than this.
    #[serde(default = "default_line_count_threshold")]
    pub line_count_threshold: usize,

    /// Positional tolerance (PDF units) for treating nearby vertical strokes
    /// as the same ruling line.
    #[serde(default = "default_line_merge_tolerance")]
    pub line_merge_tolerance: f32,

    /// Locale profile for numeric cell coercion.
    #[serde(default)]
    pub numeric_locale: NumericLocale,

    /// Page-boundary marker inserted into the document text before each
    /// page. `{page_num}` is replaced with the 1-based page number.
    #[serde(default = "default_page_marker_format")]
    pub page_marker_format: String,
}

fn default_line_count_threshold() -> usize {
    2
}
fn default_line_merge_tolerance() -> f32 {
    2.0
}
fn default_page_marker_format() -> String {
    "\n--- Page {page_num} ---\n".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            line_count_threshold: default_line_count_threshold(),
            line_merge_tolerance: default_line_merge_tolerance(),
            numeric_locale: NumericLocale::default(),
            page_marker_format: default_page_marker_format(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `MoabitError::Validation` if the file doesn't exist, is
    /// invalid TOML, or contains invalid values.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MoabitError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| MoabitError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `MoabitError::Validation` if the file doesn't exist, is
    /// invalid JSON, or contains invalid values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MoabitError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| MoabitError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check configuration values for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if !self.line_merge_tolerance.is_finite() || self.line_merge_tolerance < 0.0 {
            return Err(MoabitError::validation(format!(
                "line_merge_tolerance must be a finite non-negative number, got {}",
                self.line_merge_tolerance
            )));
        }
        Ok(())
    }
}
