//! Error types for moabit.
//!
//! All fallible operations in the crate return [`Result`], backed by
//! [`MoabitError`]. Errors use `thiserror` and preserve their causes with
//! `#[source]` attributes.
//!
//! # Error Handling Philosophy
//!
//! **System errors always bubble up unchanged:**
//! - `MoabitError::Io` (from `std::io::Error`) - file system errors during
//!   config loading
//!
//! **Extraction errors are recovered locally and never abort a document:**
//! - `TableExtraction` - the underlying table engine failed or timed out for
//!   one mode on one page; the mode selector converts it to an empty candidate
//! - `PageDecode` - a page's text or geometry could not be read; that page
//!   contributes an empty string / zero-line count
//!
//! **Application errors are wrapped with context:**
//! - `Validation` - invalid configuration values or files
//! - `Serialization` - JSON serialization errors
use thiserror::Error;

/// Result type alias using `MoabitError`.
///
/// This is the standard return type for all fallible operations in moabit.
pub type Result<T> = std::result::Result<T, MoabitError>;

/// Main error type for all moabit operations.
#[derive(Debug, Error)]
pub enum MoabitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying extraction engine failed for one mode on one page.
    ///
    /// Recovered by [`ModeSelector`](crate::select::ModeSelector) as an empty
    /// candidate; never surfaces past mode selection.
    #[error("Table extraction failed: {message}")]
    TableExtraction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A page's text or geometry could not be decoded.
    ///
    /// Recovered locally (empty text contribution, zero-line count); never
    /// aborts the document.
    #[error("Page decode failed: {message}")]
    PageDecode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MoabitError {
    /// Create a TableExtraction error
    pub fn table_extraction<S: Into<String>>(message: S) -> Self {
        Self::TableExtraction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a TableExtraction error with source
    pub fn table_extraction_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::TableExtraction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a PageDecode error
    pub fn page_decode<S: Into<String>>(message: S) -> Self {
        Self::PageDecode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a PageDecode error with source
    pub fn page_decode_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::PageDecode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source
    pub fn validation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
