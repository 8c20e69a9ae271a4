//! Full-document text extraction.
//!
//! Text is the simple path: pages arrive with their text already decoded, so
//! extraction is concatenation in page order with a boundary marker between
//! pages. A page whose text could not be decoded contributes an empty string
//! rather than aborting the document.

use crate::types::Document;

/// Concatenate all page text in page order.
///
/// Each page is preceded by `marker_format` with `{page_num}` replaced by
/// the 1-based page number. Undecodable pages keep their marker (page
/// numbering stays stable for downstream readers) but contribute no body
/// text.
pub fn extract_text(document: &Document, marker_format: &str) -> String {
    let mut content = String::new();

    for page in &document.pages {
        let page_number = page.index + 1;
        let marker = marker_format.replace("{page_num}", &page_number.to_string());
        content.push_str(&marker);

        match &page.text {
            Some(text) => content.push_str(text),
            None => {
                tracing::warn!(page = page.index, "page text unavailable, contributing empty string");
            }
        }
    }

    content
}
