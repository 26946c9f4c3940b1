//! Résumé intake — PDF text extraction and chunking.
//!
//! The extracted text is split into bounded, overlapping chunks before being
//! handed to the model, so semantic context spanning a chunk boundary is not
//! lost, then reassembled with newline separators in original order.

use std::path::Path;

use crate::errors::ResumeError;

/// Target chunk length in characters.
pub const CHUNK_SIZE: usize = 1000;
/// Characters repeated from the tail of one chunk at the head of the next.
pub const CHUNK_OVERLAP: usize = 100;

/// Reads a PDF résumé from disk and returns its textual content as a single
/// string, chunked and reassembled.
///
/// Fails with a descriptive error if the path does not exist, the extension is
/// not `.pdf` (case-insensitive), the file cannot be read as a PDF, or the
/// extraction yields nothing usable (e.g. an image-only scan).
pub fn extract_resume_text(path: &Path) -> Result<String, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::FileNotFound(path.display().to_string()));
    }

    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(ResumeError::UnsupportedType);
    }

    let text = pdf_extract::extract_text(path).map_err(|e| ResumeError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ResumeError::EmptyContent);
    }

    let chunks = chunk_text(&text, CHUNK_SIZE, CHUNK_OVERLAP);
    Ok(chunks.join("\n"))
}

/// Splits `text` into chunks of at most `size` characters, each starting
/// `size - overlap` characters after the previous one. Boundaries are char
/// boundaries, so multi-byte input never splits inside a code point.
fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    assert!(overlap < size, "overlap must be smaller than chunk size");

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let step = size - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += step;
    }

    chunks
}
