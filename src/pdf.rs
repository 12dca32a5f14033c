use crate::error::{Error, Result};

/// Extracts the concatenated page text from a PDF held fully in memory.
///
/// Pages are visited in document order; extraction of a fixed byte sequence
/// is deterministic.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    if !is_pdf(bytes) {
        return Err(Error::Parse("File content is not a PDF".to_string()));
    }

    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::Parse(format!("Failed to extract text from PDF: {}", e)))
}

/// PDF files begin with the `%PDF-` magic bytes.
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(b"%PDF-")
}
