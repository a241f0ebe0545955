use crate::error::ExtractError;

/// Decode a plain text file as strict UTF-8.
///
/// Invalid byte sequences are an error rather than being replaced, so a
/// binary file mislabeled as text never reaches the diff engine.
pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
