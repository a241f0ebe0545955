use thiserror::Error;

/// Errors raised while turning a document file into text lines.
///
/// Extraction fails closed: on any error no text is produced, so the diff
/// engine is never handed partial data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("not a ZIP container")]
    NotZipContainer,
    #[error("not an Office Open XML package (missing [Content_Types].xml)")]
    NotOfficePackage,
    #[error("part missing from package: {path}")]
    MissingPart { path: String },
    #[error("XML parse error: {0}")]
    Xml(String),
    #[error("unsupported document format: .{extension}")]
    UnsupportedFormat { extension: String },
}
