use derive_more::Display;
use ropey::Rope;
use std::path::Path;

use crate::error::ExtractError;
use crate::{spreadsheet, text, word};

/// Supported source document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DocumentKind {
    /// Plain UTF-8 text (`.txt`)
    #[display(fmt = "plain text")]
    PlainText,

    /// Word document (`.docx`)
    #[display(fmt = "Word document")]
    WordDocument,

    /// Spreadsheet workbook (`.xlsx`)
    #[display(fmt = "spreadsheet")]
    Spreadsheet,
}

impl DocumentKind {
    /// Detect the document kind from a file path's extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Detect the document kind from a bare extension, case-insensitively
    pub fn from_extension(extension: &str) -> Result<Self, ExtractError> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocumentKind::PlainText),
            "docx" => Ok(DocumentKind::WordDocument),
            "xlsx" => Ok(DocumentKind::Spreadsheet),
            other => Err(ExtractError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

/// The full text extracted from one document
#[derive(Debug, Clone)]
pub struct DocumentText {
    kind: DocumentKind,
    text: Rope,
}

impl DocumentText {
    /// Extract a document from a file, detecting its kind from the extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let kind = DocumentKind::from_path(path)?;
        let bytes = std::fs::read(path)?;
        Self::from_bytes(kind, &bytes)
    }

    /// Extract a document of a known kind from raw file bytes
    pub fn from_bytes(kind: DocumentKind, bytes: &[u8]) -> Result<Self, ExtractError> {
        let extracted = match kind {
            DocumentKind::PlainText => text::extract_text(bytes)?,
            DocumentKind::WordDocument => word::extract_text(bytes)?,
            DocumentKind::Spreadsheet => spreadsheet::extract_text(bytes)?,
        };

        Ok(Self {
            kind,
            text: Rope::from_str(&extracted),
        })
    }

    /// Get the detected document kind
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Get the extracted text
    pub fn text(&self) -> &Rope {
        &self.text
    }

    /// Split the extracted text into its ordered line sequence.
    ///
    /// Lines are split on line breaks and returned without them; a trailing
    /// line break does not produce a phantom empty line. Nothing is trimmed,
    /// filtered, or deduplicated.
    pub fn lines(&self) -> Vec<String> {
        if self.text.len_chars() == 0 {
            return Vec::new();
        }

        let mut lines: Vec<String> = self
            .text
            .lines()
            .map(|slice| {
                let mut line = slice.to_string();
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                line
            })
            .collect();

        // A rope whose text ends in a line break reports one final empty line
        if self.text.char(self.text.len_chars() - 1) == '\n' {
            lines.pop();
        }

        lines
    }

    /// Get the number of lines `lines()` would return
    pub fn line_count(&self) -> usize {
        if self.text.len_chars() == 0 {
            return 0;
        }
        let len_lines = self.text.len_lines();
        if self.text.char(self.text.len_chars() - 1) == '\n' {
            len_lines - 1
        } else {
            len_lines
        }
    }
}
