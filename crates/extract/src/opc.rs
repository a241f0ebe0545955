//! Open Packaging Conventions container handling.
//!
//! Both `.docx` and `.xlsx` files are ZIP archives laid out per OPC; this
//! module wraps archive access and validates the package marker file.

use std::io::{Read, Seek};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ExtractError;

pub(crate) struct OpcContainer<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> OpcContainer<R> {
    pub(crate) fn open(reader: R) -> Result<Self, ExtractError> {
        let archive = ZipArchive::new(reader).map_err(|err| match err {
            ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => {
                ExtractError::NotZipContainer
            }
            ZipError::Io(e) => ExtractError::Io(e),
            other => ExtractError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        })?;

        let mut container = Self { archive };

        if container.archive.by_name("[Content_Types].xml").is_err() {
            return Err(ExtractError::NotOfficePackage);
        }

        Ok(container)
    }

    /// Read a part that must exist in the package
    pub(crate) fn read_part(&mut self, path: &str) -> Result<Vec<u8>, ExtractError> {
        match self.read_part_optional(path)? {
            Some(bytes) => Ok(bytes),
            None => Err(ExtractError::MissingPart {
                path: path.to_string(),
            }),
        }
    }

    /// Read a part that may legitimately be absent
    pub(crate) fn read_part_optional(
        &mut self,
        path: &str,
    ) -> Result<Option<Vec<u8>>, ExtractError> {
        let mut file = match self.archive.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(ZipError::Io(e)) => return Err(ExtractError::Io(e)),
            Err(other) => {
                return Err(ExtractError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    other.to_string(),
                )))
            }
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}
