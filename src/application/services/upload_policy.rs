use crate::domain::{RawDocument, ValidationError};

pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Checks an upload before any extraction work is spent on it.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    max_file_size_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    pub fn from_megabytes(max_file_size_mb: u64) -> Self {
        Self::new(max_file_size_mb.saturating_mul(1024 * 1024))
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    pub fn validate(&self, document: &RawDocument) -> Result<(), ValidationError> {
        if !document.content_type.is_pdf() {
            return Err(ValidationError::UnsupportedMediaType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let size = document.size_bytes();
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }
        if size > self.max_file_size_bytes {
            return Err(ValidationError::FileTooLarge {
                size,
                limit: self.max_file_size_bytes,
            });
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}
