// File: src/validators/file.rs
// Purpose: Uploaded file validator

use crate::error::{Result, SchemaError};
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;
use rusty_schema_validation::{validate_upload, FileLimits, CORRUPTED_FILE_MESSAGE};

/// Upload with the default limits: 0 B to 2 MiB, png/jpeg/jpg/pdf
pub fn file() -> FileValidator {
    FileValidator {
        limits: FileLimits::default(),
    }
}

/// Upload with custom limits
///
/// Fails with [`SchemaError::InvalidFileLimits`] when `min_size > max_size`
/// and [`SchemaError::EmptyMimeTypes`] when no MIME type is allowed.
pub fn file_with(limits: FileLimits) -> Result<FileValidator> {
    if limits.min_size > limits.max_size {
        return Err(SchemaError::InvalidFileLimits {
            min: limits.min_size,
            max: limits.max_size,
        });
    }
    if limits.mime_types.is_empty() {
        return Err(SchemaError::EmptyMimeTypes);
    }
    Ok(FileValidator { limits })
}

#[derive(Debug, Clone)]
pub struct FileValidator {
    limits: FileLimits,
}

impl FileValidator {
    pub fn limits(&self) -> &FileLimits {
        &self.limits
    }
}

impl Validator for FileValidator {
    /// Anything that is not a file descriptor counts as a broken upload.
    /// The error code is checked before size and type.
    fn validate(&self, value: &Value) -> ValidationOutcome {
        match value.as_file() {
            Some(upload) => {
                validate_upload(upload.error, upload.size, &upload.mime_type, &self.limits).into()
            }
            None => ValidationOutcome::fail(CORRUPTED_FILE_MESSAGE),
        }
    }
}
