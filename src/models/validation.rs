//! Outcome types of extension validation.

use crate::core::error::IntakeError;

/// Partition of a file batch into accepted and rejected files.
///
/// Both lists keep the order of the input batch and together contain every
/// input file exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult<F> {
    pub valid_files: Vec<F>,
    pub invalid_files: Vec<F>,
}

impl<F> ValidationResult<F> {
    /// True when no file was rejected.
    pub fn is_verified(&self) -> bool {
        self.invalid_files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.valid_files.len() + self.invalid_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Payload of the invalid-files callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFiles<F> {
    pub error: IntakeError,
    pub invalid_files: Vec<F>,
    pub valid_files: Vec<F>,
}

impl<F> From<ValidationResult<F>> for InvalidFiles<F> {
    fn from(result: ValidationResult<F>) -> Self {
        Self {
            error: IntakeError::InvalidFileUpload,
            invalid_files: result.invalid_files,
            valid_files: result.valid_files,
        }
    }
}
