//! Validation verdicts.

use super::{ValidationError, ValidationErrorKind};

/// Outcome of validating one candidate. No errors means the value is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationVerdict {
    errors: Vec<ValidationError>,
}

impl ValidationVerdict {
    /// Creates a verdict with no errors.
    #[must_use]
    pub fn accepted() -> Self {
        Self::default()
    }

    /// Returns true if the candidate was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors in the order they were raised.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the error kinds in the order they were raised.
    #[must_use]
    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    /// Consumes the verdict, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationVerdict {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
