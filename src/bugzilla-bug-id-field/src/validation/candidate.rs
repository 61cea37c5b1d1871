//! Bug ID candidates and their syntactic checks.

use std::fmt;

/// A user-supplied value for the Bug ID field, taken from one pending change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugReferenceCandidate {
    raw_value: String,
}

impl BugReferenceCandidate {
    /// Wraps the raw field value. Empty values are allowed here and rejected
    /// during validation.
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
        }
    }

    /// Returns the value exactly as submitted.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Checks presence and format, producing a [`BugId`] for the remote check.
    ///
    /// # Errors
    ///
    /// Returns [`BugIdError::Missing`] for an empty value and
    /// [`BugIdError::NotANumber`] unless every character is an ASCII digit.
    pub fn parse(&self) -> Result<BugId, BugIdError> {
        BugId::parse(&self.raw_value)
    }
}

/// Why a candidate can't be used as a bug ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugIdError {
    /// The value is empty.
    Missing,

    /// The value contains something other than decimal digits.
    NotANumber,
}

/// A syntactically valid bug ID: one or more ASCII decimal digits.
///
/// Kept as text so that arbitrarily long IDs reach Bugzilla unchanged; the
/// tracker decides whether they exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BugId(String);

impl BugId {
    /// Parses a bug ID.
    ///
    /// # Errors
    ///
    /// See [`BugReferenceCandidate::parse`].
    pub fn parse(value: &str) -> Result<Self, BugIdError> {
        if value.is_empty() {
            return Err(BugIdError::Missing);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BugIdError::NotANumber);
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the ID as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
