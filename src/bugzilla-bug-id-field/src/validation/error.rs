//! Validation error descriptors.

use std::fmt;

/// Title shared by the presence and format errors.
const REQUIRED_TITLE: &str = "Required";

/// Category of a rejected Bug ID value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The acting user has no linked Bugzilla account.
    ActorUnresolved,

    /// The field was left blank.
    MissingValue,

    /// The value is not a non-negative integer string.
    InvalidFormat,

    /// Bugzilla reported an invalid alias, invalid ID or missing bug.
    BugNotFound,

    /// Bugzilla denied access, or the success body says the bug isn't visible.
    PermissionDenied,

    /// Bugzilla answered with a status outside the accepted set.
    UnexpectedRemoteResponse,

    /// Bugzilla couldn't be reached or sent a body that couldn't be read.
    RemoteUnreachable,
}

impl ValidationErrorKind {
    /// Returns the kind as a string for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActorUnresolved => "actor_unresolved",
            Self::MissingValue => "missing_value",
            Self::InvalidFormat => "invalid_format",
            Self::BugNotFound => "bug_not_found",
            Self::PermissionDenied => "permission_denied",
            Self::UnexpectedRemoteResponse => "unexpected_remote_response",
            Self::RemoteUnreachable => "remote_unreachable",
        }
    }
}

/// A user-visible validation error attached to a field.
///
/// Some errors only carry a detail message; those have no title rather than
/// an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,

    /// Key of the field the error belongs to.
    pub field: String,

    /// Short title, if the error has one.
    pub title: Option<String>,

    /// Full message shown to the submitter.
    pub detail: String,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        field: &str,
        title: Option<&str>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.to_string(),
            title: title.map(str::to_string),
            detail: detail.into(),
        }
    }

    pub(crate) fn actor_unresolved(field: &str) -> Self {
        Self::new(
            ValidationErrorKind::ActorUnresolved,
            field,
            None,
            "This transaction's user's account ID could not be found.",
        )
    }

    pub(crate) fn missing_value(field: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingValue,
            field,
            Some(REQUIRED_TITLE),
            "Bugzilla Bug ID is required",
        )
    }

    pub(crate) fn invalid_format(field: &str) -> Self {
        Self::new(
            ValidationErrorKind::InvalidFormat,
            field,
            Some(REQUIRED_TITLE),
            "Bugzilla Bug ID must be a number",
        )
    }

    pub(crate) fn bug_not_found(field: &str, status_code: u16) -> Self {
        Self::new(
            ValidationErrorKind::BugNotFound,
            field,
            None,
            format!("Bugzilla Bug ID does not exist ({status_code})"),
        )
    }

    pub(crate) fn access_denied(field: &str) -> Self {
        Self::new(
            ValidationErrorKind::PermissionDenied,
            field,
            None,
            "Bugzilla Bug ID: you do not have permission for this bug.",
        )
    }

    pub(crate) fn not_visible(field: &str) -> Self {
        Self::new(
            ValidationErrorKind::PermissionDenied,
            field,
            None,
            "Bugzilla Bug ID: You do not have permission to view this bug or the bug does not exist.",
        )
    }

    pub(crate) fn unexpected_response(field: &str, status_code: u16) -> Self {
        Self::new(
            ValidationErrorKind::UnexpectedRemoteResponse,
            field,
            None,
            format!("Bugzilla Bug ID: Bugzilla did not provide an expected response: {status_code}."),
        )
    }

    pub(crate) fn malformed_response(field: &str, status_code: u16, body: &str) -> Self {
        Self::new(
            ValidationErrorKind::RemoteUnreachable,
            field,
            None,
            format!(
                "Bugzilla returned an unexpected status code or response body: Status code: {status_code} / Body: {body}"
            ),
        )
    }

    pub(crate) fn unreachable(field: &str, reason: &str) -> Self {
        Self::new(
            ValidationErrorKind::RemoteUnreachable,
            field,
            None,
            format!("Bugzilla Bug ID: Bugzilla could not be reached: {reason}"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{title}: {}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}
