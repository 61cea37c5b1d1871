//! Pending field changes.

/// A proposed new value for the field, submitted by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    /// PHID of the user who submitted the change.
    pub author_phid: String,

    /// Proposed value.
    pub new_value: String,
}

impl PendingChange {
    /// Creates a pending change.
    pub fn new(author_phid: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self {
            author_phid: author_phid.into(),
            new_value: new_value.into(),
        }
    }
}
