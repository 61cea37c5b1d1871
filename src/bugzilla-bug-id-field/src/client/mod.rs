//! Bugzilla permission lookups.
//!
//! The validator only depends on [`BugTrackerClient`]; [`HttpBugzillaClient`]
//! is the production implementation and tests substitute scripted fakes.

mod error;
mod http;
mod lookup;

pub use error::TransportError;
pub use http::{HttpBugzillaClient, API_KEY_HEADER};
pub use lookup::{
    LookupOutcome, RemoteLookupResult, ACCEPTED_STATUS_CODES, STATUS_ACCESS_DENIED,
    STATUS_INVALID_ALIAS, STATUS_INVALID_ID, STATUS_NOT_FOUND, STATUS_OK,
};

use crate::accounts::ExternalAccountId;
use crate::validation::BugId;

/// Asks the bug tracker whether a bug exists and is visible to an account.
pub trait BugTrackerClient {
    /// Performs one blocking permissions lookup.
    ///
    /// Any HTTP status, expected or not, is returned as a
    /// [`RemoteLookupResult`]; only failures to get a response at all are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, timeout or an
    /// unreadable response.
    fn check_permissions(
        &self,
        bug_id: &BugId,
        account_id: &ExternalAccountId,
    ) -> Result<RemoteLookupResult, TransportError>;
}

impl<T: BugTrackerClient + ?Sized> BugTrackerClient for &T {
    fn check_permissions(
        &self,
        bug_id: &BugId,
        account_id: &ExternalAccountId,
    ) -> Result<RemoteLookupResult, TransportError> {
        (**self).check_permissions(bug_id, account_id)
    }
}
