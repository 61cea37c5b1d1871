//! The user submitting a change.

use super::{AccountDirectory, ExternalAccountId, BUGZILLA_PROVIDER};
use tracing::debug;

/// The platform user behind a pending change, with their linked Bugzilla
/// accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser {
    /// Platform identity (PHID) of the user.
    user_phid: String,
    /// Linked Bugzilla accounts, in lookup order.
    linked_accounts: Vec<ExternalAccountId>,
}

impl ActingUser {
    /// Creates an acting user from already-resolved account links.
    pub fn new(user_phid: impl Into<String>, linked_accounts: Vec<ExternalAccountId>) -> Self {
        Self {
            user_phid: user_phid.into(),
            linked_accounts,
        }
    }

    /// Looks up the user's Bugzilla accounts in `directory`.
    pub fn resolve<D: AccountDirectory + ?Sized>(directory: &D, user_phid: &str) -> Self {
        let linked_accounts: Vec<_> = directory
            .linked_accounts(user_phid, BUGZILLA_PROVIDER)
            .into_iter()
            .map(|account| account.account_id)
            .collect();

        debug!(
            user = user_phid,
            count = linked_accounts.len(),
            "Resolved linked Bugzilla accounts"
        );

        Self::new(user_phid, linked_accounts)
    }

    /// Returns the user's PHID.
    pub fn user_phid(&self) -> &str {
        &self.user_phid
    }

    /// Returns the account used for permission checks.
    ///
    /// Users registered without Bugzilla login have none. With several links
    /// the first in lookup order wins.
    pub fn external_account_id(&self) -> Option<&ExternalAccountId> {
        self.linked_accounts.first()
    }
}
