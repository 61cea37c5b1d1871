//! Links between platform users and their Bugzilla accounts.
//!
//! The host platform owns the account-linkage records; this module only
//! defines the lookup it must provide and an in-memory implementation.

mod actor;

pub use actor::ActingUser;

use std::collections::HashMap;
use std::fmt;

/// Provider type of accounts linked through Bugzilla (BMO) login.
pub const BUGZILLA_PROVIDER: &str = "bmo";

/// Identifier Bugzilla uses for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalAccountId(String);

impl ExternalAccountId {
    /// Wraps an account identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An external account linked to a platform user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalAccount {
    /// Provider type, e.g. [`BUGZILLA_PROVIDER`].
    pub provider: String,

    /// Identifier of the account at the provider.
    pub account_id: ExternalAccountId,
}

/// Lookup of the external accounts linked to a platform user.
pub trait AccountDirectory {
    /// Returns the accounts of `provider` type linked to the user with the
    /// given PHID, in the directory's lookup order. May be empty.
    fn linked_accounts(&self, user_phid: &str, provider: &str) -> Vec<ExternalAccount>;
}

impl<T: AccountDirectory + ?Sized> AccountDirectory for &T {
    fn linked_accounts(&self, user_phid: &str, provider: &str) -> Vec<ExternalAccount> {
        (**self).linked_accounts(user_phid, provider)
    }
}

/// An [`AccountDirectory`] backed by a map, keeping links in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountDirectory {
    links: HashMap<String, Vec<ExternalAccount>>,
}

impl InMemoryAccountDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links an account to a user.
    pub fn link(
        &mut self,
        user_phid: impl Into<String>,
        provider: impl Into<String>,
        account_id: impl Into<String>,
    ) {
        self.links
            .entry(user_phid.into())
            .or_default()
            .push(ExternalAccount {
                provider: provider.into(),
                account_id: ExternalAccountId::new(account_id),
            });
    }

    /// Links an account to a user, builder style.
    #[must_use]
    pub fn with_link(
        mut self,
        user_phid: impl Into<String>,
        provider: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        self.link(user_phid, provider, account_id);
        self
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn linked_accounts(&self, user_phid: &str, provider: &str) -> Vec<ExternalAccount> {
        self.links
            .get(user_phid)
            .map(|accounts| {
                accounts
                    .iter()
                    .filter(|account| account.provider == provider)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_provider() {
        let directory = InMemoryAccountDirectory::new()
            .with_link("PHID-USER-1", "github", "octocat")
            .with_link("PHID-USER-1", BUGZILLA_PROVIDER, "42");

        let accounts = directory.linked_accounts("PHID-USER-1", BUGZILLA_PROVIDER);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_id.as_str(), "42");
    }

    #[test]
    fn unknown_user_has_no_accounts() {
        let directory = InMemoryAccountDirectory::new();
        assert!(directory
            .linked_accounts("PHID-USER-404", BUGZILLA_PROVIDER)
            .is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let directory = InMemoryAccountDirectory::new()
            .with_link("PHID-USER-1", BUGZILLA_PROVIDER, "7")
            .with_link("PHID-USER-1", BUGZILLA_PROVIDER, "3");

        let ids: Vec<_> = directory
            .linked_accounts("PHID-USER-1", BUGZILLA_PROVIDER)
            .into_iter()
            .map(|account| account.account_id.to_string())
            .collect();
        assert_eq!(ids, ["7", "3"]);
    }
}
