//! Where the field shows up in the host platform.

/// Capability flags the host platform reads from a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldCapabilities {
    /// Field is turned on.
    pub enabled: bool,

    /// Field can be switched off in configuration.
    pub can_disable: bool,

    /// Field is disabled until configured.
    pub disabled_by_default: bool,

    /// Field takes part in application transactions (required to be editable).
    pub in_application_transactions: bool,

    /// Field appears in the revision edit form. Without this the value is
    /// not read from commit messages either.
    pub in_edit_view: bool,

    /// Field value is shown on the revision page.
    pub in_property_view: bool,

    /// Field value is shown in revision lists.
    pub in_list_view: bool,

    /// Field value is indexed for global search.
    pub in_global_search: bool,

    /// Field appears in `differential.revision.search` results.
    pub in_conduit_dictionary: bool,

    /// Field can be set through Conduit transactions (e.g. from `arc diff`).
    pub in_conduit_transactions: bool,

    /// Field can be edited after creation.
    pub editable: bool,

    /// Editing the commit message overwrites the stored value.
    pub overwrite_on_commit_message_edit: bool,
}

/// Capabilities of the Bugzilla Bug ID field.
pub const BUGZILLA_BUG_ID_CAPABILITIES: FieldCapabilities = FieldCapabilities {
    enabled: true,
    can_disable: false,
    disabled_by_default: false,
    in_application_transactions: true,
    in_edit_view: true,
    in_property_view: true,
    in_list_view: false,
    in_global_search: true,
    in_conduit_dictionary: true,
    in_conduit_transactions: true,
    editable: true,
    overwrite_on_commit_message_edit: true,
};
