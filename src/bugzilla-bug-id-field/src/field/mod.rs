//! The "Bugzilla Bug ID" custom field for revisions.
//!
//! This module describes the field to the host platform: its identity, where
//! it appears, how its value is read and rendered, and how proposed changes
//! are validated.

mod capabilities;
mod change;
mod error;
mod render;

pub use capabilities::{FieldCapabilities, BUGZILLA_BUG_ID_CAPABILITIES};
pub use change::PendingChange;
pub use error::FieldError;
pub use render::{EditControl, FieldRenderer};

use crate::accounts::{AccountDirectory, ActingUser};
use crate::client::BugTrackerClient;
use crate::config::BugzillaConfig;
use crate::validation::{BugReferenceCandidate, BugReferenceValidator, ValidationError};
use std::collections::HashMap;
use tracing::{info, info_span};

/// Storage and form key of the field.
pub const FIELD_KEY: &str = "differential:bugzilla-bug-id";

/// Key used for the field in Conduit and commit messages.
pub const CONDUIT_KEY: &str = "bugzilla.bug-id";

/// Human-readable field name.
pub const FIELD_NAME: &str = "Bugzilla Bug ID";

/// Description shown in the field configuration.
pub const FIELD_DESCRIPTION: &str = "Displays associated Bugzilla Bug ID.";

/// The Bugzilla Bug ID field.
pub struct BugzillaBugIdField<C> {
    config: BugzillaConfig,
    validator: BugReferenceValidator<C>,
    renderer: FieldRenderer,
}

impl<C: BugTrackerClient> BugzillaBugIdField<C> {
    /// Creates the field for a Bugzilla instance, validating through `client`.
    pub fn new(config: BugzillaConfig, client: C) -> Self {
        Self {
            config,
            validator: BugReferenceValidator::new(client, FIELD_KEY),
            renderer: FieldRenderer::new(),
        }
    }

    /// Returns the storage and form key.
    pub fn key(&self) -> &'static str {
        FIELD_KEY
    }

    /// Returns the Conduit key.
    pub fn conduit_key(&self) -> &'static str {
        CONDUIT_KEY
    }

    /// Returns the field name.
    pub fn name(&self) -> &'static str {
        FIELD_NAME
    }

    /// Returns the field description.
    pub fn description(&self) -> &'static str {
        FIELD_DESCRIPTION
    }

    /// Returns where the field appears.
    pub fn capabilities(&self) -> FieldCapabilities {
        BUGZILLA_BUG_ID_CAPABILITIES
    }

    /// Returns the validator used for pending changes.
    pub fn validator(&self) -> &BugReferenceValidator<C> {
        &self.validator
    }

    /// Reads the field value from submitted form parameters. A missing
    /// parameter reads as an empty value.
    pub fn read_value_from_request(&self, params: &HashMap<String, String>) -> String {
        params.get(FIELD_KEY).cloned().unwrap_or_default()
    }

    /// Reads the field value from a Conduit string parameter.
    pub fn read_value_from_conduit(&self, value: &str) -> String {
        value.to_string()
    }

    /// Renders the edit form control.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_edit_control(&self, value: &str) -> Result<EditControl, FieldError> {
        self.renderer.render_edit_control(FIELD_NAME, FIELD_KEY, value)
    }

    /// Renders the value on the revision page as a link to the bug.
    ///
    /// An empty value renders as nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_property_value(&self, value: &str) -> Result<String, FieldError> {
        if value.is_empty() {
            return Ok(String::new());
        }
        let href = self.config.bug_url(value);
        self.renderer.render_property_link(href.as_str(), value)
    }

    /// Validates proposed changes in submission order, appending every error
    /// to `errors`.
    ///
    /// Each change's author is resolved through `directory`. A change whose
    /// author has no linked Bugzilla account gets a single error and the
    /// remaining changes are still validated.
    pub fn validate_transactions<D: AccountDirectory + ?Sized>(
        &self,
        changes: &[PendingChange],
        directory: &D,
        errors: &mut Vec<ValidationError>,
    ) {
        let span = info_span!("validate_transactions", count = changes.len());
        let _guard = span.enter();

        for change in changes {
            let actor = ActingUser::resolve(directory, &change.author_phid);
            let candidate = BugReferenceCandidate::new(change.new_value.as_str());
            let verdict = self.validator.validate(&candidate, &actor);
            errors.extend(verdict.into_errors());
        }

        info!(errors = errors.len(), "Validated pending changes");
    }
}
