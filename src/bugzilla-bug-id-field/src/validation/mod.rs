//! Bug ID validation.
//!
//! [`BugReferenceValidator`] decides whether a submitted Bug ID may be stored:
//! the acting user must have a linked Bugzilla account, the value must be a
//! number, and Bugzilla must confirm the bug exists and is visible to that
//! account. Every rejection is returned as a [`ValidationError`]; nothing
//! escapes as an `Err`.

mod candidate;
mod error;
mod verdict;

pub use candidate::{BugId, BugIdError, BugReferenceCandidate};
pub use error::{ValidationError, ValidationErrorKind};
pub use verdict::ValidationVerdict;

use crate::accounts::{ActingUser, ExternalAccountId};
use crate::client::{BugTrackerClient, LookupOutcome};
use tracing::{debug, info, info_span, warn};

/// Validates Bug ID candidates against a bug tracker.
#[derive(Debug)]
pub struct BugReferenceValidator<C> {
    client: C,
    field_key: String,
}

impl<C: BugTrackerClient> BugReferenceValidator<C> {
    /// Creates a validator whose errors are attached to `field_key`.
    pub fn new(client: C, field_key: impl Into<String>) -> Self {
        Self {
            client,
            field_key: field_key.into(),
        }
    }

    /// Returns the key errors are attached to.
    pub fn field_key(&self) -> &str {
        &self.field_key
    }

    /// Validates one candidate on behalf of `actor`.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. the actor has a linked Bugzilla account
    /// 2. the value is not empty
    /// 3. the value is all decimal digits
    /// 4. Bugzilla confirms the bug exists and is visible to the account
    ///
    /// Only step 4 touches the network, with exactly one request.
    pub fn validate(
        &self,
        candidate: &BugReferenceCandidate,
        actor: &ActingUser,
    ) -> ValidationVerdict {
        let span = info_span!(
            "validate_bug_id",
            user = %actor.user_phid(),
            value = %candidate.raw_value()
        );
        let _guard = span.enter();

        match self.check(candidate, actor) {
            Some(error) => {
                info!(kind = error.kind.as_str(), detail = %error.detail, "Bug ID rejected");
                ValidationVerdict::from(error)
            }
            None => {
                info!("Bug ID accepted");
                ValidationVerdict::accepted()
            }
        }
    }

    fn check(
        &self,
        candidate: &BugReferenceCandidate,
        actor: &ActingUser,
    ) -> Option<ValidationError> {
        let Some(account_id) = actor.external_account_id() else {
            warn!("Acting user has no linked Bugzilla account");
            return Some(ValidationError::actor_unresolved(&self.field_key));
        };

        let bug_id = match candidate.parse() {
            Ok(bug_id) => bug_id,
            Err(BugIdError::Missing) => {
                return Some(ValidationError::missing_value(&self.field_key))
            }
            Err(BugIdError::NotANumber) => {
                return Some(ValidationError::invalid_format(&self.field_key))
            }
        };

        self.check_remote(&bug_id, account_id)
    }

    fn check_remote(
        &self,
        bug_id: &BugId,
        account_id: &ExternalAccountId,
    ) -> Option<ValidationError> {
        let result = match self.client.check_permissions(bug_id, account_id) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Bugzilla permissions lookup failed");
                return Some(ValidationError::unreachable(
                    &self.field_key,
                    &e.to_string(),
                ));
            }
        };

        let outcome = result.outcome();
        debug!(status_code = result.status_code, outcome = ?outcome, "Interpreted Bugzilla response");

        match outcome {
            LookupOutcome::Visible => None,
            LookupOutcome::NotFound { status_code } => Some(ValidationError::bug_not_found(
                &self.field_key,
                status_code,
            )),
            LookupOutcome::AccessDenied => Some(ValidationError::access_denied(&self.field_key)),
            LookupOutcome::NotVisible => Some(ValidationError::not_visible(&self.field_key)),
            LookupOutcome::UnexpectedStatus { status_code } => Some(
                ValidationError::unexpected_response(&self.field_key, status_code),
            ),
            LookupOutcome::MalformedBody { status_code, body } => Some(
                ValidationError::malformed_response(&self.field_key, status_code, &body),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{RemoteLookupResult, TransportError};
    use std::cell::RefCell;

    const FIELD: &str = "differential:bugzilla-bug-id";

    /// Client returning one scripted response and recording every call.
    struct ScriptedClient {
        response: fn() -> Result<RemoteLookupResult, TransportError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl ScriptedClient {
        fn new(response: fn() -> Result<RemoteLookupResult, TransportError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl BugTrackerClient for ScriptedClient {
        fn check_permissions(
            &self,
            bug_id: &BugId,
            account_id: &ExternalAccountId,
        ) -> Result<RemoteLookupResult, TransportError> {
            self.calls
                .borrow_mut()
                .push((bug_id.to_string(), account_id.to_string()));
            (self.response)()
        }
    }

    fn actor() -> ActingUser {
        ActingUser::new("PHID-USER-1", vec![ExternalAccountId::new("42")])
    }

    #[test]
    fn uses_first_linked_account_for_lookup() {
        let client = ScriptedClient::new(|| Ok(RemoteLookupResult::ok(r#"{"result":"1"}"#)));
        let validator = BugReferenceValidator::new(&client, FIELD);
        let actor = ActingUser::new(
            "PHID-USER-1",
            vec![ExternalAccountId::new("7"), ExternalAccountId::new("8")],
        );

        let verdict = validator.validate(&BugReferenceCandidate::new("2345"), &actor);

        assert!(verdict.is_accepted());
        assert_eq!(
            *client.calls.borrow(),
            vec![("2345".to_string(), "7".to_string())]
        );
    }

    #[test]
    fn transport_failure_becomes_unreachable_error() {
        let client = ScriptedClient::new(|| {
            Err(TransportError::ReadBody(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "timed out",
            )))
        });
        let validator = BugReferenceValidator::new(&client, FIELD);

        let verdict = validator.validate(&BugReferenceCandidate::new("2345"), &actor());

        assert_eq!(verdict.kinds(), [ValidationErrorKind::RemoteUnreachable]);
        assert!(verdict.errors()[0].detail.contains("timed out"));
        assert_eq!(client.calls.borrow().len(), 1);
    }

    #[test]
    fn malformed_success_body_becomes_unreachable_error() {
        let client = ScriptedClient::new(|| Ok(RemoteLookupResult::ok("<html>oops</html>")));
        let validator = BugReferenceValidator::new(&client, FIELD);

        let verdict = validator.validate(&BugReferenceCandidate::new("2345"), &actor());

        assert_eq!(verdict.kinds(), [ValidationErrorKind::RemoteUnreachable]);
        assert!(verdict.errors()[0].detail.contains("<html>oops</html>"));
    }

    #[test]
    fn errors_carry_field_key() {
        let client = ScriptedClient::new(|| Ok(RemoteLookupResult::status(404)));
        let validator = BugReferenceValidator::new(&client, FIELD);

        let verdict = validator.validate(&BugReferenceCandidate::new(""), &actor());

        assert_eq!(verdict.errors()[0].field, FIELD);
        assert_eq!(verdict.errors()[0].title.as_deref(), Some("Required"));
    }
}
