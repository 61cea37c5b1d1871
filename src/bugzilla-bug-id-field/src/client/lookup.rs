//! Permission lookup responses and how they are read.

use serde_json::Value;

/// Bugzilla error code: no bug with the given alias.
pub const STATUS_INVALID_ALIAS: u16 = 100;

/// Bugzilla error code: no bug with the given ID.
pub const STATUS_INVALID_ID: u16 = 101;

/// Bugzilla error code: the user can't access the bug.
pub const STATUS_ACCESS_DENIED: u16 = 102;

/// HTTP 200.
pub const STATUS_OK: u16 = 200;

/// HTTP 404.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Every status the permissions endpoint is documented to return.
pub const ACCEPTED_STATUS_CODES: [u16; 5] = [
    STATUS_INVALID_ALIAS,
    STATUS_INVALID_ID,
    STATUS_ACCESS_DENIED,
    STATUS_OK,
    STATUS_NOT_FOUND,
];

/// Raw answer from the permissions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLookupResult {
    /// Response status code.
    pub status_code: u16,

    /// Response body; only kept for [`STATUS_OK`].
    pub body: Option<String>,
}

/// What a [`RemoteLookupResult`] says about the bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The bug exists and the user can see it.
    Visible,

    /// Invalid alias, invalid ID or not found.
    NotFound { status_code: u16 },

    /// Bugzilla reported access denied.
    AccessDenied,

    /// The success body did not confirm visibility.
    NotVisible,

    /// A status outside [`ACCEPTED_STATUS_CODES`].
    UnexpectedStatus { status_code: u16 },

    /// A success status whose body isn't a JSON object.
    MalformedBody { status_code: u16, body: String },
}

impl RemoteLookupResult {
    /// A success response with a body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_OK,
            body: Some(body.into()),
        }
    }

    /// A response carrying only a status code.
    #[must_use]
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Interprets the response.
    ///
    /// A success body is expected to look like `{"result": "1"}`. Only a
    /// `result` of `"1"` (or the number `1`) confirms the bug is visible;
    /// a missing or different `result` means it is not.
    #[must_use]
    pub fn outcome(&self) -> LookupOutcome {
        match self.status_code {
            STATUS_INVALID_ALIAS | STATUS_INVALID_ID | STATUS_NOT_FOUND => {
                LookupOutcome::NotFound {
                    status_code: self.status_code,
                }
            }
            STATUS_ACCESS_DENIED => LookupOutcome::AccessDenied,
            STATUS_OK => self.success_outcome(),
            status_code => LookupOutcome::UnexpectedStatus { status_code },
        }
    }

    fn success_outcome(&self) -> LookupOutcome {
        let body = self.body.as_deref().unwrap_or_default();
        let malformed = || LookupOutcome::MalformedBody {
            status_code: self.status_code,
            body: body.to_string(),
        };

        let Ok(Value::Object(json)) = serde_json::from_str::<Value>(body) else {
            return malformed();
        };

        match json.get("result") {
            Some(Value::String(result)) if result == "1" => LookupOutcome::Visible,
            Some(Value::Number(result)) if result.as_u64() == Some(1) => LookupOutcome::Visible,
            _ => LookupOutcome::NotVisible,
        }
    }
}
