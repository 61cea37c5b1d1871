#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod accounts;
pub mod client;
pub mod config;
pub mod field;
pub mod mozlog;
pub mod validation;

pub use accounts::{
    AccountDirectory, ActingUser, ExternalAccount, ExternalAccountId, InMemoryAccountDirectory,
    BUGZILLA_PROVIDER,
};
pub use client::{
    BugTrackerClient, HttpBugzillaClient, LookupOutcome, RemoteLookupResult, TransportError,
};
pub use config::{load_config_file, BugzillaConfig, ConfigError, ConfigFile, MozLogConfig, Settings};
pub use field::{BugzillaBugIdField, FieldCapabilities, FieldError, PendingChange};
pub use mozlog::{MozLogError, MozLogLayer, MozLogger};
pub use validation::{
    BugId, BugReferenceCandidate, BugReferenceValidator, ValidationError, ValidationErrorKind,
    ValidationVerdict,
};
