//! Blocking HTTP client for the Bugzilla permissions endpoint.

use super::{BugTrackerClient, RemoteLookupResult, TransportError, STATUS_OK};
use crate::accounts::ExternalAccountId;
use crate::config::BugzillaConfig;
use crate::validation::BugId;
use tracing::{debug, info_span};
use url::Url;

/// Header carrying the automation API key.
pub const API_KEY_HEADER: &str = "X-Bugzilla-API-Key";

/// Path segments leading to the permissions endpoint.
const PERMISSIONS_PATH: [&str; 3] = ["rest", "phabbugz", "permissions"];

/// [`BugTrackerClient`] talking to a real Bugzilla over HTTP.
///
/// Each lookup is a single GET with the configured timeout; there are no
/// retries and redirects are not followed, so a 3xx comes back as a status.
#[derive(Debug)]
pub struct HttpBugzillaClient {
    agent: ureq::Agent,
    config: BugzillaConfig,
}

impl HttpBugzillaClient {
    /// Creates a client for the given Bugzilla instance.
    #[must_use]
    pub fn new(config: BugzillaConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .redirects(0)
            .build();
        Self { agent, config }
    }

    /// Builds `{bugzilla-url}/rest/phabbugz/permissions/{bug_id}/{account_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidBaseUrl`] if the configured URL can't
    /// take path segments.
    pub fn permissions_url(
        &self,
        bug_id: &BugId,
        account_id: &ExternalAccountId,
    ) -> Result<Url, TransportError> {
        let mut url = self.config.url().clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidBaseUrl {
                url: self.config.url().to_string(),
            })?
            .clear()
            .extend(PERMISSIONS_PATH)
            .extend([bug_id.as_str(), account_id.as_str()]);
        Ok(url)
    }
}

impl BugTrackerClient for HttpBugzillaClient {
    fn check_permissions(
        &self,
        bug_id: &BugId,
        account_id: &ExternalAccountId,
    ) -> Result<RemoteLookupResult, TransportError> {
        let span = info_span!("bugzilla_permissions", bug_id = %bug_id, account_id = %account_id);
        let _guard = span.enter();

        let url = self.permissions_url(bug_id, account_id)?;
        debug!(url = %url, "Requesting bug permissions");

        let response = self
            .agent
            .get(url.as_str())
            .set(API_KEY_HEADER, self.config.api_key())
            .set("Accept", "application/json")
            .call();

        match response {
            Ok(response) => {
                let status_code = response.status();
                debug!(status_code, "Bugzilla responded");
                if status_code == STATUS_OK {
                    Ok(RemoteLookupResult::ok(response.into_string()?))
                } else {
                    Ok(RemoteLookupResult::status(status_code))
                }
            }
            // ureq reports 4xx/5xx as errors; for us they are just statuses
            Err(ureq::Error::Status(status_code, _)) => {
                debug!(status_code, "Bugzilla responded with error status");
                Ok(RemoteLookupResult::status(status_code))
            }
            Err(ureq::Error::Transport(source)) => Err(TransportError::Request {
                url: url.to_string(),
                source: Box::new(source),
            }),
        }
    }
}
