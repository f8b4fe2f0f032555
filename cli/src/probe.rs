//! Blocking HTTP probes.
//!
//! Probes never surface as `Err`: every network mishap collapses into a
//! [`FetchOutcome`] variant so a failed endpoint can never halt the check
//! sequence or change the exit code.

use std::time::Duration;

/// Fully resolved result of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint answered with a success status.
    Success {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The platform responded, but with a non-success status.
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim (may be empty).
        body: String,
    },
    /// No response at all. DNS, TLS, timeout and connection errors are
    /// deliberately not distinguished.
    Unreachable {
        /// Coarse transport error text for the operator.
        reason: String,
    },
}

impl FetchOutcome {
    /// Whether the endpoint answered with a success status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Status code when a response was obtained.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. } | Self::HttpError { status, .. } => Some(*status),
            Self::Unreachable { .. } => None,
        }
    }
}

/// Abstraction over the HTTP backend, enabling test doubles.
pub trait Fetch {
    /// Issue a GET and fully resolve it (response read or failure observed)
    /// before returning.
    fn get(&self, url: &str) -> FetchOutcome;
}

/// Production fetcher backed by a blocking `ureq` agent.
pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    /// Per-request cap so a wedged endpoint cannot stall the whole run.
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Build the shared agent.
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Self::TIMEOUT)
            .user_agent("shadowgoose-cli")
            .build();
        Self { agent }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for UreqFetcher {
    fn get(&self, url: &str) -> FetchOutcome {
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                match response.into_string() {
                    Ok(body) => FetchOutcome::Success { status, body },
                    Err(e) => FetchOutcome::Unreachable {
                        reason: format!("failed to read response body: {e}"),
                    },
                }
            }
            Err(ureq::Error::Status(status, response)) => FetchOutcome::HttpError {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            Err(e) => FetchOutcome::Unreachable {
                reason: e.to_string(),
            },
        }
    }
}
