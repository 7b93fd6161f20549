//! Stream endpoint probing and classification
//!
//! This module issues one bounded-timeout HTTP GET per candidate and
//! classifies the result. HTTP 200 plus the manifest marker in the body is
//! the sole Valid predicate; there is no further manifest parsing.
//! Per-candidate failures are outcomes, not errors, and never interrupt
//! the scan of subsequent candidates.

use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::config::ProbeConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Candidate, ProbeOutcome};

/// Literal text that marks a response body as a live-stream manifest
pub const MANIFEST_MARKER: &str = "#EXTM3U";

/// Probes candidate stream URLs and classifies the responses
///
/// Stateless between candidates; the only shared state is the underlying
/// connection pool of the HTTP client.
pub struct StreamProber {
    client: Client,
}

impl StreamProber {
    pub fn new(config: &ProbeConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(referer) = &config.referer {
            let value = HeaderValue::from_str(referer).map_err(|e| {
                AppError::configuration(format!("invalid referer header value: {}", e))
            })?;
            headers.insert(REFERER, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Probe a single candidate with one GET request, no retries
    ///
    /// Also emits the per-candidate progress line; the scan has no other
    /// progress signal.
    pub async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        let outcome = match self.client.get(&candidate.url).send().await {
            Ok(response) => {
                let status = response.status();
                if status != StatusCode::OK {
                    // Body is irrelevant for non-200 responses
                    classify(status, "")
                } else {
                    match response.text().await {
                        Ok(body) => classify(status, &body),
                        Err(e) => ProbeOutcome::Errored {
                            reason: e.to_string(),
                        },
                    }
                }
            }
            Err(e) => ProbeOutcome::Errored {
                reason: e.to_string(),
            },
        };

        match &outcome {
            ProbeOutcome::Valid => info!("Valid stream endpoint: {}", candidate.url),
            ProbeOutcome::Invalid { reason } => {
                info!("Not valid ({}): {}", reason, candidate.url)
            }
            ProbeOutcome::Errored { reason } => {
                warn!("Probe error ({}): {}", reason, candidate.url)
            }
        }

        outcome
    }
}

/// Classification rule for one received response
///
/// Valid iff the status is 200 and the body contains the manifest marker;
/// any other received response is Invalid. Transport failures never reach
/// this function.
pub fn classify(status: StatusCode, body: &str) -> ProbeOutcome {
    if status != StatusCode::OK {
        return ProbeOutcome::Invalid {
            reason: format!("HTTP {}", status.as_u16()),
        };
    }

    if body.contains(MANIFEST_MARKER) {
        ProbeOutcome::Valid
    } else {
        ProbeOutcome::Invalid {
            reason: format!("missing {} marker", MANIFEST_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_manifest_response_as_valid() {
        let body = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=1280000\nchunk.m3u8\n";
        assert_eq!(classify(StatusCode::OK, body), ProbeOutcome::Valid);
    }

    #[test]
    fn test_classify_marker_anywhere_in_body_as_valid() {
        // The substring check is the whole predicate; position is irrelevant
        let body = "ignored preamble #EXTM3U trailing";
        assert_eq!(classify(StatusCode::OK, body), ProbeOutcome::Valid);
    }

    #[test]
    fn test_classify_ok_without_marker_as_invalid() {
        let outcome = classify(StatusCode::OK, "<html>placeholder page</html>");
        match outcome {
            ProbeOutcome::Invalid { reason } => assert!(reason.contains("#EXTM3U")),
            other => panic!("Expected invalid outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_ok_status_as_invalid() {
        let outcome = classify(StatusCode::NOT_FOUND, "");
        match outcome {
            ProbeOutcome::Invalid { reason } => assert_eq!(reason, "HTTP 404"),
            other => panic!("Expected invalid outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_prober_rejects_invalid_referer() {
        let config = ProbeConfig {
            timeout_secs: 12,
            user_agent: "test-agent".to_string(),
            referer: Some("bad\nheader".to_string()),
        };

        assert!(matches!(
            StreamProber::new(&config),
            Err(AppError::Configuration { .. })
        ));
    }
}
