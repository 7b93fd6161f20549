use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single hostname+index combination mapped to one concrete URL to probe
///
/// Candidates exist only transiently while being probed; they are never
/// persisted standalone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: String,
    pub index: u32,
    pub url: String,
}

/// Classification of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// HTTP 200 with the manifest marker present in the body
    Valid,
    /// A response arrived but did not satisfy the Valid predicate
    Invalid { reason: String },
    /// Transport-level failure (DNS, connect, timeout, TLS, body read)
    Errored { reason: String },
}

impl ProbeOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ProbeOutcome::Valid)
    }
}

/// Two-line record appended to the playlist for each confirmed candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub display_name: String,
    pub url: String,
}

impl PlaylistEntry {
    pub fn for_candidate(candidate: &Candidate) -> Self {
        Self {
            display_name: format!("{} Channel {}", candidate.source, candidate.index),
            url: candidate.url.clone(),
        }
    }

    /// The EXTINF info line preceding the URL line
    pub fn extinf_line(&self) -> String {
        format!("#EXTINF:-1,{}", self.display_name)
    }
}

/// One error-log line for a candidate that failed validation or probing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub url: String,
    pub reason: String,
}

impl LogEntry {
    /// Format the log line as `{marker} {reason}: {url}`
    pub fn format(&self, marker: &str) -> String {
        format!("{} {}: {}", marker, self.reason, self.url)
    }
}

/// Summary reported at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub valid_count: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_entry_display_name() {
        let candidate = Candidate {
            source: "example.test".to_string(),
            index: 7,
            url: "https://example.test/nfs/premium7/mono.m3u8".to_string(),
        };

        let entry = PlaylistEntry::for_candidate(&candidate);
        assert_eq!(entry.display_name, "example.test Channel 7");
        assert_eq!(entry.extinf_line(), "#EXTINF:-1,example.test Channel 7");
        assert_eq!(entry.url, candidate.url);
    }

    #[test]
    fn test_log_entry_format() {
        let entry = LogEntry {
            url: "https://example.test/nfs/premium2/mono.m3u8".to_string(),
            reason: "HTTP 404".to_string(),
        };

        assert_eq!(
            entry.format("[invalid]"),
            "[invalid] HTTP 404: https://example.test/nfs/premium2/mono.m3u8"
        );
    }
}
