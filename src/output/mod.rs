//! Scan result output
//!
//! Consumes classified candidates in generation order and appends to the
//! two output streams: confirmed candidates become playlist entry pairs,
//! everything else becomes one error-log line. Every candidate yields
//! exactly one record across the two files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::errors::{OutputError, OutputResult};
use crate::models::{Candidate, LogEntry, PlaylistEntry, ProbeOutcome};

/// First line of the playlist, written before any entries
pub const PLAYLIST_HEADER: &str = "#EXTM3U";

/// Error-log marker for endpoints that responded but failed validation
pub const INVALID_MARKER: &str = "[invalid]";

/// Error-log marker for endpoints that could not be reached
pub const PROBE_ERROR_MARKER: &str = "[probe-error]";

/// Appends scan results to the playlist and error-log files
pub struct ResultWriter {
    playlist: BufWriter<File>,
    playlist_path: PathBuf,
    error_log: BufWriter<File>,
    error_log_path: PathBuf,
    valid_count: u64,
}

impl ResultWriter {
    /// Open both output files and write the playlist format header
    ///
    /// The header goes out at open time so the playlist is well-formed
    /// even when the scan finds nothing.
    pub fn create(config: &OutputConfig) -> OutputResult<Self> {
        let playlist_file = File::create(&config.playlist_path)
            .map_err(|e| OutputError::create(&config.playlist_path, e))?;
        let error_log_file = File::create(&config.error_log_path)
            .map_err(|e| OutputError::create(&config.error_log_path, e))?;

        let mut writer = Self {
            playlist: BufWriter::new(playlist_file),
            playlist_path: config.playlist_path.clone(),
            error_log: BufWriter::new(error_log_file),
            error_log_path: config.error_log_path.clone(),
            valid_count: 0,
        };
        writer.write_playlist_line(PLAYLIST_HEADER)?;

        Ok(writer)
    }

    /// Append exactly one record for a classified candidate
    pub fn record(&mut self, candidate: &Candidate, outcome: &ProbeOutcome) -> OutputResult<()> {
        match outcome {
            ProbeOutcome::Valid => {
                let entry = PlaylistEntry::for_candidate(candidate);
                self.write_playlist_line(&entry.extinf_line())?;
                self.write_playlist_line(&entry.url)?;
                self.valid_count += 1;
            }
            ProbeOutcome::Invalid { reason } => {
                self.write_log_entry(INVALID_MARKER, candidate, reason)?;
            }
            ProbeOutcome::Errored { reason } => {
                self.write_log_entry(PROBE_ERROR_MARKER, candidate, reason)?;
            }
        }

        Ok(())
    }

    /// Running count of Valid outcomes recorded so far
    pub fn valid_count(&self) -> u64 {
        self.valid_count
    }

    /// Flush both streams and return the final valid count
    pub fn finish(mut self) -> OutputResult<u64> {
        self.playlist
            .flush()
            .map_err(|e| OutputError::write(&self.playlist_path, e))?;
        self.error_log
            .flush()
            .map_err(|e| OutputError::write(&self.error_log_path, e))?;

        Ok(self.valid_count)
    }

    fn write_playlist_line(&mut self, line: &str) -> OutputResult<()> {
        writeln!(self.playlist, "{}", line).map_err(|e| OutputError::write(&self.playlist_path, e))
    }

    fn write_log_entry(
        &mut self,
        marker: &str,
        candidate: &Candidate,
        reason: &str,
    ) -> OutputResult<()> {
        let entry = LogEntry {
            url: candidate.url.clone(),
            reason: reason.to_string(),
        };
        writeln!(self.error_log, "{}", entry.format(marker))
            .map_err(|e| OutputError::write(&self.error_log_path, e))
    }
}
