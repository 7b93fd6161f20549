//! Scan orchestration
//!
//! Wires the source registry, candidate generator, prober and result
//! writer into a single run over the full candidate space.

use chrono::Utc;
use futures::StreamExt;
use tracing::info;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RunSummary;
use crate::output::ResultWriter;
use crate::prober::StreamProber;
use crate::sources::SourceRegistry;

pub struct Scanner {
    config: Config,
}

impl Scanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run one full scan: every source, every index, exactly one probe and
    /// one output record per candidate
    pub async fn run(&self) -> AppResult<RunSummary> {
        let started_at = Utc::now();

        let registry = SourceRegistry::new(self.config.scan.sources.clone());
        let prober = StreamProber::new(&self.config.probe)?;
        let mut writer = ResultWriter::create(&self.config.output)?;

        let max_index = self.config.scan.max_index;
        let concurrency = self.config.scan.concurrency.max(1);

        info!(
            "Scanning {} candidate endpoints across {} sources (indices 1..={}, {} at a time)",
            registry.len() as u64 * max_index as u64,
            registry.len(),
            max_index,
            concurrency
        );

        // `buffered` dispatches up to `concurrency` probes at once but
        // yields results in submission order, so records always land in
        // source-major, index-minor order and the output files are
        // identical for every concurrency degree.
        let prober_ref = &prober;
        let mut outcomes = futures::stream::iter(
            registry.candidates(&self.config.scan.url_template, max_index),
        )
        .map(move |candidate| async move {
            let outcome = prober_ref.probe(&candidate).await;
            (candidate, outcome)
        })
        .buffered(concurrency);

        while let Some((candidate, outcome)) = outcomes.next().await {
            writer.record(&candidate, &outcome)?;
        }

        let valid_count = writer.finish()?;
        let finished_at = Utc::now();

        info!(
            "Scan complete: {} valid endpoints, playlist written to {}",
            valid_count,
            self.config.output.playlist_path.display()
        );

        Ok(RunSummary {
            valid_count,
            started_at,
            finished_at,
        })
    }
}
