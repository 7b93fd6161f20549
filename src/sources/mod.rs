//! Source registry
//!
//! The registry is an ordered, read-only sequence of hostnames fixed at
//! configuration load. Scan order is source-major, index-minor, ascending,
//! so output files are reproducible run-to-run for a fixed server state.

pub mod candidates;

use crate::models::Candidate;

/// Production hostnames probed when no configuration overrides them
pub const DEFAULT_SOURCES: &[&str] = &[
    "nfsnew.newkso.ru",
    "windnew.newkso.ru",
    "zekonew.newkso.ru",
    "dokko1new.newkso.ru",
    "ddy6new.newkso.ru",
];

/// Ordered, read-only sequence of hostnames to probe
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<String>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// All candidates of a full scan, in scan order
    pub fn candidates<'a>(
        &'a self,
        template: &'a str,
        max_index: u32,
    ) -> impl Iterator<Item = Candidate> + 'a {
        self.sources
            .iter()
            .flat_map(move |source| candidates::for_source(template, source, max_index))
    }
}
