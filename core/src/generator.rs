//! The report generator — one linear export pass.
//!
//! EXECUTION ORDER (fixed):
//!   1. Open the analytics database read-only
//!   2. Create the output directory
//!   3. Segment overview      → segment_overview.json
//!   4. Persona deep-dive     → persona_deepdive.json
//!   5. Performance comparison → performance_comparison.json
//!   6. Close the connection
//!
//! RULES:
//!   - Every failure is fatal and returned to the caller; nothing is retried.
//!   - Each report is written as soon as it is built, so a later failure
//!     leaves earlier files on disk. The progress callback has already
//!     seen every file that made it.

use crate::{
    clock::{ReportClock, SystemClock},
    config::{ReportConfig, ReportKind},
    error::ReportResult,
    output::{ensure_output_dir, write_report, WrittenFile},
    performance_comparison::build_performance_comparison,
    persona_deepdive::build_persona_deepdive,
    segment_overview::build_segment_overview,
    store::AnalyticsStore,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

pub struct ReportGenerator<C: ReportClock = SystemClock> {
    pub config: ReportConfig,
    clock: C,
}

impl ReportGenerator<SystemClock> {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: ReportClock> ReportGenerator<C> {
    pub fn with_clock(config: ReportConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Open the configured database and export all three reports.
    pub fn run(&self) -> ReportResult<RunSummary> {
        self.run_with_progress(|_| {})
    }

    /// As [`run`](Self::run), calling `on_written` as soon as each file is on disk.
    pub fn run_with_progress<F>(&self, on_written: F) -> ReportResult<RunSummary>
    where
        F: FnMut(&WrittenFile),
    {
        log::info!(
            "generator: db={} out={}",
            self.config.db_path.display(),
            self.config.output_dir.display()
        );
        let store = AnalyticsStore::open(&self.config.db_path)?;
        self.run_with_store(store, on_written)
    }

    /// Export all three reports from an already-open store, then close it.
    pub fn run_with_store<F>(&self, store: AnalyticsStore, mut on_written: F) -> ReportResult<RunSummary>
    where
        F: FnMut(&WrittenFile),
    {
        let dir = &self.config.output_dir;
        ensure_output_dir(dir)?;

        let mut files = Vec::with_capacity(ReportKind::ALL.len());
        for kind in ReportKind::ALL {
            let written = self.export(&store, kind)?;
            on_written(&written);
            files.push(written);
        }

        store.close()?;
        log::info!("generator: wrote {} files to {}", files.len(), dir.display());
        Ok(RunSummary {
            output_dir: dir.clone(),
            files,
        })
    }

    fn export(&self, store: &AnalyticsStore, kind: ReportKind) -> ReportResult<WrittenFile> {
        let dir = &self.config.output_dir;
        match kind {
            ReportKind::SegmentOverview => {
                write_report(dir, kind, &build_segment_overview(store, &self.clock)?)
            }
            ReportKind::PersonaDeepdive => {
                write_report(dir, kind, &build_persona_deepdive(store, &self.clock)?)
            }
            ReportKind::PerformanceComparison => {
                write_report(dir, kind, &build_performance_comparison(store, &self.clock)?)
            }
        }
    }
}
