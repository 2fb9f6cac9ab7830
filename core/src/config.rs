use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "data/player_analytics.db";
pub const DEFAULT_OUTPUT_DIR: &str = "dashboards/assets";

/// The three dashboard documents, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    SegmentOverview,
    PersonaDeepdive,
    PerformanceComparison,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::SegmentOverview,
        ReportKind::PersonaDeepdive,
        ReportKind::PerformanceComparison,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::SegmentOverview       => "segment_overview.json",
            Self::PersonaDeepdive       => "persona_deepdive.json",
            Self::PerformanceComparison => "performance_comparison.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            output_dir: default_output_dir(),
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file. Missing keys fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn output_path(&self, kind: ReportKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}
