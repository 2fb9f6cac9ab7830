//! Report clock — supplies the `generatedAt` stamp for each report.
//!
//! Production uses wall-clock local time. Tests and reproducible exports
//! use a fixed clock so output is byte-identical across runs.

use crate::types::Timestamp;
use chrono::{Local, NaiveDateTime};

/// ISO-8601 without offset, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub trait ReportClock {
    /// Current time as an ISO-8601 string.
    fn now(&self) -> Timestamp;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ReportClock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl ReportClock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at.format(TIMESTAMP_FORMAT).to_string()
    }
}
