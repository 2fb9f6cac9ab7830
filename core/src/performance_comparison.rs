//! Performance comparison report — side-by-side persona metrics and a
//! revenue ranking.
//!
//! The ranking comes from its own query and is not re-sorted from the
//! comparison rows. Output: `performance_comparison.json`.

use crate::{
    clock::ReportClock,
    error::ReportResult,
    store::AnalyticsStore,
    types::{PersonaName, Timestamp},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaComparison {
    pub name: Option<PersonaName>,
    pub population: i64,
    pub playtime: Option<f64>,
    pub ltv: Option<f64>,
    pub session: Option<f64>,
    pub pvp: Option<f64>,
    pub social: Option<f64>,
    pub achievements: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRank {
    pub persona: Option<PersonaName>,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceComparisonReport {
    pub personas: Vec<PersonaComparison>,
    pub revenue: Vec<RevenueRank>,
    pub generated_at: Timestamp,
}

pub fn build_performance_comparison(
    store: &AnalyticsStore,
    clock: &dyn ReportClock,
) -> ReportResult<PerformanceComparisonReport> {
    let personas = store.persona_comparison()?;
    let revenue = store.revenue_by_persona()?;
    log::debug!("performance: personas={} ranked={}", personas.len(), revenue.len());

    Ok(PerformanceComparisonReport {
        personas,
        revenue,
        generated_at: clock.now(),
    })
}
