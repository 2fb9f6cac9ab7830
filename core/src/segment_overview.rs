//! Segment overview report — population split by every segmentation
//! dimension plus the headline KPI row.
//!
//! Output: `segment_overview.json`.

use crate::{
    clock::ReportClock,
    error::ReportResult,
    store::AnalyticsStore,
    types::{PersonaName, Timestamp},
};
use serde::{Deserialize, Serialize};

/// Account status counted as an active player. Exact, case-sensitive match.
pub const ACTIVE_STATUS: &str = "active";

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSummary {
    pub name: Option<PersonaName>,
    pub count: i64,
    pub avg_ltv: Option<f64>,
    pub total_ltv: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementCount {
    pub level: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetizationTier {
    pub tier: Option<String>,
    pub count: i64,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmSegmentCount {
    pub segment: Option<String>,
    pub count: i64,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: Option<String>,
    pub count: i64,
    pub avg_ltv: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub total_players: i64,
    pub active_players: i64,
    pub total_revenue: Option<f64>,
    pub avg_ltv: Option<f64>,
    pub avg_playtime: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOverviewReport {
    pub personas: Vec<PersonaSummary>,
    pub engagement: Vec<EngagementCount>,
    pub monetization: Vec<MonetizationTier>,
    pub rfm: Vec<RfmSegmentCount>,
    pub platforms: Vec<PlatformSummary>,
    pub kpi: Kpi,
    pub generated_at: Timestamp,
}

// ── Builder ──────────────────────────────────────────────────────────────────

pub fn build_segment_overview(
    store: &AnalyticsStore,
    clock: &dyn ReportClock,
) -> ReportResult<SegmentOverviewReport> {
    let personas = store.persona_distribution()?;
    let engagement = store.engagement_levels()?;
    let monetization = store.monetization_tiers()?;
    let rfm = store.rfm_segments()?;
    let platforms = store.platform_distribution()?;
    let kpi = store.kpi_summary(ACTIVE_STATUS)?;

    log::debug!(
        "overview: personas={} engagement={} monetization={} rfm={} platforms={} players={}",
        personas.len(),
        engagement.len(),
        monetization.len(),
        rfm.len(),
        platforms.len(),
        kpi.total_players,
    );

    Ok(SegmentOverviewReport {
        personas,
        engagement,
        monetization,
        rfm,
        platforms,
        kpi,
        generated_at: clock.now(),
    })
}
