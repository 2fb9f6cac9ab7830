use super::AnalyticsStore;
use crate::{
    error::ReportResult,
    segment_overview::{
        EngagementCount, Kpi, MonetizationTier, PersonaSummary, PlatformSummary, RfmSegmentCount,
    },
};
use rusqlite::params;

impl AnalyticsStore {
    // ── Segment overview ───────────────────────────────────────

    pub fn persona_distribution(&self) -> ReportResult<Vec<PersonaSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT persona, COUNT(*) AS count,
                    ROUND(AVG(lifetime_value), 2),
                    ROUND(SUM(lifetime_value), 2)
             FROM v_persona_assignment
             GROUP BY persona
             ORDER BY count DESC, persona ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PersonaSummary {
                    name: row.get(0)?,
                    count: row.get(1)?,
                    avg_ltv: row.get(2)?,
                    total_ltv: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn engagement_levels(&self) -> ReportResult<Vec<EngagementCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT engagement_level, COUNT(*)
             FROM v_engagement_segments
             GROUP BY engagement_level
             ORDER BY engagement_level ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EngagementCount {
                    level: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn monetization_tiers(&self) -> ReportResult<Vec<MonetizationTier>> {
        let mut stmt = self.conn.prepare(
            "SELECT monetization_tier, COUNT(*), ROUND(SUM(lifetime_value), 2)
             FROM v_monetization_segments
             GROUP BY monetization_tier
             ORDER BY monetization_tier ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MonetizationTier {
                    tier: row.get(0)?,
                    count: row.get(1)?,
                    revenue: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn rfm_segments(&self) -> ReportResult<Vec<RfmSegmentCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT rfm_segment, COUNT(*) AS count, action_priority
             FROM v_rfm_segments
             GROUP BY rfm_segment, action_priority
             ORDER BY count DESC, rfm_segment ASC, action_priority ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RfmSegmentCount {
                    segment: row.get(0)?,
                    count: row.get(1)?,
                    priority: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn platform_distribution(&self) -> ReportResult<Vec<PlatformSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT platform, COUNT(*), ROUND(AVG(lifetime_value), 2)
             FROM players
             GROUP BY platform
             ORDER BY platform ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PlatformSummary {
                    platform: row.get(0)?,
                    count: row.get(1)?,
                    avg_ltv: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Population-wide KPI row. `status` is the account status counted as active.
    pub fn kpi_summary(&self, status: &str) -> ReportResult<Kpi> {
        let kpi = self.conn.query_row(
            "SELECT COUNT(*),
                    COUNT(CASE WHEN account_status = ?1 THEN 1 END),
                    ROUND(SUM(lifetime_value), 2),
                    ROUND(AVG(lifetime_value), 2),
                    ROUND(AVG(total_playtime_hours), 1)
             FROM players",
            params![status],
            |row| {
                Ok(Kpi {
                    total_players: row.get(0)?,
                    active_players: row.get(1)?,
                    total_revenue: row.get(2)?,
                    avg_ltv: row.get(3)?,
                    avg_playtime: row.get(4)?,
                })
            },
        )?;
        Ok(kpi)
    }
}
