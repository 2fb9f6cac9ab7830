use super::AnalyticsStore;
use crate::{
    error::ReportResult,
    performance_comparison::{PersonaComparison, RevenueRank},
};

impl AnalyticsStore {
    // ── Performance comparison ─────────────────────────────────

    pub fn persona_comparison(&self) -> ReportResult<Vec<PersonaComparison>> {
        let mut stmt = self.conn.prepare(
            "SELECT persona,
                    COUNT(*),
                    ROUND(AVG(total_playtime_hours), 1),
                    ROUND(AVG(lifetime_value), 2),
                    ROUND(AVG(avg_session_duration), 1),
                    ROUND(AVG(pvp_ratio) * 100, 1),
                    ROUND(AVG(social_score), 2),
                    ROUND(AVG(total_achievements), 0)
             FROM v_persona_assignment
             GROUP BY persona
             ORDER BY persona ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PersonaComparison {
                    name: row.get(0)?,
                    population: row.get(1)?,
                    playtime: row.get(2)?,
                    ltv: row.get(3)?,
                    session: row.get(4)?,
                    pvp: row.get(5)?,
                    social: row.get(6)?,
                    achievements: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Total lifetime value per persona, highest first.
    pub fn revenue_by_persona(&self) -> ReportResult<Vec<RevenueRank>> {
        let mut stmt = self.conn.prepare(
            "SELECT persona, ROUND(SUM(lifetime_value), 2) AS revenue
             FROM v_persona_assignment
             GROUP BY persona
             ORDER BY revenue DESC, persona ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RevenueRank {
                    persona: row.get(0)?,
                    revenue: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
