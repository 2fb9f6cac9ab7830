use super::AnalyticsStore;
use crate::{
    error::ReportResult,
    persona_deepdive::{GameModeCount, PersonaStats, PlatformCount},
    types::PersonaName,
};
use rusqlite::params;

impl AnalyticsStore {
    // ── Persona deep-dive ──────────────────────────────────────

    /// Distinct persona labels, including `None` when the view carries NULL labels.
    pub fn distinct_personas(&self) -> ReportResult<Vec<Option<PersonaName>>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT persona FROM v_persona_assignment ORDER BY persona ASC",
        )?;
        let personas = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(personas)
    }

    pub fn persona_stats(&self, persona: Option<&str>) -> ReportResult<PersonaStats> {
        let stats = self.conn.query_row(
            "SELECT COUNT(*),
                    ROUND(AVG(total_playtime_hours), 1),
                    ROUND(AVG(lifetime_value), 2),
                    ROUND(AVG(avg_session_duration), 1),
                    ROUND(AVG(pvp_ratio) * 100, 1),
                    ROUND(AVG(social_score), 2),
                    ROUND(SUM(lifetime_value), 2)
             FROM v_persona_assignment
             WHERE persona IS ?1",
            params![persona],
            |row| {
                Ok(PersonaStats {
                    population: row.get(0)?,
                    avg_playtime: row.get(1)?,
                    avg_ltv: row.get(2)?,
                    avg_session: row.get(3)?,
                    pvp_pct: row.get(4)?,
                    social_score: row.get(5)?,
                    total_revenue: row.get(6)?,
                })
            },
        )?;
        Ok(stats)
    }

    pub fn persona_platforms(&self, persona: Option<&str>) -> ReportResult<Vec<PlatformCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.platform, COUNT(*)
             FROM v_persona_assignment pa
             JOIN players p ON pa.player_id = p.player_id
             WHERE pa.persona IS ?1
             GROUP BY p.platform
             ORDER BY p.platform ASC",
        )?;
        let rows = stmt
            .query_map(params![persona], |row| {
                Ok(PlatformCount {
                    platform: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Most-played game modes for a persona by session count, at most `limit`.
    pub fn persona_top_game_modes(
        &self,
        persona: Option<&str>,
        limit: u32,
    ) -> ReportResult<Vec<GameModeCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT ps.game_mode, COUNT(*) AS count
             FROM v_persona_assignment pa
             JOIN player_sessions ps ON pa.player_id = ps.player_id
             WHERE pa.persona IS ?1
             GROUP BY ps.game_mode
             ORDER BY count DESC, ps.game_mode ASC
             LIMIT ?2",
        )?;
        let rows = stmt
            .query_map(params![persona, limit], |row| {
                Ok(GameModeCount {
                    mode: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
