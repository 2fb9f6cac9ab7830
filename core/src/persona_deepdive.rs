//! Persona deep-dive report — one bundle of behavioral metrics,
//! platform mix and favourite game modes per persona.
//!
//! Each persona is queried independently with its label bound as a
//! parameter. Players with a NULL label are grouped under `"null"`.
//! Output: `persona_deepdive.json`.

use crate::{
    clock::ReportClock,
    error::ReportResult,
    store::AnalyticsStore,
    types::{PersonaName, Timestamp},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of game modes listed per persona.
pub const TOP_GAME_MODES: u32 = 5;

/// Map key for players whose persona label is NULL.
pub const NULL_PERSONA_KEY: &str = "null";

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaStats {
    pub population: i64,
    pub avg_playtime: Option<f64>,
    pub avg_ltv: Option<f64>,
    pub avg_session: Option<f64>,
    /// Mean pvp ratio as a percentage.
    pub pvp_pct: Option<f64>,
    pub social_score: Option<f64>,
    pub total_revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCount {
    pub platform: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeCount {
    pub mode: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    #[serde(flatten)]
    pub stats: PersonaStats,
    pub platforms: Vec<PlatformCount>,
    pub game_modes: Vec<GameModeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDeepdiveReport {
    pub personas: BTreeMap<PersonaName, PersonaProfile>,
    pub generated_at: Timestamp,
}

// ── Builder ──────────────────────────────────────────────────────────────────

pub fn build_persona_profile(
    store: &AnalyticsStore,
    persona: Option<&str>,
) -> ReportResult<PersonaProfile> {
    let stats = store.persona_stats(persona)?;
    let platforms = store.persona_platforms(persona)?;
    let game_modes = store.persona_top_game_modes(persona, TOP_GAME_MODES)?;
    Ok(PersonaProfile {
        stats,
        platforms,
        game_modes,
    })
}

pub fn build_persona_deepdive(
    store: &AnalyticsStore,
    clock: &dyn ReportClock,
) -> ReportResult<PersonaDeepdiveReport> {
    let mut personas = BTreeMap::new();
    for persona in store.distinct_personas()? {
        let profile = build_persona_profile(store, persona.as_deref())?;
        let key = persona.unwrap_or_else(|| NULL_PERSONA_KEY.to_string());
        log::debug!(
            "deepdive: persona={key} population={} modes={}",
            profile.stats.population,
            profile.game_modes.len()
        );
        personas.insert(key, profile);
    }

    Ok(PersonaDeepdiveReport {
        personas,
        generated_at: clock.now(),
    })
}
