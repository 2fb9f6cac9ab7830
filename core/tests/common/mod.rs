//! Shared fixtures for the integration tests.
//!
//! Populations are seeded from a fixed u64 so every test sees the same
//! players on every run.

#![allow(dead_code)]

use chrono::NaiveDate;
use dashboard_core::{clock::FixedClock, store::AnalyticsStore};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA: &str = include_str!("../fixtures/player_analytics.sql");

pub const PLATFORMS: [&str; 4] = ["pc", "ps5", "xbox", "mobile"];
pub const PERSONAS: [&str; 5] = ["Casual", "Competitor", "Explorer", "Socializer", "Whale"];
pub const GAME_MODES: [&str; 7] = [
    "arena", "battle_royale", "campaign", "co_op", "creative", "ranked", "tutorial",
];

#[derive(Debug, Clone)]
pub struct PlayerFixture {
    pub id: String,
    pub platform: String,
    pub status: String,
    pub ltv: f64,
    pub playtime: f64,
    pub persona: Option<String>,
    pub engagement: Option<String>,
    pub tier: Option<String>,
    pub rfm: Option<(String, String)>,
    pub session_minutes: f64,
    pub pvp_ratio: f64,
    pub social_score: f64,
    pub achievements: i64,
}

impl PlayerFixture {
    pub fn new(id: &str, persona: &str, ltv: f64) -> Self {
        Self {
            id: id.into(),
            platform: "pc".into(),
            status: "active".into(),
            ltv,
            playtime: 10.0,
            persona: Some(persona.into()),
            engagement: Some("medium".into()),
            tier: Some("free".into()),
            rfm: Some(("Loyal".into(), "medium".into())),
            session_minutes: 30.0,
            pvp_ratio: 0.5,
            social_score: 1.0,
            achievements: 10,
        }
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.into();
        self
    }

    pub fn playtime(mut self, hours: f64) -> Self {
        self.playtime = hours;
        self
    }

    pub fn behaviour(mut self, session_minutes: f64, pvp_ratio: f64, social_score: f64) -> Self {
        self.session_minutes = session_minutes;
        self.pvp_ratio = pvp_ratio;
        self.social_score = social_score;
        self
    }

    pub fn achievements(mut self, n: i64) -> Self {
        self.achievements = n;
        self
    }

    pub fn tier(mut self, tier: &str) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn engagement(mut self, level: &str) -> Self {
        self.engagement = Some(level.into());
        self
    }

    pub fn rfm(mut self, segment: &str, priority: &str) -> Self {
        self.rfm = Some((segment.into(), priority.into()));
        self
    }

    /// Labelled in every view but with a NULL persona.
    pub fn no_persona(mut self) -> Self {
        self.persona = None;
        self
    }

    /// Player exists in `players` but not in any segmentation view.
    pub fn unlabelled(mut self) -> Self {
        self.persona = None;
        self.engagement = None;
        self.tier = None;
        self.rfm = None;
        self
    }
}

/// A player session: (player_id, game_mode).
pub type SessionFixture = (String, String);

pub fn session(player_id: &str, mode: &str) -> SessionFixture {
    (player_id.into(), mode.into())
}

pub fn seed_connection(conn: &Connection, players: &[PlayerFixture], sessions: &[SessionFixture]) {
    conn.execute_batch(SCHEMA).expect("fixture schema");
    for p in players {
        conn.execute(
            "INSERT INTO players (player_id, platform, account_status, lifetime_value, total_playtime_hours)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![p.id, p.platform, p.status, p.ltv, p.playtime],
        )
        .expect("insert player");
        let (rfm_segment, action_priority) = match &p.rfm {
            Some((s, a)) => (Some(s.as_str()), Some(a.as_str())),
            None => (None, None),
        };
        conn.execute(
            "INSERT INTO player_labels (
                player_id, persona, engagement_level, monetization_tier, rfm_segment,
                action_priority, avg_session_duration, pvp_ratio, social_score, total_achievements
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                p.id,
                p.persona,
                p.engagement,
                p.tier,
                rfm_segment,
                action_priority,
                p.session_minutes,
                p.pvp_ratio,
                p.social_score,
                p.achievements,
            ],
        )
        .expect("insert labels");
    }
    for (player_id, mode) in sessions {
        conn.execute(
            "INSERT INTO player_sessions (player_id, game_mode, duration_minutes) VALUES (?1, ?2, 25.0)",
            params![player_id, mode],
        )
        .expect("insert session");
    }
}

/// In-memory store holding exactly `players` and `sessions`.
pub fn store_with(players: &[PlayerFixture], sessions: &[SessionFixture]) -> AnalyticsStore {
    let conn = Connection::open_in_memory().expect("in-memory db");
    seed_connection(&conn, players, sessions);
    AnalyticsStore::from_connection(conn)
}

/// In-memory store whose `v_persona_assignment` keeps NULL persona labels.
pub fn store_with_null_personas(
    players: &[PlayerFixture],
    sessions: &[SessionFixture],
) -> AnalyticsStore {
    let conn = Connection::open_in_memory().expect("in-memory db");
    seed_connection(&conn, players, sessions);
    conn.execute_batch(
        "DROP VIEW v_persona_assignment;
         CREATE VIEW v_persona_assignment AS
         SELECT p.player_id, l.persona, p.total_playtime_hours, l.avg_session_duration,
                l.pvp_ratio, l.social_score, l.total_achievements, p.lifetime_value
         FROM players p
         JOIN player_labels l ON l.player_id = p.player_id;",
    )
    .expect("unfiltered persona view");
    AnalyticsStore::from_connection(conn)
}

/// Write a database file the generator can open read-only.
pub fn write_db_file(path: &Path, players: &[PlayerFixture], sessions: &[SessionFixture]) {
    let conn = Connection::open(path).expect("create db file");
    seed_connection(&conn, players, sessions);
    conn.close().expect("close db file");
}

/// Seeded population of `n` players with 0..12 sessions each.
/// Roughly one in ten players carries no segmentation labels.
pub fn random_population(seed: u64, n: usize) -> (Vec<PlayerFixture>, Vec<SessionFixture>) {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut players = Vec::with_capacity(n);
    let mut sessions = Vec::new();

    for i in 0..n {
        let id = format!("P{i:05}");
        let persona = PERSONAS[rng.gen_range(0..PERSONAS.len())];
        let ltv = (rng.gen_range(0.0..500.0_f64) * 100.0).round() / 100.0;
        let status = if rng.gen_bool(0.7) { "active" } else { "churned" };
        let mut player = PlayerFixture::new(&id, persona, ltv)
            .platform(PLATFORMS[rng.gen_range(0..PLATFORMS.len())])
            .status(status)
            .playtime(rng.gen_range(0.0..400.0))
            .behaviour(
                rng.gen_range(5.0..90.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..10.0),
            )
            .achievements(rng.gen_range(0..200))
            .tier(if ltv > 250.0 { "whale" } else { "minnow" })
            .engagement(if rng.gen_bool(0.5) { "high" } else { "low" })
            .rfm(
                if rng.gen_bool(0.5) { "Champions" } else { "At Risk" },
                if rng.gen_bool(0.5) { "high" } else { "low" },
            );
        if rng.gen_bool(0.1) {
            player = player.unlabelled();
        }

        for _ in 0..rng.gen_range(0..12) {
            sessions.push(session(&id, GAME_MODES[rng.gen_range(0..GAME_MODES.len())]));
        }
        players.push(player);
    }
    (players, sessions)
}

pub fn fixed_clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .expect("valid date")
            .and_hms_micro_opt(9, 30, 0, 0)
            .expect("valid time"),
    )
}

pub const FIXED_STAMP: &str = "2025-01-15T09:30:00.000000";
