use super::{ApiResponse, TeamRef};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type StandingsResponse = ApiResponse<Vec<StandingsEntry>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StandingsEntry {
    pub league: StandingsLeague,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StandingsLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: String,
    pub season: i64,
    /// One table per group; single-table leagues have one entry.
    pub standings: Vec<Vec<Standing>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Standing {
    pub rank: i64,
    pub team: TeamRef,
    pub points: i64,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: i64,
    pub group: String,
    pub form: String,
    pub status: String,
    pub description: String,
    pub all: StandingRecord,
    pub home: StandingRecord,
    pub away: StandingRecord,
    /// Time of the last table refresh. Timestamps have no empty value, so
    /// a missing or null field decodes as `None`.
    pub update: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StandingRecord {
    pub played: i64,
    pub win: i64,
    pub draw: i64,
    pub lose: i64,
    pub goals: GoalCount,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GoalCount {
    #[serde(rename = "for")]
    pub scored: i64,
    pub against: i64,
}
