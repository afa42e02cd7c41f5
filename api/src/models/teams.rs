use super::{ApiResponse, HomeAway, HomeAwayTotal, LeagueRef, MinuteBreakdown, MinuteStat, TeamRef};
use crate::decode::Tolerant;
use serde::{Deserialize, Serialize};

pub type TeamsResponse = ApiResponse<Vec<TeamEntry>>;
pub type TeamStatisticsResponse = ApiResponse<TeamStatistics>;
pub type VenuesResponse = ApiResponse<Vec<Venue>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamEntry {
    pub team: Team,
    pub venue: Venue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub country: String,
    pub founded: i64,
    pub national: bool,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub capacity: i64,
    pub surface: String,
    pub image: String,
}

/// Season aggregate for one team in one league.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamStatistics {
    pub league: LeagueRef,
    pub team: TeamRef,
    /// Result letters, oldest first, e.g. "WDLWW".
    pub form: String,
    pub fixtures: FixtureTotals,
    pub goals: GoalsForAgainst,
    pub biggest: Biggest,
    pub clean_sheet: HomeAwayTotal,
    pub failed_to_score: HomeAwayTotal,
    pub penalty: PenaltyRecord,
    pub lineups: Vec<FormationUsage>,
    pub cards: CardsByMinute,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureTotals {
    pub played: HomeAwayTotal,
    pub wins: HomeAwayTotal,
    pub draws: HomeAwayTotal,
    pub loses: HomeAwayTotal,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GoalsForAgainst {
    #[serde(rename = "for")]
    pub scored: GoalTotals,
    pub against: GoalTotals,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GoalTotals {
    pub total: HomeAwayTotal,
    /// Averages arrive as strings such as "1.7".
    pub average: HomeAwayTotal<Tolerant>,
    pub minute: MinuteBreakdown,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Biggest {
    pub streak: Streak,
    pub wins: HomeAway<String>,
    pub loses: HomeAway<String>,
    pub goals: BiggestGoals,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Streak {
    pub wins: i64,
    pub draws: i64,
    pub loses: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BiggestGoals {
    #[serde(rename = "for")]
    pub scored: HomeAway<i64>,
    pub against: HomeAway<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PenaltyRecord {
    pub scored: MinuteStat,
    pub missed: MinuteStat,
    pub total: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FormationUsage {
    pub formation: String,
    pub played: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CardsByMinute {
    pub yellow: MinuteBreakdown,
    pub red: MinuteBreakdown,
}
