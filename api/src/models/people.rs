//! Coaches, injuries, sidelined spells, transfers and trophies.
use super::{ApiResponse, Birth, LeagueRef, TeamRef};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type CoachesResponse = ApiResponse<Vec<Coach>>;
pub type InjuriesResponse = ApiResponse<Vec<Injury>>;
pub type SidelinedResponse = ApiResponse<Vec<Sidelined>>;
pub type TransfersResponse = ApiResponse<Vec<TransferHistory>>;
pub type TrophiesResponse = ApiResponse<Vec<Trophy>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Coach {
    pub id: i64,
    pub name: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub birth: Birth,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub photo: String,
    pub team: TeamRef,
    pub career: Vec<CareerSpell>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CareerSpell {
    pub team: TeamRef,
    pub start: String,
    /// Empty while the spell is ongoing.
    pub end: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Injury {
    pub player: InjuredPlayer,
    pub team: TeamRef,
    pub fixture: InjuryFixture,
    pub league: LeagueRef,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InjuredPlayer {
    pub id: i64,
    pub name: String,
    pub photo: String,
    /// "Missing Fixture" or "Questionable".
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InjuryFixture {
    pub id: i64,
    pub timezone: String,
    /// `None` when the field is missing or null.
    pub date: Option<DateTime<FixedOffset>>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Sidelined {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferHistory {
    pub player: TransferPlayer,
    /// `None` when the field is missing or null.
    pub update: Option<DateTime<FixedOffset>>,
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferPlayer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Transfer {
    pub date: String,
    /// Fee or "Loan", "Free", "N/A".
    #[serde(rename = "type")]
    pub kind: String,
    pub teams: TransferTeams,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferTeams {
    #[serde(rename = "in")]
    pub joined: TeamRef,
    #[serde(rename = "out")]
    pub left: TeamRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Trophy {
    pub league: String,
    pub country: String,
    pub season: String,
    pub place: String,
}
