use super::{ApiResponse, Birth, LeagueRef, TeamRef};
use crate::decode::Tolerant;
use serde::{Deserialize, Serialize};

pub type PlayersResponse = ApiResponse<Vec<PlayerEntry>>;
pub type PlayerSeasonsResponse = ApiResponse<Vec<i64>>;
pub type SquadsResponse = ApiResponse<Vec<Squad>>;
/// Shared by top scorers, assists, yellow cards and red cards.
pub type TopPlayersResponse = ApiResponse<Vec<PlayerEntry>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerEntry {
    pub player: Player,
    pub statistics: Vec<PlayerStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub birth: Birth,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub injured: bool,
    pub photo: String,
}

/// One team/league/season line of a player's record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerStatistics {
    pub team: TeamRef,
    pub league: LeagueRef,
    pub games: SeasonGames,
    pub substitutes: Substitutes,
    pub shots: Shots,
    pub goals: Goals,
    pub passes: Passes,
    pub tackles: Tackles,
    pub duels: Duels,
    pub dribbles: Dribbles,
    pub fouls: Fouls,
    pub cards: Cards,
    pub penalty: Penalty,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SeasonGames {
    // The API spells it this way.
    pub appearences: i64,
    pub lineups: i64,
    pub minutes: i64,
    pub number: Tolerant,
    pub position: String,
    pub rating: Tolerant,
    pub captain: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Substitutes {
    #[serde(rename = "in")]
    pub subbed_in: i64,
    #[serde(rename = "out")]
    pub subbed_out: i64,
    pub bench: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Shots {
    pub total: Tolerant,
    pub on: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Goals {
    pub total: Tolerant,
    pub conceded: Tolerant,
    pub assists: Tolerant,
    pub saves: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Passes {
    pub total: Tolerant,
    pub key: Tolerant,
    pub accuracy: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Tackles {
    pub total: Tolerant,
    pub blocks: Tolerant,
    pub interceptions: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Duels {
    pub total: Tolerant,
    pub won: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Dribbles {
    pub attempts: Tolerant,
    pub success: Tolerant,
    pub past: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Fouls {
    pub drawn: Tolerant,
    pub committed: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Cards {
    pub yellow: i64,
    pub yellowred: i64,
    pub red: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Penalty {
    pub won: Tolerant,
    // Upstream spelling.
    #[serde(rename = "commited")]
    pub committed: Tolerant,
    pub scored: Tolerant,
    pub missed: Tolerant,
    pub saved: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Squad {
    pub team: TeamRef,
    pub players: Vec<SquadPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SquadPlayer {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub number: i64,
    pub position: String,
    pub photo: String,
}
