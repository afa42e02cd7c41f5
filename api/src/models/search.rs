use super::ApiResponse;
use super::leagues::{Country, League};
use super::players::Player;
use super::teams::{Team, Venue};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type SearchResponse = ApiResponse<Vec<SearchHit>>;

/// The resource family a free-text search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Team,
    League,
    Player,
}

impl SearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Team => "team",
            SearchKind::League => "league",
            SearchKind::Player => "player",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "team" | "teams" => Ok(SearchKind::Team),
            "league" | "leagues" => Ok(SearchKind::League),
            "player" | "players" => Ok(SearchKind::Player),
            other => Err(format!("unknown search kind '{other}' (expected team, league or player)")),
        }
    }
}

/// One search result. Only the sections relevant to the search kind are
/// filled; the rest stay at their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchHit {
    pub team: Team,
    pub venue: Venue,
    pub league: League,
    pub country: Country,
    pub player: Player,
}
