use super::ApiResponse;
use serde::{Deserialize, Serialize};

pub type LeaguesResponse = ApiResponse<Vec<LeagueEntry>>;
pub type LeagueSeasonsResponse = ApiResponse<Vec<i64>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueEntry {
    pub league: League,
    pub country: Country,
    pub seasons: Vec<LeagueSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct League {
    pub id: i64,
    pub name: String,
    /// "League" or "Cup".
    #[serde(rename = "type")]
    pub kind: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub flag: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueSeason {
    pub year: i64,
    pub start: String,
    pub end: String,
    pub current: bool,
    pub coverage: Coverage,
}

/// Which data sets the API carries for a league season.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Coverage {
    pub fixtures: FixtureCoverage,
    pub standings: bool,
    pub players: bool,
    pub top_scorers: bool,
    pub top_assists: bool,
    pub top_cards: bool,
    pub injuries: bool,
    pub predictions: bool,
    pub odds: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureCoverage {
    pub events: bool,
    pub lineups: bool,
    pub statistics_fixtures: bool,
    pub statistics_players: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn league_entry_with_coverage() {
        let body = br#"{
            "results": 1,
            "response": [{
                "league": {"id": 39, "name": "Premier League", "type": "League", "logo": "l.png"},
                "country": {"name": "England", "code": "GB", "flag": "f.svg"},
                "seasons": [{
                    "year": 2023, "start": "2023-08-11", "end": "2024-05-19", "current": true,
                    "coverage": {"fixtures": {"events": true, "lineups": true}, "standings": true, "odds": false}
                }]
            }]
        }"#;
        let resp: LeaguesResponse = decode(body).unwrap();
        let entry = &resp.response[0];
        assert_eq!(entry.league.kind, "League");
        assert_eq!(entry.country.code, "GB");
        let season = &entry.seasons[0];
        assert!(season.current);
        assert!(season.coverage.fixtures.lineups);
        assert!(!season.coverage.fixtures.statistics_players);
    }

    #[test]
    fn cup_without_country_code() {
        let body = br#"{"response": [{"league": {"id": 2, "type": "Cup"}, "country": {"name": "World", "code": null, "flag": null}}]}"#;
        let resp: LeaguesResponse = decode(body).unwrap();
        assert_eq!(resp.response[0].country.code, "");
        assert!(resp.response[0].seasons.is_empty());
    }

    #[test]
    fn seasons_are_plain_years() {
        let resp: LeagueSeasonsResponse =
            decode(br#"{"results": 3, "response": [2021, 2022, 2023]}"#).unwrap();
        assert_eq!(resp.response, vec![2021, 2022, 2023]);
    }
}
