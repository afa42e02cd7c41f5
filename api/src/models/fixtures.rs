use super::players::{Cards, Dribbles, Duels, Fouls, Goals, Passes, Penalty, Shots, Tackles};
use super::{ApiResponse, HomeAway, LeagueRef, PersonRef, TeamRef};
use crate::decode::Tolerant;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type FixturesResponse = ApiResponse<Vec<FixtureEntry>>;
pub type RoundsResponse = ApiResponse<Vec<String>>;
pub type FixtureStatisticsResponse = ApiResponse<Vec<TeamStatistics>>;
pub type FixtureEventsResponse = ApiResponse<Vec<Event>>;
pub type FixtureLineupsResponse = ApiResponse<Vec<Lineup>>;
pub type FixturePlayersResponse = ApiResponse<Vec<TeamPlayers>>;

/// A match. Single-fixture lookups also fill the embedded events, lineups
/// and statistics; list queries leave them empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureEntry {
    pub fixture: Fixture,
    pub league: LeagueRef,
    pub teams: HomeAway<FixtureTeam>,
    pub goals: HomeAway<i64>,
    pub score: Score,
    pub events: Vec<Event>,
    pub lineups: Vec<Lineup>,
    pub statistics: Vec<TeamStatistics>,
    pub players: Vec<TeamPlayers>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Fixture {
    pub id: i64,
    pub referee: String,
    pub timezone: String,
    /// Kickoff. `None` when the field is missing or null.
    pub date: Option<DateTime<FixedOffset>>,
    pub timestamp: i64,
    pub periods: Periods,
    pub venue: FixtureVenue,
    pub status: Status,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Periods {
    pub first: i64,
    pub second: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureVenue {
    pub id: i64,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Status {
    pub long: String,
    /// NS, 1H, HT, FT, PST and friends.
    pub short: String,
    pub elapsed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureTeam {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub winner: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Score {
    pub halftime: HomeAway<i64>,
    pub fulltime: HomeAway<i64>,
    pub extratime: HomeAway<Tolerant>,
    pub penalty: HomeAway<Tolerant>,
}

// ---- events ----

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Event {
    pub time: EventTime,
    pub team: TeamRef,
    pub player: EventPlayer,
    pub assist: EventAssist,
    /// Goal, Card, subst or Var.
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EventTime {
    pub elapsed: i64,
    pub extra: Tolerant,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EventPlayer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EventAssist {
    pub id: Tolerant,
    pub name: Tolerant,
}

// ---- lineups ----

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Lineup {
    pub team: LineupTeam,
    pub coach: PersonRef,
    pub formation: String,
    #[serde(rename = "startXI")]
    pub start_xi: Vec<LineupSlot>,
    pub substitutes: Vec<LineupSlot>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LineupTeam {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub colors: Colors,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Colors {
    pub player: Kit,
    pub goalkeeper: Kit,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Kit {
    pub primary: String,
    pub number: String,
    pub border: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LineupSlot {
    pub player: LineupPlayer,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LineupPlayer {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub pos: String,
    /// "row:col" for starters, absent for substitutes.
    pub grid: Tolerant,
}

// ---- statistics ----

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamStatistics {
    pub team: TeamRef,
    pub statistics: Vec<Statistic>,
}

impl TeamStatistics {
    /// Look up a statistic by its label, e.g. "Ball Possession".
    pub fn get(&self, kind: &str) -> Option<&Tolerant> {
        self.statistics.iter().find(|s| s.kind == kind).map(|s| &s.value)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Statistic {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Tolerant,
}

// ---- players ----

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamPlayers {
    pub team: UpdatedTeam,
    pub players: Vec<FixturePlayer>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdatedTeam {
    pub id: i64,
    pub name: String,
    pub logo: String,
    /// `None` when the field is missing or null.
    pub update: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixturePlayer {
    pub player: PersonRef,
    pub statistics: Vec<MatchStatistics>,
}

/// A player's numbers for one match.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchStatistics {
    pub games: MatchGames,
    pub offsides: Tolerant,
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
pub struct MatchGames {
    pub minutes: i64,
    pub number: i64,
    pub position: String,
    pub rating: Tolerant,
    pub captain: bool,
    pub substitute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    const FIXTURE: &[u8] = br#"{
        "get": "fixtures", "results": 1, "paging": {"current": 1, "total": 1},
        "response": [{
            "fixture": {"id": 239625, "referee": null, "timezone": "UTC",
                        "date": "2020-02-06T14:00:00+00:00", "timestamp": 1580997600,
                        "periods": {"first": 1580997600, "second": null},
                        "venue": {"id": 1887, "name": "Stade Municipal", "city": "Oued Zem"},
                        "status": {"long": "Match Finished", "short": "FT", "elapsed": 90}},
            "league": {"id": 200, "name": "Botola Pro", "country": "Morocco", "season": 2019,
                       "round": "Regular Season - 14"},
            "teams": {"home": {"id": 967, "name": "Rapide Oued ZEM", "winner": false},
                      "away": {"id": 968, "name": "Wydad AC", "winner": true}},
            "goals": {"home": 0, "away": 1},
            "score": {"halftime": {"home": 0, "away": 1}, "fulltime": {"home": 0, "away": 1},
                      "extratime": {"home": null, "away": null}, "penalty": {"home": "4", "away": 5}},
            "events": [{"time": {"elapsed": 25, "extra": null}, "team": {"id": 968},
                        "player": {"id": 6126, "name": "F. Andronache"},
                        "assist": {"id": null, "name": null},
                        "type": "Goal", "detail": "Normal Goal", "comments": null}],
            "lineups": [{"team": {"id": 968, "colors": {"player": {"primary": "ff0000"}}},
                         "formation": "4-3-3",
                         "startXI": [{"player": {"id": 1, "number": 1, "pos": "G", "grid": "1:1"}}],
                         "substitutes": [{"player": {"id": 2, "number": 12, "pos": "G", "grid": null}}]}],
            "statistics": [{"team": {"id": 968}, "statistics": [
                {"type": "Shots on Goal", "value": 3},
                {"type": "Ball Possession", "value": "52%"},
                {"type": "expected_goals", "value": null}
            ]}]
        }]
    }"#;

    #[test]
    fn full_fixture_decodes() {
        let resp: FixturesResponse = decode(FIXTURE).unwrap();
        assert_eq!(resp.results, 1);
        let entry = &resp.response[0];
        assert_eq!(entry.fixture.id, 239625);
        assert_eq!(entry.fixture.referee, "");
        assert_eq!(entry.fixture.periods.second, 0);
        assert_eq!(entry.fixture.status.short, "FT");
        assert_eq!(entry.league.round, "Regular Season - 14");
        assert!(entry.teams.away.winner);
        assert_eq!(entry.goals.away, 1);
        assert!(entry.fixture.date.is_some());
    }

    #[test]
    fn penalty_scores_normalize_across_types() {
        let resp: FixturesResponse = decode(FIXTURE).unwrap();
        let score = &resp.response[0].score;
        assert!(score.extratime.home.is_absent());
        assert_eq!(score.penalty.home.normalized(), "4");
        assert_eq!(score.penalty.away.normalized(), "5");
    }

    #[test]
    fn embedded_sections_decode() {
        let resp: FixturesResponse = decode(FIXTURE).unwrap();
        let entry = &resp.response[0];

        let goal = &entry.events[0];
        assert_eq!(goal.kind, "Goal");
        assert_eq!(goal.comments, "");
        assert!(goal.assist.id.is_absent());

        let lineup = &entry.lineups[0];
        assert_eq!(lineup.team.colors.player.primary, "ff0000");
        assert_eq!(lineup.start_xi[0].player.grid.normalized(), "1:1");
        assert!(lineup.substitutes[0].player.grid.is_absent());

        let stats = &entry.statistics[0];
        assert_eq!(stats.get("Shots on Goal").and_then(Tolerant::as_i64), Some(3));
        assert_eq!(stats.get("Ball Possession").map(Tolerant::normalized), Some("52%".into()));
        assert!(stats.get("expected_goals").is_some_and(Tolerant::is_absent));
        assert!(stats.get("Corner Kicks").is_none());
    }

    #[test]
    fn match_player_statistics() {
        let body = br#"{"response": [{
            "team": {"id": 33, "update": "2023-04-01T12:00:00+00:00"},
            "players": [{"player": {"id": 882, "name": "David de Gea"},
                         "statistics": [{"games": {"minutes": 90, "number": 1, "position": "G",
                                                   "rating": "6.9", "captain": false, "substitute": false},
                                         "offsides": null, "goals": {"total": null, "conceded": 1, "saves": 4},
                                         "passes": {"accuracy": "68%"}}]}]
        }]}"#;
        let resp: FixturePlayersResponse = decode(body).unwrap();
        let team = &resp.response[0];
        assert!(team.team.update.is_some());
        let stats = &team.players[0].statistics[0];
        assert_eq!(stats.games.minutes, 90);
        assert_eq!(stats.games.rating.normalized(), "6.9");
        assert!(stats.offsides.is_absent());
        assert_eq!(stats.goals.saves.as_i64(), Some(4));
        assert_eq!(stats.passes.accuracy.as_f64(), Some(68.0));
    }

    #[test]
    fn rounds_are_strings() {
        let resp: RoundsResponse =
            decode(br#"{"response": ["Regular Season - 1", "Regular Season - 2"]}"#).unwrap();
        assert_eq!(resp.response.len(), 2);
    }
}
