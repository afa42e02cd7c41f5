//! Static endpoint table: every resource this crate talks to, its path below
//! the API domain and the validation rules applied to its parameter bag.
use crate::validate::{Rule, rules};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Leagues,
    LeaguesSeasons,
    Teams,
    TeamsStatistics,
    Venues,
    Standings,
    Fixtures,
    FixturesRounds,
    FixturesHeadToHead,
    FixturesByDate,
    FixturesStatistics,
    FixturesEvents,
    FixturesLineups,
    FixturesPlayers,
    Injuries,
    Players,
    PlayersSeasons,
    PlayersSquads,
    PlayersTopScorers,
    PlayersTopAssists,
    PlayersTopYellowCards,
    PlayersTopRedCards,
    Coaches,
    Sidelined,
    Transfers,
    Trophies,
    Search,
}

impl Endpoint {
    pub const ALL: [Endpoint; 27] = [
        Endpoint::Leagues,
        Endpoint::LeaguesSeasons,
        Endpoint::Teams,
        Endpoint::TeamsStatistics,
        Endpoint::Venues,
        Endpoint::Standings,
        Endpoint::Fixtures,
        Endpoint::FixturesRounds,
        Endpoint::FixturesHeadToHead,
        Endpoint::FixturesByDate,
        Endpoint::FixturesStatistics,
        Endpoint::FixturesEvents,
        Endpoint::FixturesLineups,
        Endpoint::FixturesPlayers,
        Endpoint::Injuries,
        Endpoint::Players,
        Endpoint::PlayersSeasons,
        Endpoint::PlayersSquads,
        Endpoint::PlayersTopScorers,
        Endpoint::PlayersTopAssists,
        Endpoint::PlayersTopYellowCards,
        Endpoint::PlayersTopRedCards,
        Endpoint::Coaches,
        Endpoint::Sidelined,
        Endpoint::Transfers,
        Endpoint::Trophies,
        Endpoint::Search,
    ];

    /// Path relative to the API domain. `Search` is a prefix; the query kind
    /// and term are appended as path segments.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Leagues => "leagues",
            Endpoint::LeaguesSeasons => "leagues/seasons",
            Endpoint::Teams => "teams",
            Endpoint::TeamsStatistics => "teams/statistics",
            Endpoint::Venues => "venues",
            Endpoint::Standings => "standings",
            Endpoint::Fixtures | Endpoint::FixturesByDate => "fixtures",
            Endpoint::FixturesRounds => "fixtures/rounds",
            Endpoint::FixturesHeadToHead => "fixtures/headtohead",
            Endpoint::FixturesStatistics => "fixtures/statistics",
            Endpoint::FixturesEvents => "fixtures/events",
            Endpoint::FixturesLineups => "fixtures/lineups",
            Endpoint::FixturesPlayers => "fixtures/players",
            Endpoint::Injuries => "injuries",
            Endpoint::Players => "players",
            Endpoint::PlayersSeasons => "players/seasons",
            Endpoint::PlayersSquads => "players/squads",
            Endpoint::PlayersTopScorers => "players/topscorers",
            Endpoint::PlayersTopAssists => "players/topassists",
            Endpoint::PlayersTopYellowCards => "players/topyellowcards",
            Endpoint::PlayersTopRedCards => "players/topredcards",
            Endpoint::Coaches => "coachs",
            Endpoint::Sidelined => "sidelined",
            Endpoint::Transfers => "transfers",
            Endpoint::Trophies => "trophies",
            Endpoint::Search => "",
        }
    }

    /// Human readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Leagues => "leagues",
            Endpoint::LeaguesSeasons => "leagues seasons",
            Endpoint::Teams => "teams",
            Endpoint::TeamsStatistics => "teams statistics",
            Endpoint::Venues => "venues",
            Endpoint::Standings => "standings",
            Endpoint::Fixtures => "fixtures",
            Endpoint::FixturesRounds => "fixtures rounds",
            Endpoint::FixturesHeadToHead => "fixtures head to head",
            Endpoint::FixturesByDate => "fixtures by date and league",
            Endpoint::FixturesStatistics => "fixtures statistics",
            Endpoint::FixturesEvents => "fixtures events",
            Endpoint::FixturesLineups => "fixtures lineups",
            Endpoint::FixturesPlayers => "fixtures players",
            Endpoint::Injuries => "injuries",
            Endpoint::Players => "players",
            Endpoint::PlayersSeasons => "players seasons",
            Endpoint::PlayersSquads => "players squads",
            Endpoint::PlayersTopScorers => "players topscorers",
            Endpoint::PlayersTopAssists => "players topassists",
            Endpoint::PlayersTopYellowCards => "players topyellowcards",
            Endpoint::PlayersTopRedCards => "players topredcards",
            Endpoint::Coaches => "coachs",
            Endpoint::Sidelined => "sidelined",
            Endpoint::Transfers => "transfers",
            Endpoint::Trophies => "trophies",
            Endpoint::Search => "search",
        }
    }

    /// Rules checked, in order, against the parameter bag before any request.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Endpoint::Leagues => rules::LEAGUES,
            Endpoint::LeaguesSeasons => &[],
            Endpoint::Teams => rules::TEAMS,
            Endpoint::TeamsStatistics => rules::TEAMS_STATISTICS,
            Endpoint::Venues => rules::VENUES,
            Endpoint::Standings => rules::STANDINGS,
            Endpoint::Fixtures => rules::FIXTURES,
            Endpoint::FixturesRounds => rules::FIXTURES_ROUNDS,
            Endpoint::FixturesHeadToHead => rules::FIXTURES_HEAD_TO_HEAD,
            Endpoint::FixturesByDate => rules::FIXTURES_BY_DATE,
            Endpoint::FixturesStatistics | Endpoint::FixturesPlayers => {
                rules::FIXTURE_STATISTICS_PLAYERS
            }
            Endpoint::FixturesEvents | Endpoint::FixturesLineups => rules::FIXTURE_EVENTS_LINEUPS,
            Endpoint::Injuries => rules::INJURIES,
            Endpoint::Players => rules::PLAYERS,
            Endpoint::PlayersSeasons => rules::PLAYERS_SEASONS,
            Endpoint::PlayersSquads => rules::PLAYERS_SQUADS,
            Endpoint::PlayersTopScorers
            | Endpoint::PlayersTopAssists
            | Endpoint::PlayersTopYellowCards
            | Endpoint::PlayersTopRedCards => rules::PLAYERS_TOP,
            Endpoint::Coaches => rules::COACHES,
            Endpoint::Sidelined => rules::SIDELINED,
            Endpoint::Transfers => rules::TRANSFERS,
            Endpoint::Trophies => rules::TROPHIES,
            Endpoint::Search => rules::SEARCH,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
