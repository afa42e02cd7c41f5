use anyhow::{Context, anyhow, bail};
use chrono::NaiveDate;
use football_api::{Endpoint, FootballApi, HttpTransport, ParamValue, Params, SearchKind};
use serde::Serialize;

/// Commands that take `key=value` filters, by name.
pub const COMMANDS: &[(&str, Endpoint)] = &[
    ("leagues", Endpoint::Leagues),
    ("league-seasons", Endpoint::LeaguesSeasons),
    ("teams", Endpoint::Teams),
    ("team-statistics", Endpoint::TeamsStatistics),
    ("venues", Endpoint::Venues),
    ("standings", Endpoint::Standings),
    ("fixtures", Endpoint::Fixtures),
    ("fixture-rounds", Endpoint::FixturesRounds),
    ("head-to-head", Endpoint::FixturesHeadToHead),
    ("fixture-statistics", Endpoint::FixturesStatistics),
    ("fixture-events", Endpoint::FixturesEvents),
    ("fixture-lineups", Endpoint::FixturesLineups),
    ("fixture-players", Endpoint::FixturesPlayers),
    ("injuries", Endpoint::Injuries),
    ("players", Endpoint::Players),
    ("player-seasons", Endpoint::PlayersSeasons),
    ("player-squads", Endpoint::PlayersSquads),
    ("top-scorers", Endpoint::PlayersTopScorers),
    ("top-assists", Endpoint::PlayersTopAssists),
    ("top-yellow-cards", Endpoint::PlayersTopYellowCards),
    ("top-red-cards", Endpoint::PlayersTopRedCards),
    ("coaches", Endpoint::Coaches),
    ("sidelined", Endpoint::Sidelined),
    ("transfers", Endpoint::Transfers),
    ("trophies", Endpoint::Trophies),
];

#[derive(Debug, PartialEq)]
pub enum Command {
    Endpoint { endpoint: Endpoint, params: Params },
    FixturesByDate { league: i64, season: i64, from: NaiveDate, to: NaiveDate },
    HeadToHead { team_a: i64, team_b: i64 },
    Search { kind: SearchKind, query: String },
}

pub fn parse(args: &[String]) -> anyhow::Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        bail!("no command given");
    };

    match name.as_str() {
        "fixtures-by-date" => {
            let [league, season, from, to] = rest else {
                bail!("usage: fixtures-by-date <league> <season> <from> <to>");
            };
            Ok(Command::FixturesByDate {
                league: league.parse().with_context(|| format!("invalid league '{league}'"))?,
                season: season.parse().with_context(|| format!("invalid season '{season}'"))?,
                from: parse_date(from)?,
                to: parse_date(to)?,
            })
        }
        // Two bare ids select the positional form; filters select the bag form.
        "head-to-head" if rest.len() == 2 && rest.iter().all(|a| !a.contains('=')) => {
            Ok(Command::HeadToHead {
                team_a: rest[0].parse().with_context(|| format!("invalid team id '{}'", rest[0]))?,
                team_b: rest[1].parse().with_context(|| format!("invalid team id '{}'", rest[1]))?,
            })
        }
        "search" => {
            let [kind, query @ ..] = rest else {
                bail!("usage: search <team|league|player> <query>");
            };
            if query.is_empty() {
                bail!("usage: search <team|league|player> <query>");
            }
            Ok(Command::Search {
                kind: kind.parse().map_err(|e: String| anyhow!(e))?,
                query: query.join(" "),
            })
        }
        other => {
            let endpoint = COMMANDS
                .iter()
                .find(|(command, _)| *command == other)
                .map(|(_, endpoint)| *endpoint)
                .ok_or_else(|| anyhow!("unknown command '{other}' (see --help)"))?;
            let params = rest
                .iter()
                .map(|a| parse_pair(endpoint, a))
                .collect::<anyhow::Result<Params>>()?;
            Ok(Command::Endpoint { endpoint, params })
        }
    }
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Split `key=value`. Keys the endpoint reads as text keep their raw value.
fn parse_pair(endpoint: Endpoint, arg: &str) -> anyhow::Result<(String, ParamValue)> {
    let Some((key, value)) = arg.split_once('=').filter(|(key, _)| !key.is_empty()) else {
        bail!("expected key=value, got '{arg}'");
    };
    let is_text = endpoint.rules().iter().any(|rule| rule.text_field() == Some(key));
    let value = if is_text { ParamValue::Str(value.to_owned()) } else { parse_value(value) };
    Ok((key.to_owned(), value))
}

/// Integer first, then a finite float, otherwise the raw string.
pub fn parse_value(raw: &str) -> ParamValue {
    if let Ok(n) = raw.parse::<i64>() {
        return ParamValue::Int(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => ParamValue::Float(f),
        _ => ParamValue::Str(raw.to_owned()),
    }
}

fn pretty<R: Serialize>(response: &R) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// Run `command` and render the decoded response as pretty JSON.
pub async fn run<T: HttpTransport>(api: &FootballApi<T>, command: Command) -> anyhow::Result<String> {
    let (endpoint, params) = match command {
        Command::FixturesByDate { league, season, from, to } => {
            return pretty(&api.fixture_by_date_and_league(league, season, from, to).await?);
        }
        Command::HeadToHead { team_a, team_b } => {
            return pretty(&api.fixture_head_to_head_teams(team_a, team_b).await?);
        }
        Command::Search { kind, query } => return pretty(&api.search(kind, &query).await?),
        Command::Endpoint { endpoint, params } => (endpoint, params),
    };

    match endpoint {
        Endpoint::Leagues => pretty(&api.leagues(&params).await?),
        Endpoint::LeaguesSeasons => pretty(&api.league_seasons().await?),
        Endpoint::Teams => pretty(&api.teams(&params).await?),
        Endpoint::TeamsStatistics => pretty(&api.team_statistics(&params).await?),
        Endpoint::Venues => pretty(&api.venues(&params).await?),
        Endpoint::Standings => pretty(&api.standings(&params).await?),
        Endpoint::Fixtures => pretty(&api.fixtures(&params).await?),
        Endpoint::FixturesRounds => pretty(&api.fixture_rounds(&params).await?),
        Endpoint::FixturesHeadToHead => pretty(&api.fixture_head_to_head(&params).await?),
        Endpoint::FixturesStatistics => pretty(&api.fixture_statistics(&params).await?),
        Endpoint::FixturesEvents => pretty(&api.fixture_events(&params).await?),
        Endpoint::FixturesLineups => pretty(&api.fixture_lineups(&params).await?),
        Endpoint::FixturesPlayers => pretty(&api.fixture_players(&params).await?),
        Endpoint::Injuries => pretty(&api.injuries(&params).await?),
        Endpoint::Players => pretty(&api.players(&params).await?),
        Endpoint::PlayersSeasons => pretty(&api.player_seasons(&params).await?),
        Endpoint::PlayersSquads => pretty(&api.player_squads(&params).await?),
        Endpoint::PlayersTopScorers => pretty(&api.players_top_scorers(&params).await?),
        Endpoint::PlayersTopAssists => pretty(&api.players_top_assists(&params).await?),
        Endpoint::PlayersTopYellowCards => pretty(&api.players_top_yellow_cards(&params).await?),
        Endpoint::PlayersTopRedCards => pretty(&api.players_top_red_cards(&params).await?),
        Endpoint::Coaches => pretty(&api.coaches(&params).await?),
        Endpoint::Sidelined => pretty(&api.sidelined(&params).await?),
        Endpoint::Transfers => pretty(&api.transfers(&params).await?),
        Endpoint::Trophies => pretty(&api.trophies(&params).await?),
        Endpoint::FixturesByDate | Endpoint::Search => {
            bail!("{endpoint} takes positional arguments")
        }
    }
}
