mod cli;
mod settings;

use crate::settings::Settings;
use football_api::{FootballApi, ReqwestTransport};
use log::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = cli::parse(&args)?;
    let settings = Settings::load()?;

    debug!("using {} with a {:?} timeout", settings.domain, settings.timeout);
    let transport = ReqwestTransport::with_timeout(settings.timeout)?;
    let api = FootballApi::with_domain(settings.api_key, settings.domain, transport)?;

    println!("{}", cli::run(&api, command).await?);
    Ok(())
}

fn handle_cli_args() -> bool {
    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("{}", usage_text());
        std::process::exit(2);
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("football {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => false,
    }
}

fn usage_text() -> &'static str {
    "football - API-Football v3 from the command line

Usage:
  football <command> [key=value ...]
  football fixtures-by-date <league> <season> <from> <to>
  football head-to-head <team> <team>
  football search <team|league|player> <query>
  football --help
  football --version

Commands:
  leagues, league-seasons, teams, team-statistics, venues, standings,
  fixtures, fixture-rounds, head-to-head, fixture-statistics,
  fixture-events, fixture-lineups, fixture-players, injuries, players,
  player-seasons, player-squads, top-scorers, top-assists,
  top-yellow-cards, top-red-cards, coaches, sidelined, transfers, trophies

Values are sent as integers when they parse as one, then as numbers,
otherwise as text. Text filters such as search or name are always sent as
text. Example: football standings league=39 season=2023

Environment:
  API_FOOTBALL_KEY           API key (required)
  API_FOOTBALL_DOMAIN        Base URL (default https://v3.football.api-sports.io/)
  API_FOOTBALL_TIMEOUT_SECS  Request timeout in seconds (default 10)
  RUST_LOG                   Log level (default warn)"
}
