use crate::decode::decode;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::models::fixtures::{
    FixtureEventsResponse, FixtureLineupsResponse, FixturePlayersResponse,
    FixtureStatisticsResponse, FixturesResponse, RoundsResponse,
};
use crate::models::leagues::{LeagueSeasonsResponse, LeaguesResponse};
use crate::models::people::{
    CoachesResponse, InjuriesResponse, SidelinedResponse, TransfersResponse, TrophiesResponse,
};
use crate::models::players::{
    PlayerSeasonsResponse, PlayersResponse, SquadsResponse, TopPlayersResponse,
};
use crate::models::search::{SearchKind, SearchResponse};
use crate::models::standings::StandingsResponse;
use crate::models::teams::{TeamStatisticsResponse, TeamsResponse, VenuesResponse};
use crate::params::{Params, build_url};
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport, ResponseBody};
use crate::validate::validate;
use chrono::NaiveDate;
use log::{debug, trace};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fmt;

pub const DEFAULT_DOMAIN: &str = "https://v3.football.api-sports.io/";
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";
pub const API_HOST: &str = "api-football-v1.p.rapidapi.com";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// API-Football client. Immutable after construction; share it freely.
#[derive(Clone)]
pub struct FootballApi<T> {
    key: String,
    domain: String,
    transport: T,
}

impl<T> fmt::Debug for FootballApi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FootballApi")
            .field("key", &"<redacted>")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl FootballApi<ReqwestTransport> {
    /// Client against the default domain using the bundled reqwest transport.
    pub fn from_key(key: impl Into<String>) -> ApiResult<Self> {
        Self::new(key, ReqwestTransport::default())
    }
}

impl<T> FootballApi<T> {
    pub fn builder() -> ApiBuilder<T> {
        ApiBuilder::default()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> FootballApi<T> {
    pub fn new(key: impl Into<String>, transport: T) -> ApiResult<Self> {
        Self::with_domain(key, DEFAULT_DOMAIN, transport)
    }

    /// Client against a custom base URL, e.g. a RapidAPI gateway or a test
    /// server. A missing trailing slash is added.
    pub fn with_domain(
        key: impl Into<String>,
        domain: impl Into<String>,
        transport: T,
    ) -> ApiResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ApiError::MissingKey);
        }

        let mut domain = domain.into();
        if !domain.ends_with('/') {
            domain.push('/');
        }

        Ok(Self { key, domain, transport })
    }

    // ---------------------------------------------------------------------------
    // Leagues, teams, venues, standings
    // ---------------------------------------------------------------------------

    /// `/leagues`. Filters: id, name, country, code, season, team, type,
    /// current, search, last.
    pub async fn leagues(&self, params: &Params) -> ApiResult<LeaguesResponse> {
        self.call(Endpoint::Leagues, params).await
    }

    /// `/leagues/seasons`: every season year the API knows about.
    pub async fn league_seasons(&self) -> ApiResult<LeagueSeasonsResponse> {
        self.call(Endpoint::LeaguesSeasons, &Params::new()).await
    }

    /// `/teams`. At least one filter is required.
    pub async fn teams(&self, params: &Params) -> ApiResult<TeamsResponse> {
        self.call(Endpoint::Teams, params).await
    }

    /// `/teams/statistics`. Requires league, season and team.
    pub async fn team_statistics(&self, params: &Params) -> ApiResult<TeamStatisticsResponse> {
        self.call(Endpoint::TeamsStatistics, params).await
    }

    pub async fn venues(&self, params: &Params) -> ApiResult<VenuesResponse> {
        self.call(Endpoint::Venues, params).await
    }

    /// `/standings`. Requires season and league.
    pub async fn standings(&self, params: &Params) -> ApiResult<StandingsResponse> {
        self.call(Endpoint::Standings, params).await
    }

    // ---------------------------------------------------------------------------
    // Fixtures
    // ---------------------------------------------------------------------------

    /// `/fixtures`. Every filter is optional.
    pub async fn fixtures(&self, params: &Params) -> ApiResult<FixturesResponse> {
        self.call(Endpoint::Fixtures, params).await
    }

    pub async fn fixture_rounds(&self, params: &Params) -> ApiResult<RoundsResponse> {
        self.call(Endpoint::FixturesRounds, params).await
    }

    /// `/fixtures/headtohead`. `h2h` must hold two team ids, e.g. "33-34".
    pub async fn fixture_head_to_head(&self, params: &Params) -> ApiResult<FixturesResponse> {
        self.call(Endpoint::FixturesHeadToHead, params).await
    }

    /// Head-to-head history between two teams.
    pub async fn fixture_head_to_head_teams(
        &self,
        team_a: i64,
        team_b: i64,
    ) -> ApiResult<FixturesResponse> {
        let endpoint = Endpoint::FixturesHeadToHead;
        let h2h = format!("{team_a}-{team_b}");
        self.check(endpoint, &Params::new().with("h2h", h2h.as_str()))?;

        let url = format!("{}{}?h2h={h2h}", self.domain, endpoint.path());
        self.fetch(endpoint, url).await
    }

    /// Fixtures of one league season between two dates, inclusive.
    pub async fn fixture_by_date_and_league(
        &self,
        league: i64,
        season: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<FixturesResponse> {
        let endpoint = Endpoint::FixturesByDate;
        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();
        let params = Params::new()
            .with("league", league)
            .with("season", season)
            .with("from", from.as_str())
            .with("to", to.as_str());
        self.check(endpoint, &params)?;

        let url = format!(
            "{}{}?league={league}&season={season}&from={from}&to={to}",
            self.domain,
            endpoint.path()
        );
        self.fetch(endpoint, url).await
    }

    /// `/fixtures/statistics`. Requires fixture.
    pub async fn fixture_statistics(&self, params: &Params) -> ApiResult<FixtureStatisticsResponse> {
        self.call(Endpoint::FixturesStatistics, params).await
    }

    /// `/fixtures/events`. Requires fixture.
    pub async fn fixture_events(&self, params: &Params) -> ApiResult<FixtureEventsResponse> {
        self.call(Endpoint::FixturesEvents, params).await
    }

    /// `/fixtures/lineups`. Requires fixture.
    pub async fn fixture_lineups(&self, params: &Params) -> ApiResult<FixtureLineupsResponse> {
        self.call(Endpoint::FixturesLineups, params).await
    }

    /// `/fixtures/players`. Requires fixture.
    pub async fn fixture_players(&self, params: &Params) -> ApiResult<FixturePlayersResponse> {
        self.call(Endpoint::FixturesPlayers, params).await
    }

    // ---------------------------------------------------------------------------
    // Players
    // ---------------------------------------------------------------------------

    /// `/injuries`. league, team and player each need a season alongside.
    pub async fn injuries(&self, params: &Params) -> ApiResult<InjuriesResponse> {
        self.call(Endpoint::Injuries, params).await
    }

    /// `/players`. Paginated; pass `page` for anything past the first.
    pub async fn players(&self, params: &Params) -> ApiResult<PlayersResponse> {
        self.call(Endpoint::Players, params).await
    }

    pub async fn player_seasons(&self, params: &Params) -> ApiResult<PlayerSeasonsResponse> {
        self.call(Endpoint::PlayersSeasons, params).await
    }

    pub async fn player_squads(&self, params: &Params) -> ApiResult<SquadsResponse> {
        self.call(Endpoint::PlayersSquads, params).await
    }

    pub async fn players_top_scorers(&self, params: &Params) -> ApiResult<TopPlayersResponse> {
        self.call(Endpoint::PlayersTopScorers, params).await
    }

    pub async fn players_top_assists(&self, params: &Params) -> ApiResult<TopPlayersResponse> {
        self.call(Endpoint::PlayersTopAssists, params).await
    }

    pub async fn players_top_yellow_cards(&self, params: &Params) -> ApiResult<TopPlayersResponse> {
        self.call(Endpoint::PlayersTopYellowCards, params).await
    }

    pub async fn players_top_red_cards(&self, params: &Params) -> ApiResult<TopPlayersResponse> {
        self.call(Endpoint::PlayersTopRedCards, params).await
    }

    // ---------------------------------------------------------------------------
    // Coaches and careers
    // ---------------------------------------------------------------------------

    pub async fn coaches(&self, params: &Params) -> ApiResult<CoachesResponse> {
        self.call(Endpoint::Coaches, params).await
    }

    pub async fn sidelined(&self, params: &Params) -> ApiResult<SidelinedResponse> {
        self.call(Endpoint::Sidelined, params).await
    }

    pub async fn transfers(&self, params: &Params) -> ApiResult<TransfersResponse> {
        self.call(Endpoint::Transfers, params).await
    }

    pub async fn trophies(&self, params: &Params) -> ApiResult<TrophiesResponse> {
        self.call(Endpoint::Trophies, params).await
    }

    /// Free-text lookup, `GET {kind}s/{kind}/{query}`. The query needs at
    /// least three characters.
    pub async fn search(&self, kind: SearchKind, query: &str) -> ApiResult<SearchResponse> {
        let endpoint = Endpoint::Search;
        self.check(endpoint, &Params::new().with("search", query))?;
        let url = self.search_url(kind, query);
        self.fetch(endpoint, url).await
    }

    // ---------------------------------------------------------------------------
    // Request pipeline: validate → build URL → execute → decode
    // ---------------------------------------------------------------------------

    async fn call<R: DeserializeOwned>(&self, endpoint: Endpoint, params: &Params) -> ApiResult<R> {
        self.check(endpoint, params)?;
        let base = format!("{}{}", self.domain, endpoint.path());
        let url = build_url(&base, Some(params));
        self.fetch(endpoint, url).await
    }

    fn check(&self, endpoint: Endpoint, params: &Params) -> ApiResult<()> {
        validate(endpoint.rules(), params).map_err(|source| ApiError::Validation { endpoint, source })
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint, url: String) -> ApiResult<R> {
        let body = self.execute(endpoint, url).await?;
        decode(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }

    async fn execute(&self, endpoint: Endpoint, url: String) -> ApiResult<Vec<u8>> {
        debug!("GET {endpoint}: {url}");
        let request = HttpRequest::get(url.as_str())
            .header(API_KEY_HEADER, self.key.as_str())
            .header(API_HOST_HEADER, API_HOST);

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport { endpoint, url, source })?;

        let status = response.status;
        if !response.is_success() {
            debug!("{endpoint} answered with status {status}");
            // Best effort: the status alone is enough to report.
            let body = response
                .body
                .read_all()
                .await
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(ApiError::Remote { endpoint, status, body });
        }

        let bytes = response
            .body
            .read_all()
            .await
            .map_err(|source| ApiError::Io { endpoint, source })?;
        trace!("{endpoint} returned {} bytes with status {status}", bytes.len());
        Ok(bytes)
    }

    fn search_url(&self, kind: SearchKind, query: &str) -> String {
        let base = format!("{}{kind}s/{kind}", self.domain);
        match Url::parse(&base) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.push(query);
                }
                url.into()
            }
            Err(_) => format!("{base}/{query}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct ApiBuilder<T> {
    key: Option<String>,
    domain: Option<String>,
    transport: Option<T>,
}

impl<T> Default for ApiBuilder<T> {
    fn default() -> Self {
        Self { key: None, domain: None, transport: None }
    }
}

impl<T> ApiBuilder<T> {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl<T: HttpTransport> ApiBuilder<T> {
    /// Reports a missing key before a missing transport.
    pub fn build(self) -> ApiResult<FootballApi<T>> {
        let key = self
            .key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ApiError::MissingKey)?;
        let transport = self.transport.ok_or(ApiError::MissingTransport)?;
        let domain = self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_owned());
        FootballApi::with_domain(key, domain, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(domain: &str) -> FootballApi<ReqwestTransport> {
        FootballApi::with_domain("secret", domain, ReqwestTransport::default()).unwrap()
    }

    #[test]
    fn empty_or_blank_key_is_rejected() {
        for key in ["", "   "] {
            let err = FootballApi::new(key, ReqwestTransport::default()).unwrap_err();
            assert!(matches!(err, ApiError::MissingKey), "{key:?}");
        }
    }

    #[test]
    fn default_domain() {
        let api = FootballApi::from_key("secret").unwrap();
        assert_eq!(api.domain(), DEFAULT_DOMAIN);
    }

    #[test]
    fn trailing_slash_is_added_once() {
        assert_eq!(client("http://localhost:8080").domain(), "http://localhost:8080/");
        assert_eq!(client("http://localhost:8080/").domain(), "http://localhost:8080/");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let rendered = format!("{:?}", client("http://localhost"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn search_query_is_one_encoded_segment() {
        let api = client("https://v3.football.api-sports.io/");
        assert_eq!(
            api.search_url(SearchKind::Team, "Manchester United"),
            "https://v3.football.api-sports.io/teams/team/Manchester%20United"
        );
        assert_eq!(
            api.search_url(SearchKind::Player, "a/b"),
            "https://v3.football.api-sports.io/players/player/a%2Fb"
        );
    }

    #[test]
    fn builder_reports_missing_key_first() {
        let err = FootballApi::<ReqwestTransport>::builder().build().unwrap_err();
        assert!(matches!(err, ApiError::MissingKey));

        let err = FootballApi::<ReqwestTransport>::builder()
            .api_key(" ")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingKey));

        let err = FootballApi::<ReqwestTransport>::builder()
            .api_key("secret")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingTransport));
    }

    #[test]
    fn builder_with_everything() {
        let api = FootballApi::builder()
            .api_key("secret")
            .domain("http://127.0.0.1:9000")
            .transport(ReqwestTransport::default())
            .build()
            .unwrap();
        assert_eq!(api.domain(), "http://127.0.0.1:9000/");
    }
}
