use crate::statsapi::{ScheduleGame, SchedulePhotoCut, ScheduleResponse, ScheduleTeamSide};
use crate::{Game, Recap, TeamLine};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const STATSAPI_BASE: &str = "https://statsapi.mlb.com";
const SCHEDULE_HYDRATE: &str = "game(content(editorial(recap))),decisions";
const SPORT_ID: u8 = 1; // MLB

/// Dimensions of the editorial photo cut used for card art.
const IMAGE_CUT: (u32, u32) = (480, 270);

/// Fallback art for games without a recap photo at the expected cut size.
const DEFAULT_LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/thumb/a/a6/Major_League_Baseball_logo.svg/200px-Major_League_Baseball_logo.svg.png";

/// MLB schedule client backed by the public Stats API.
#[derive(Debug, Clone)]
pub struct StatsApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for StatsApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("mlbtui/0.1 (terminal schedule viewer)")
                .build()
                .unwrap_or_default(),
            base_url: STATSAPI_BASE.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    MalformedResponse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl StatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Tests use this to hit a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the schedule for one calendar day, hydrated with editorial recaps.
    pub async fn fetch_schedule(&self, date: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!(
            "{}/api/v1/schedule?hydrate={SCHEDULE_HYDRATE}&sportId={SPORT_ID}&date={}",
            self.base_url,
            date.format("%Y-%m-%d"),
        );
        let raw: ScheduleResponse = self.get(&url).await?;
        schedule_games(raw)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => Err(ApiError::Api(e, url.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: Stats API wire types → clean domain types
// ---------------------------------------------------------------------------

/// Flatten a schedule response into game order across its dates.
///
/// A response with no `dates` field at all is malformed (the endpoint sends
/// an empty array for days without games). Anything missing below that level
/// gets a defined default instead of an error.
fn schedule_games(raw: ScheduleResponse) -> ApiResult<Vec<Game>> {
    let dates = raw
        .dates
        .ok_or_else(|| ApiError::MalformedResponse("schedule response has no dates".into()))?;
    Ok(dates
        .into_iter()
        .flat_map(|d| d.games)
        .map(map_game)
        .collect())
}

fn map_game(g: ScheduleGame) -> Game {
    let teams = g.teams.unwrap_or_default();
    let recap = g
        .content
        .and_then(|c| c.editorial)
        .and_then(|e| e.recap)
        .and_then(|r| r.mlb);

    let image_url = recap
        .as_ref()
        .and_then(|r| r.photo.as_ref())
        .and_then(|p| p.cuts.as_deref())
        .and_then(find_card_cut)
        .unwrap_or_else(|| DEFAULT_LOGO_URL.to_owned());

    Game {
        game_date: parse_instant(g.game_date.as_deref()),
        home: map_team_line(teams.home, "Home Team"),
        away: map_team_line(teams.away, "Away Team"),
        venue: g.venue.and_then(|v| v.name),
        image_url,
        status_code: g.status.and_then(|s| s.status_code),
        recap: recap.map(|r| Recap {
            headline: r.headline,
            date: parse_instant(r.date.as_deref()),
            blurb: r.blurb,
        }),
    }
}

fn map_team_line(side: Option<ScheduleTeamSide>, fallback: &str) -> TeamLine {
    let side = side.unwrap_or_default();
    TeamLine {
        name: side
            .team
            .and_then(|t| t.name)
            .unwrap_or_else(|| fallback.to_owned()),
        score: side.score,
    }
}

/// Pick the src of the cut matching the card dimensions exactly.
fn find_card_cut(cuts: &[SchedulePhotoCut]) -> Option<String> {
    cuts.iter()
        .find(|c| c.width == Some(IMAGE_CUT.0) && c.height == Some(IMAGE_CUT.1))
        .and_then(|c| c.src.clone())
}

fn parse_instant(s: Option<&str>) -> Option<DateTime<Utc>> {
    s.and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
