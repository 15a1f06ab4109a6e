/// MLB Stats API raw wire types — serde shapes for deserializing schedule responses.
/// These map to our clean domain types via the mapping functions in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Schedule  (/api/v1/schedule, hydrated with editorial recaps)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub dates: Option<Vec<ScheduleDate>>,
    #[serde(rename = "totalGames")]
    pub total_games: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleDate {
    pub date: Option<String>, // "2023-05-01"
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: Option<u64>,
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>, // ISO 8601
    pub teams: Option<ScheduleTeams>,
    pub venue: Option<ScheduleVenue>,
    pub status: Option<ScheduleStatus>,
    pub content: Option<ScheduleContent>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleTeams {
    pub home: Option<ScheduleTeamSide>,
    pub away: Option<ScheduleTeamSide>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleTeamSide {
    pub team: Option<ScheduleTeam>,
    pub score: Option<u16>,
    #[serde(rename = "isWinner")]
    pub is_winner: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleTeam {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleVenue {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleStatus {
    #[serde(rename = "statusCode")]
    pub status_code: Option<String>, // "S" scheduled, "I" in progress, "F" final, ...
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>,
}

// ---------------------------------------------------------------------------
// Editorial content  (hydrate=game(content(editorial(recap))))
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleContent {
    pub editorial: Option<ScheduleEditorial>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleEditorial {
    pub recap: Option<ScheduleRecapNode>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleRecapNode {
    pub mlb: Option<ScheduleRecap>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleRecap {
    pub headline: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub blurb: Option<String>,
    pub photo: Option<SchedulePhoto>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SchedulePhoto {
    pub cuts: Option<Vec<SchedulePhotoCut>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SchedulePhotoCut {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub src: Option<String>,
}
