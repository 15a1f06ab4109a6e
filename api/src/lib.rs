pub mod client;
pub mod statsapi;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the Stats API wire format
// ---------------------------------------------------------------------------

/// One scheduled game, flattened out of the schedule response. Values are
/// snapshots: a fresh fetch replaces the whole list rather than mutating
/// games in place.
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub game_date: Option<DateTime<Utc>>,
    pub home: TeamLine,
    pub away: TeamLine,
    pub venue: Option<String>,
    pub image_url: String, // recap photo cut, or the league logo fallback
    pub status_code: Option<String>, // raw Stats API code; only "F" changes behavior
    pub recap: Option<Recap>,
}

impl Game {
    /// Scores are carried whenever the API sends them, but they are only
    /// meaningful to show once the game has gone final.
    pub fn is_final(&self) -> bool {
        self.status_code.as_deref() == Some("F")
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamLine {
    pub name: String,
    pub score: Option<u16>,
}

/// Editorial recap attached to a game. A recap without a `blurb` is treated
/// the same as no recap at all when it comes to showing text.
#[derive(Debug, Clone, Default)]
pub struct Recap {
    pub headline: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub blurb: Option<String>,
}
