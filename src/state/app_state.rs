use crate::components::card::CARD_WIDTH;
use chrono::NaiveDate;
use mlb_api::{Game, Recap};

// ---------------------------------------------------------------------------
// Date resolution
// ---------------------------------------------------------------------------

/// Resolve the date whose schedule the widget opens on.
///
/// Priority: an explicit date argument, then the ambient environment value,
/// then today. A value that does not parse falls through to the next source.
pub fn resolve_play_date(
    explicit: Option<&str>,
    ambient: Option<&str>,
    today: NaiveDate,
) -> NaiveDate {
    explicit
        .and_then(parse_loose_date)
        .or_else(|| ambient.and_then(parse_loose_date))
        .unwrap_or(today)
}

/// Accepts plain calendar dates and full RFC 3339 timestamps.
fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

// ---------------------------------------------------------------------------
// Game carousel state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

#[derive(Debug, Default)]
pub struct CarouselState {
    games: Vec<Game>,
    /// Width in terminal columns of the strip the cards render into.
    strip_width: u16,
}

impl CarouselState {
    /// Replace the whole game sequence. A fresh fetch never merges.
    pub fn load(&mut self, games: Vec<Game>) {
        self.games = games;
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn set_strip_width(&mut self, width: u16) {
        self.strip_width = width;
    }

    /// Left brings the last card to the front; Right sends the first card to
    /// the back. Repeated presses cycle through the whole day's slate.
    pub fn rotate(&mut self, direction: RotateDirection) {
        if self.games.len() <= 1 {
            return;
        }
        match direction {
            RotateDirection::Left => self.games.rotate_right(1),
            RotateDirection::Right => self.games.rotate_left(1),
        }
    }

    /// Focus is derived from the current geometry on every read, never stored,
    /// so rotation and resize cannot leave it stale.
    pub fn focus_index(&self) -> Option<usize> {
        compute_focus_index(self.strip_width, CARD_WIDTH, self.games.len())
    }

    pub fn focused_game(&self) -> Option<&Game> {
        self.games.get(self.focus_index()?)
    }
}

/// Index of the card considered "in focus" for a strip of `item_count` cards
/// rendered left to right in a container `container_width` columns wide.
///
/// The focused slot is the floor of half the visible count, so an even
/// visible count picks the later of the two middle slots. Clamped so short
/// lists always focus a real card.
pub fn compute_focus_index(
    container_width: u16,
    item_width: u16,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let visible = container_width / item_width.max(1);
    let center = (visible / 2) as usize;
    Some(center.min(item_count - 1))
}

// ---------------------------------------------------------------------------
// Recap modal state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ModalState {
    pub visible: bool,
    /// Recap copied from the focused game when the modal opened. Cleared on
    /// close so a stale recap can never show for a different game.
    pub recap: Option<Recap>,
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

pub struct AppState {
    /// The calendar date whose schedule is on screen.
    pub play_date: NaiveDate,
    pub carousel: CarouselState,
    pub modal: ModalState,
    pub show_logs: bool,
    pub last_error: Option<String>,
    /// Token of the most recent fetch; responses carrying an older one are stale.
    pub latest_fetch: u64,
}

impl AppState {
    pub fn new(play_date: NaiveDate) -> Self {
        Self {
            play_date,
            carousel: CarouselState::default(),
            modal: ModalState::default(),
            show_logs: false,
            last_error: None,
            latest_fetch: 0,
        }
    }
}
