use crate::state::network::LoadingState;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use mlb_api::Game;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadSchedule { date: NaiveDate, token: u64 },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// `token` echoes the request that produced this response; the UI drops
    /// responses whose token is older than its latest fetch.
    ScheduleLoaded { token: u64, games: Vec<Game> },
    ScheduleFailed { token: u64, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize(u16, u16),
    AppStarted,
}
