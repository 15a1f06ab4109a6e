use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, RotateDirection};
use chrono::NaiveDate;
use log::{debug, error, warn};
use mlb_api::Game;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(play_date: NaiveDate, strip_width: u16) -> Self {
        let settings = AppSettings::load();

        let mut app = Self {
            state: AppState::new(play_date),
            settings,
        };
        app.state.carousel.set_strip_width(strip_width);

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Mint the token for a fetch that is about to be requested. Responses
    /// carrying an older token are discarded, so the last date asked for wins
    /// no matter how the responses are ordered.
    pub fn begin_fetch(&mut self) -> u64 {
        self.state.latest_fetch += 1;
        self.state.latest_fetch
    }

    pub fn on_schedule_loaded(&mut self, token: u64, games: Vec<Game>) -> bool {
        if token != self.state.latest_fetch {
            debug!("discarding stale schedule response (token {token})");
            return false;
        }
        self.state.last_error = None;
        self.state.carousel.load(games);
        self.close_modal();
        true
    }

    pub fn on_schedule_failed(&mut self, token: u64, message: String) -> bool {
        if token != self.state.latest_fetch {
            debug!("discarding stale schedule failure (token {token})");
            return false;
        }
        error!("Schedule load failed: {message}");
        self.state.carousel.clear();
        self.state.last_error = Some(message);
        self.close_modal();
        true
    }

    // -----------------------------------------------------------------------
    // Date stepping
    // -----------------------------------------------------------------------

    pub fn step_date_forward(&mut self) -> NaiveDate {
        if let Some(next) = self.state.play_date.succ_opt() {
            self.state.play_date = next;
        }
        self.state.play_date
    }

    pub fn step_date_back(&mut self) -> NaiveDate {
        if let Some(prev) = self.state.play_date.pred_opt() {
            self.state.play_date = prev;
        }
        self.state.play_date
    }

    // -----------------------------------------------------------------------
    // Carousel and recap modal
    // -----------------------------------------------------------------------

    pub fn rotate_carousel(&mut self, direction: RotateDirection) {
        self.state.carousel.rotate(direction);
    }

    /// `explicit` forces a state (`Some(false)` closes, `Some(true)` opens);
    /// `None` flips. Opening snapshots the focused game's recap into the
    /// modal so later rotations cannot swap the content underneath it.
    pub fn toggle_modal(&mut self, explicit: Option<bool>) {
        let target = explicit.unwrap_or(!self.state.modal.visible);
        if !target {
            self.close_modal();
            return;
        }
        let Some(game) = self.state.carousel.focused_game() else {
            warn!("no focused game to open the recap modal for");
            self.close_modal();
            return;
        };
        let recap = game.recap.clone();
        self.state.modal.recap = recap;
        self.state.modal.visible = true;
    }

    pub fn close_modal(&mut self) {
        self.state.modal.visible = false;
        self.state.modal.recap = None;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn on_resize(&mut self, width: u16) {
        self.state.carousel.set_strip_width(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlb_api::{Recap, TeamLine};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// App built without `App::new` so tests stay clear of env vars and the
    /// global logger.
    fn test_app(strip_width: u16) -> App {
        let mut app = App {
            settings: AppSettings::default(),
            state: AppState::new(day(2023, 5, 1)),
        };
        app.state.carousel.set_strip_width(strip_width);
        app
    }

    fn named_game(name: &str) -> Game {
        Game {
            home: TeamLine { name: name.to_string(), score: None },
            ..Game::default()
        }
    }

    fn game_with_recap(name: &str, blurb: &str) -> Game {
        let mut game = named_game(name);
        game.recap = Some(Recap {
            headline: Some(format!("{name} wins")),
            date: None,
            blurb: Some(blurb.to_string()),
        });
        game
    }

    #[test]
    fn test_stale_schedule_response_is_discarded() {
        let mut app = test_app(90);
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        assert!(app.on_schedule_loaded(second, vec![named_game("A"), named_game("B")]));
        assert!(
            !app.on_schedule_loaded(first, vec![named_game("OLD")]),
            "a response for an earlier fetch must not replace the newer list"
        );
        assert_eq!(app.state.carousel.len(), 2);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_games() {
        let mut app = test_app(90);
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        assert!(app.on_schedule_loaded(second, vec![named_game("A")]));
        assert!(!app.on_schedule_failed(first, "timed out".to_string()));
        assert_eq!(app.state.carousel.len(), 1);
        assert!(app.state.last_error.is_none());
    }

    #[test]
    fn test_current_failure_empties_list_and_closes_modal() {
        let mut app = test_app(90);
        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![game_with_recap("A", "recap text")]));
        app.toggle_modal(None);
        assert!(app.state.modal.visible);

        let token = app.begin_fetch();
        assert!(app.on_schedule_failed(token, "boom".to_string()));
        assert!(app.state.carousel.is_empty());
        assert_eq!(app.state.last_error.as_deref(), Some("boom"));
        assert!(!app.state.modal.visible);
    }

    #[test]
    fn test_toggle_modal_without_focus_stays_closed() {
        let mut app = test_app(90);
        app.toggle_modal(None);
        assert!(!app.state.modal.visible);
        app.toggle_modal(Some(true));
        assert!(!app.state.modal.visible);
    }

    #[test]
    fn test_modal_copies_recap_on_open_and_clears_on_close() {
        let mut app = test_app(90);
        let token = app.begin_fetch();
        // 90 columns: 3 visible, focus index 1
        assert!(app.on_schedule_loaded(
            token,
            vec![named_game("A"), game_with_recap("B", "the story"), named_game("C")],
        ));

        app.toggle_modal(None);
        assert!(app.state.modal.visible);
        let blurb = app.state.modal.recap.as_ref().and_then(|r| r.blurb.as_deref());
        assert_eq!(blurb, Some("the story"));

        // the snapshot survives rotation while open
        app.rotate_carousel(RotateDirection::Right);
        let blurb = app.state.modal.recap.as_ref().and_then(|r| r.blurb.as_deref());
        assert_eq!(blurb, Some("the story"));

        app.toggle_modal(None);
        assert!(!app.state.modal.visible);
        assert!(app.state.modal.recap.is_none());
    }

    #[test]
    fn test_modal_opens_in_placeholder_state_without_recap() {
        let mut app = test_app(30);
        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![named_game("A")]));

        app.toggle_modal(None);
        assert!(app.state.modal.visible, "modal opens even when there is no recap");
        assert!(app.state.modal.recap.is_none());
    }

    #[test]
    fn test_modal_carries_blurbless_recap_as_is() {
        let mut app = test_app(30);
        let mut game = named_game("A");
        game.recap = Some(Recap {
            headline: Some("Rain delay".to_string()),
            date: None,
            blurb: None,
        });
        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![game]));

        app.toggle_modal(Some(true));
        assert!(app.state.modal.visible);
        let recap = app.state.modal.recap.as_ref().expect("recap copied over");
        assert!(recap.blurb.is_none(), "placeholder rendering is the widget's call");
    }

    #[test]
    fn test_new_schedule_closes_modal() {
        let mut app = test_app(30);
        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![game_with_recap("A", "text")]));
        app.toggle_modal(None);
        assert!(app.state.modal.visible);

        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![named_game("B")]));
        assert!(!app.state.modal.visible);
        assert!(app.state.modal.recap.is_none());
    }

    #[test]
    fn test_date_stepping() {
        let mut app = test_app(90);
        assert_eq!(app.step_date_forward(), day(2023, 5, 2));
        assert_eq!(app.step_date_back(), day(2023, 5, 1));
        assert_eq!(app.step_date_back(), day(2023, 4, 30));
    }

    #[test]
    fn test_resize_only_touches_strip_width() {
        let mut app = test_app(90);
        let token = app.begin_fetch();
        assert!(app.on_schedule_loaded(token, vec![named_game("A"), named_game("B")]));
        app.on_resize(30);
        assert_eq!(app.state.carousel.focus_index(), Some(0));
        assert_eq!(app.state.carousel.len(), 2);
        assert_eq!(app.state.play_date, day(2023, 5, 1));
    }
}
