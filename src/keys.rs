use crate::app::App;
use crate::state::app_state::RotateDirection;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Focus is derived from geometry, so rotation lands it on whichever
        // card moves into the center slot.
        (KeyCode::Left, _) => guard.rotate_carousel(RotateDirection::Left),
        (KeyCode::Right, _) => guard.rotate_carousel(RotateDirection::Right),

        // Date stepping fires a fetch; works with the recap modal open too.
        (KeyCode::Up, _) => {
            let date = guard.step_date_forward();
            let token = guard.begin_fetch();
            drop(guard);
            let _ = network_requests
                .send(NetworkRequest::LoadSchedule { date, token })
                .await;
        }
        (KeyCode::Down, _) => {
            let date = guard.step_date_back();
            let token = guard.begin_fetch();
            drop(guard);
            let _ = network_requests
                .send(NetworkRequest::LoadSchedule { date, token })
                .await;
        }

        // Recap modal
        (KeyCode::Enter, _) => guard.toggle_modal(None),

        // Log pane; dismisses the modal like any other non-widget key.
        (Char('"'), _) => {
            guard.toggle_show_logs();
            guard.close_modal();
        }

        // Any other key force-closes the modal.
        _ => guard.toggle_modal(Some(false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mlb_api::{Game, Recap, TeamLine};

    fn named_games(names: &[&str]) -> Vec<Game> {
        names
            .iter()
            .map(|name| Game {
                home: TeamLine { name: name.to_string(), score: None },
                recap: Some(Recap {
                    headline: Some(format!("{name} recap")),
                    date: None,
                    blurb: Some("blurb".to_string()),
                }),
                ..Game::default()
            })
            .collect()
    }

    /// 90-column strip of 30-wide cards: three visible, focus on index 1.
    fn test_app(games: Vec<Game>) -> Arc<Mutex<App>> {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).expect("valid test date");
        let mut app = App {
            settings: crate::state::app_settings::AppSettings::default(),
            state: crate::state::app_state::AppState::new(date),
        };
        app.state.carousel.set_strip_width(90);
        let token = app.begin_fetch();
        app.on_schedule_loaded(token, games);
        Arc::new(Mutex::new(app))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn order_of(app: &App) -> Vec<String> {
        app.state.carousel.games().iter().map(|g| g.home.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_left_right_rotate_without_requests() {
        let app = test_app(named_games(&["A", "B", "C"]));
        let (tx, mut rx) = mpsc::channel(10);

        handle_key_bindings(key(KeyCode::Left), &app, &tx).await;
        assert_eq!(order_of(&*app.lock().await), vec!["C", "A", "B"]);

        handle_key_bindings(key(KeyCode::Right), &app, &tx).await;
        assert_eq!(order_of(&*app.lock().await), vec!["A", "B", "C"]);

        assert!(rx.try_recv().is_err(), "rotation must not hit the network");
    }

    #[tokio::test]
    async fn test_up_requests_the_next_day() {
        let app = test_app(named_games(&["A"]));
        let (tx, mut rx) = mpsc::channel(10);

        handle_key_bindings(key(KeyCode::Up), &app, &tx).await;

        let request = rx.try_recv().expect("date step should queue a fetch");
        let NetworkRequest::LoadSchedule { date, token } = request;
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 5, 2).unwrap());
        assert_eq!(token, 2, "second fetch after the initial load");
    }

    #[tokio::test]
    async fn test_down_requests_the_previous_day() {
        let app = test_app(named_games(&["A"]));
        let (tx, mut rx) = mpsc::channel(10);

        handle_key_bindings(key(KeyCode::Down), &app, &tx).await;

        let request = rx.try_recv().expect("date step should queue a fetch");
        let NetworkRequest::LoadSchedule { date, .. } = request;
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
    }

    #[tokio::test]
    async fn test_enter_toggles_modal_for_focused_game() {
        let app = test_app(named_games(&["A", "B", "C"]));
        let (tx, _rx) = mpsc::channel(10);

        handle_key_bindings(key(KeyCode::Enter), &app, &tx).await;
        {
            let guard = app.lock().await;
            assert!(guard.state.modal.visible);
            let headline =
                guard.state.modal.recap.as_ref().and_then(|r| r.headline.as_deref());
            assert_eq!(headline, Some("B recap"));
        }

        handle_key_bindings(key(KeyCode::Enter), &app, &tx).await;
        assert!(!app.lock().await.state.modal.visible);
    }

    #[tokio::test]
    async fn test_unbound_key_force_closes_modal() {
        let app = test_app(named_games(&["A", "B", "C"]));
        let (tx, _rx) = mpsc::channel(10);

        handle_key_bindings(key(KeyCode::Enter), &app, &tx).await;
        assert!(app.lock().await.state.modal.visible);

        handle_key_bindings(key(Char('x')), &app, &tx).await;
        assert!(!app.lock().await.state.modal.visible);
    }
}
