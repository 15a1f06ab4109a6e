use chrono::Local;
use mlb_api::Game;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, BorderType, Borders, Widget};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Card width in terminal columns. The focus calculation divides the strip
/// width by this, so card layout and focus math stay in lockstep.
pub const CARD_WIDTH: u16 = 30;

/// Rows per card: border, matchup (3), spacer, date, venue, scores (2), border.
pub const CARD_HEIGHT: u16 = 10;

// ---------------------------------------------------------------------------
// GameCard widget
// ---------------------------------------------------------------------------

/// One schedule entry rendered as a bordered card in the carousel strip.
pub struct GameCard<'a> {
    pub game: &'a Game,
    pub focused: bool,
}

impl<'a> Widget for GameCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let border_color = if self.focused { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let name_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let gray = Style::default().fg(Color::Gray);

        let mut rows = inner.rows();

        if let Some(row) = rows.next() {
            put_line(buf, row, &self.game.home.name, name_style);
        }
        if let Some(row) = rows.next() {
            put_centered(buf, row, "vs", dim);
        }
        if let Some(row) = rows.next() {
            put_line(buf, row, &self.game.away.name, name_style);
        }
        rows.next(); // spacer

        if let Some(row) = rows.next() {
            if let Some(start) = self.game.game_date {
                let local = start.with_timezone(&Local);
                put_line(buf, row, &local.format("%m/%d %I:%M%p").to_string(), gray);
            }
        }
        if let Some(row) = rows.next() {
            if let Some(venue) = self.game.venue.as_deref() {
                put_line(buf, row, venue, dim);
            }
        }

        // Score lines appear only once the game has gone final.
        if self.game.is_final() {
            if let Some(row) = rows.next() {
                put_line(buf, row, &score_line(&self.game.home.name, self.game.home.score), gray);
            }
            if let Some(row) = rows.next() {
                put_line(buf, row, &score_line(&self.game.away.name, self.game.away.score), gray);
            }
        }
    }
}

fn score_line(name: &str, score: Option<u16>) -> String {
    match score {
        Some(s) => format!("{name}: {s}"),
        None => format!("{name}: -"),
    }
}

fn put_line(buf: &mut Buffer, row: Rect, text: &str, style: Style) {
    let clipped: String = text.chars().take(row.width as usize).collect();
    buf.set_string(row.x, row.y, &clipped, style);
}

fn put_centered(buf: &mut Buffer, row: Rect, text: &str, style: Style) {
    let len = text.chars().count() as u16;
    let x = row.x + row.width.saturating_sub(len) / 2;
    put_line(buf, Rect { x, ..row }, text, style);
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
