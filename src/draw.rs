use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::card::{CARD_HEIGHT, CARD_WIDTH, GameCard};
use crate::components::recap::RecapModal;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area());

            draw_header(f, layout.header, app);
            draw_card_strip(f, layout.strip, app);
            draw_footer(f, layout.footer, app);

            if app.state.show_logs {
                draw_log_pane(f, f.area());
            }
            if app.state.modal.visible {
                draw_recap_modal(f, f.area(), app);
            }

            draw_loading_spinner(f, f.area(), loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let [title_area, legend_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let title = Line::from(vec![
        Span::styled(
            "MLB Schedule",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.state.play_date.format("%A, %B %d, %Y")),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    f.render_widget(
        Paragraph::new("Keys: ←/→=rotate  ↑/↓=change day  Enter=recap  \"=logs  q=quit")
            .style(Style::default().fg(Color::DarkGray)),
        legend_area,
    );
}

fn draw_card_strip(f: &mut Frame, area: Rect, app: &App) {
    if app.state.carousel.is_empty() {
        f.render_widget(
            Paragraph::new(format!(
                "No games scheduled for {}",
                app.state.play_date.format("%Y-%m-%d")
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let visible = (area.width / CARD_WIDTH).max(1) as usize;
    let focus = app.state.carousel.focus_index();
    let card_height = area.height.min(CARD_HEIGHT);

    for (idx, game) in app.state.carousel.games().iter().take(visible).enumerate() {
        let x = area.x + idx as u16 * CARD_WIDTH;
        let width = CARD_WIDTH.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let card_area = Rect::new(x, area.y, width, card_height);
        f.render_widget(GameCard { game, focused: focus == Some(idx) }, card_area);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    if let Some(err) = app.state.last_error.as_deref() {
        f.render_widget(
            Paragraph::new(format!("Error: {err}")).style(Style::default().fg(Color::Red)),
            area,
        );
        return;
    }

    // Art URL for the focused game; a consumer with image support renders it.
    let Some(game) = app.state.carousel.focused_game() else {
        return;
    };
    f.render_widget(
        Paragraph::new(game.image_url.as_str()).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_recap_modal(f: &mut Frame, area: Rect, app: &App) {
    let modal_area = centered_rect(area, 60, 50);
    f.render_widget(Clear, modal_area);

    let block = default_border(Color::Yellow).title(" Recap ");
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);
    f.render_widget(RecapModal { recap: app.state.modal.recap.as_ref() }, inner);
}

fn draw_log_pane(f: &mut Frame, area: Rect) {
    let pane = centered_rect(area, 80, 60);
    f.render_widget(Clear, pane);

    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray))
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_file(false)
        .output_line(false);
    f.render_widget(logs, pane);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, centered, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    centered
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    f.render_widget(spinner, Rect::new(area.width.saturating_sub(2), 0, 1, 1));
}
