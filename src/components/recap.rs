use chrono::Local;
use mlb_api::Recap;
use tui::buffer::Buffer;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Paragraph, Widget, Wrap};

/// Body of the recap modal: editorial headline, publish date, and blurb.
/// A recap without a blurb renders the same placeholder as no recap at all.
pub struct RecapModal<'a> {
    pub recap: Option<&'a Recap>,
}

impl<'a> Widget for RecapModal<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(recap) = self.recap.filter(|r| r.blurb.is_some()) else {
            Paragraph::new("No recap available.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        if let Some(headline) = recap.headline.as_deref() {
            lines.push(Line::styled(
                headline,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(date) = recap.date {
            lines.push(Line::styled(
                date.with_timezone(&Local).format("%A, %B %d, %Y %I:%M %p").to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        if let Some(blurb) = recap.blurb.as_deref() {
            lines.push(Line::raw(blurb));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_modal(recap: Option<&Recap>) -> String {
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        RecapModal { recap }.render(area, &mut buf);

        let mut out = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_missing_recap_shows_placeholder() {
        let text = render_modal(None);
        assert!(text.contains("No recap available."), "placeholder missing:\n{text}");
    }

    #[test]
    fn test_recap_without_blurb_shows_placeholder() {
        let recap = Recap {
            headline: Some("Opener postponed".to_string()),
            date: None,
            blurb: None,
        };
        let text = render_modal(Some(&recap));
        assert!(text.contains("No recap available."), "placeholder missing:\n{text}");
        assert!(!text.contains("Opener postponed"), "headline must not render alone");
    }

    #[test]
    fn test_full_recap_renders_headline_and_blurb() {
        let recap = Recap {
            headline: Some("O's walk it off".to_string()),
            date: None,
            blurb: Some("A ninth-inning single sealed it.".to_string()),
        };
        let text = render_modal(Some(&recap));
        assert!(text.contains("O's walk it off"), "headline missing:\n{text}");
        assert!(text.contains("ninth-inning"), "blurb missing:\n{text}");
        assert!(!text.contains("No recap available."));
    }

    #[test]
    fn test_long_blurb_wraps_instead_of_clipping() {
        let recap = Recap {
            headline: None,
            date: None,
            blurb: Some("word ".repeat(40).trim_end().to_string()),
        };
        let text = render_modal(Some(&recap));
        let words = text.matches("word").count();
        assert!(words > 8, "wrapped blurb should keep most words, got {words}:\n{text}");
    }
}
