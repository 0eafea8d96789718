use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

pub struct FooterWidget;

impl FooterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Palette::GREY))
            .style(Style::default().bg(Palette::BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let dim = Style::default().fg(Palette::DIM);
        let grey = Style::default().fg(Palette::GREY);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "{} — {} slides",
                    if app.deck.title.is_empty() {
                        "showreel"
                    } else {
                        app.deck.title.as_str()
                    },
                    app.deck.slides.len()
                ),
                dim,
            )),
            Line::default(),
            Line::from(Span::styled("←/→ slides · Home/End jump · 1-9 direct", grey)),
            Line::from(Span::styled("Tab cycles indicators · Enter activates", grey)),
            Line::from(Span::styled("j/k scroll the page · p pauses · q quits", grey)),
        ];
        if app.config.ui.reduced_motion {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("reduced motion is on", grey)));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
