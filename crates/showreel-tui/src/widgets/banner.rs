use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

pub struct BannerWidget;

impl BannerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let title = if app.deck.title.is_empty() {
            "showreel"
        } else {
            app.deck.title.as_str()
        };

        let mut lines = vec![Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))];
        if area.height >= 2 {
            lines.push(Line::from(Span::styled(
                "─".repeat(title.chars().count().min(area.width as usize)),
                Style::default().fg(Palette::GREY),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(Palette::BG));
        frame.render_widget(paragraph, area);
    }
}
