use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = if app.carousel.is_autoplaying() {
            "AUTO"
        } else {
            "PAUSED"
        };

        let position = format!(
            "Slide {}/{}",
            app.carousel.current() + 1,
            app.carousel.slide_count()
        );

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | {}", mode_str, position)
        };

        let help_hint = " q:quit ←/→:slides j/k:scroll ";
        let padding_len = area.width.saturating_sub(
            status_text.chars().count() as u16 + help_hint.chars().count() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Palette::FG).bg(Palette::PANEL),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(Palette::PANEL),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(Palette::GREY).bg(Palette::PANEL),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
