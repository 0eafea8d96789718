use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

pub struct StatsWidget;

impl StatsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" By the numbers ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Palette::GREY))
            .style(Style::default().bg(Palette::PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let values = app.counters.display();
        if inner.height == 0 || values.is_empty() {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, values.len() as u32);
                values.len()
            ])
            .split(inner);

        for (column, (label, value)) in columns.iter().zip(values) {
            let lines = vec![
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Palette::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    label.to_string(),
                    Style::default().fg(Palette::DIM),
                )),
            ];

            // Center the value/label pair vertically in the column
            let pad = column.height.saturating_sub(lines.len() as u16) / 2;
            let cell = Rect {
                y: column.y + pad,
                height: column.height - pad,
                ..*column
            };
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), cell);
        }
    }
}
