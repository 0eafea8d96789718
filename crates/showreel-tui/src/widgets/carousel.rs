use image::{DynamicImage, GenericImageView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use showreel_core::Slide;

use crate::app::{App, SlideImage};
use crate::carousel::controller::TransitionFrame;
use crate::carousel::timing::lerp_u16;
use crate::theme::Palette;

/// Visual role of a slide panel, the active/prev styling pair
#[derive(Clone, Copy, PartialEq, Eq)]
enum SlideRole {
    Active,
    Prev,
}

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let border_style = if app.carousel_has_focus() {
            Style::default().fg(Palette::ACCENT)
        } else {
            Style::default().fg(Palette::GREY)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(Palette::PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 || inner.width < 8 {
            // Clipped too far by scrolling to be interactive
            app.carousel_area = None;
            app.indicator_area = None;
            app.prev_button_area = None;
            app.next_button_area = None;
            return;
        }

        let panel = Rect {
            height: inner.height - 1,
            ..inner
        };
        let indicator_row = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        app.carousel_area = Some(panel);

        match app.carousel.transition_frame() {
            Some(t) => Self::render_transition(frame, panel, app, t),
            None => Self::render_slide(frame, panel, app, app.carousel.current()),
        }

        Self::render_nav_buttons(frame, panel, app);
        Self::render_indicators(frame, indicator_row, app);
    }

    /// Push animation: the incoming slide sweeps in from the travel edge
    /// while the departing slide is shoved out the other side.
    fn render_transition(frame: &mut Frame, panel: Rect, app: &App, t: TransitionFrame) {
        let reveal = lerp_u16(0, panel.width, t.progress);
        let remain = panel.width - reveal;
        let current = app.carousel.current();

        let departing = &app.deck.slides[t.from];
        let incoming = &app.deck.slides[current];

        if t.forward {
            let dep = Rect {
                width: remain,
                ..panel
            };
            let act = Rect {
                x: panel.x + remain,
                width: reveal,
                ..panel
            };
            Self::render_slide_strip(frame, dep, panel.width, reveal, departing, SlideRole::Prev);
            Self::render_slide_strip(frame, act, panel.width, 0, incoming, SlideRole::Active);
        } else {
            let act = Rect {
                width: reveal,
                ..panel
            };
            let dep = Rect {
                x: panel.x + reveal,
                width: remain,
                ..panel
            };
            Self::render_slide_strip(frame, act, panel.width, remain, incoming, SlideRole::Active);
            Self::render_slide_strip(frame, dep, panel.width, 0, departing, SlideRole::Prev);
        }
    }

    /// Render a slide laid out for `full_width` into a narrower strip,
    /// scrolled `x_scroll` columns into the content
    fn render_slide_strip(
        frame: &mut Frame,
        strip: Rect,
        full_width: u16,
        x_scroll: u16,
        slide: &Slide,
        role: SlideRole,
    ) {
        if strip.width == 0 || strip.height == 0 {
            return;
        }
        let text = Self::slide_text(slide, full_width, strip.height, role);
        let paragraph = Paragraph::new(text).scroll((0, x_scroll));
        frame.render_widget(paragraph, strip);
    }

    /// Steady-state rendering of the active slide, image included
    fn render_slide(frame: &mut Frame, panel: Rect, app: &App, index: usize) {
        let slide = &app.deck.slides[index];

        if let Some(SlideImage::Ready(img)) = app.images.get(index) {
            let image_height = panel.height.saturating_sub(5);
            if image_height >= 4 {
                let image_area = Rect {
                    height: image_height,
                    ..panel
                };
                Self::render_image(frame, image_area, img);
                let text_area = Rect {
                    y: panel.y + image_height,
                    height: panel.height - image_height,
                    ..panel
                };
                Self::render_slide_strip(
                    frame,
                    text_area,
                    panel.width,
                    0,
                    slide,
                    SlideRole::Active,
                );
                return;
            }
        }

        Self::render_slide_strip(frame, panel, panel.width, 0, slide, SlideRole::Active);

        // Pending or failed image states show as a footnote in the panel
        let note = match app.images.get(index) {
            Some(SlideImage::Loading) => Some(Span::styled(
                "loading image…",
                Style::default().fg(Palette::GREY),
            )),
            Some(SlideImage::Failed(_)) => Some(Span::styled(
                "image unavailable",
                Style::default().fg(Palette::ERROR),
            )),
            _ => None,
        };
        if let Some(note) = note {
            let note_area = Rect {
                y: panel.y + panel.height - 1,
                height: 1,
                ..panel
            };
            frame.render_widget(
                Paragraph::new(Line::from(note))
                    .alignment(ratatui::layout::Alignment::Center),
                note_area,
            );
        }
    }

    fn slide_text(slide: &Slide, width: u16, height: u16, role: SlideRole) -> Text<'static> {
        let (title_style, body_style) = match role {
            SlideRole::Active => (
                Style::default()
                    .fg(Palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Palette::FG),
            ),
            SlideRole::Prev => (
                Style::default()
                    .fg(Palette::DIM)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Palette::DIM),
            ),
        };

        // Lines are laid out against the full panel width by hand so the
        // push animation can scroll them without reflowing
        let center = |s: &str| {
            let pad = usize::from(width).saturating_sub(s.width()) / 2;
            format!("{}{}", " ".repeat(pad), s)
        };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            center(&slide.title),
            title_style,
        )));
        lines.push(Line::default());
        for body_line in slide.body.lines() {
            lines.push(Line::from(Span::styled(center(body_line), body_style)));
        }

        // Pad the block into vertical center
        let pad_top = usize::from(height).saturating_sub(lines.len()) / 2;
        let mut text = Text::default();
        for _ in 0..pad_top {
            text.lines.push(Line::default());
        }
        text.lines.extend(lines);
        text
    }

    fn render_nav_buttons(frame: &mut Frame, panel: Rect, app: &mut App) {
        let style = Style::default()
            .fg(Palette::DIM)
            .add_modifier(Modifier::BOLD);
        let mid_y = panel.y + panel.height / 2;

        let prev_btn = Rect::new(panel.x, mid_y, 3, 1);
        let next_btn = Rect::new(panel.x + panel.width - 3, mid_y, 3, 1);
        frame.render_widget(Paragraph::new(Span::styled(" ‹ ", style)), prev_btn);
        frame.render_widget(Paragraph::new(Span::styled(" › ", style)), next_btn);

        app.prev_button_area = Some(prev_btn);
        app.next_button_area = Some(next_btn);
    }

    fn render_indicators(frame: &mut Frame, row: Rect, app: &mut App) {
        let count = app.carousel.slide_count();
        if count == 0 {
            app.indicator_area = None;
            return;
        }

        let width_needed = (count * 2) as u16;
        if width_needed > row.width {
            app.indicator_area = None;
            return;
        }
        let start_x = row.x + (row.width - width_needed) / 2;

        let current = app.carousel.current();
        let mut spans: Vec<Span> = Vec::with_capacity(count * 2);
        for i in 0..count {
            let symbol = if i == current { "●" } else { "○" };
            let mut style = if i == current {
                Style::default().fg(Palette::ACCENT)
            } else {
                Style::default().fg(Palette::GREY)
            };
            if i == app.indicator_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
        }

        let indicator_area = Rect::new(start_x, row.y, width_needed, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), indicator_area);
        app.indicator_area = Some(indicator_area);

        // Autoplay badge at the right edge, the `auto-playing` class analog
        if app.carousel.is_autoplaying() && row.width >= width_needed + 8 {
            let badge = Rect::new(row.x + row.width - 7, row.y, 7, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "▶ auto",
                    Style::default().fg(Palette::GREEN),
                )),
                badge,
            );
        }
    }

    /// Halfblock rendering: each cell shows two vertically stacked pixels
    fn render_image(frame: &mut Frame, area: Rect, img: &DynamicImage) {
        let target_width = u32::from(area.width);
        let target_height = u32::from(area.height) * 2;
        if target_width == 0 || target_height == 0 {
            return;
        }

        let (img_width, img_height) = img.dimensions();
        if img_width == 0 || img_height == 0 {
            return;
        }
        let scale = (target_width as f32 / img_width as f32)
            .min(target_height as f32 / img_height as f32);
        let new_width = ((img_width as f32 * scale) as u32).clamp(1, target_width);
        let new_height = ((img_height as f32 * scale) as u32).clamp(1, target_height);

        let resized = img.resize_exact(new_width, new_height, image::imageops::FilterType::Triangle);
        let rgba = resized.to_rgba8();

        let rows = (new_height.div_ceil(2)).min(u32::from(area.height));
        let x_offset = (target_width - new_width) / 2;
        let y_offset = (u32::from(area.height) - rows) / 2;

        for row in 0..rows {
            let y = row * 2;
            let mut spans: Vec<Span> = Vec::with_capacity(new_width as usize + 1);
            if x_offset > 0 {
                spans.push(Span::raw(" ".repeat(x_offset as usize)));
            }
            for x in 0..new_width {
                let top = rgba.get_pixel(x, y);
                let bottom = if y + 1 < new_height {
                    rgba.get_pixel(x, y + 1)
                } else {
                    top
                };
                spans.push(Span::styled(
                    "▀",
                    Style::default()
                        .fg(Color::Rgb(top[0], top[1], top[2]))
                        .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                ));
            }

            let line_area = Rect {
                x: area.x,
                y: area.y + (y_offset + row) as u16,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
        }
    }
}
