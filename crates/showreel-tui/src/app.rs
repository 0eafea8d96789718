use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use image::DynamicImage;
use ratatui::layout::Rect;
use tracing::warn;

use showreel_core::{AppConfig, Deck};

use crate::carousel::{Carousel, CarouselTiming};
use crate::counter::CounterBank;
use crate::event::ImageLoadResult;
use crate::gesture::{Swipe, SwipeTracker};
use crate::visibility::{section_in_view, section_visibility, VisibilityGate};

/// Page layout in page-row coordinates, before scrolling
pub const BANNER_HEIGHT: u16 = 3;
pub const CAROUSEL_TOP: u16 = BANNER_HEIGHT;
pub const CAROUSEL_HEIGHT: u16 = 16;
pub const SECTION_GAP: u16 = 1;
pub const STATS_TOP: u16 = CAROUSEL_TOP + CAROUSEL_HEIGHT + SECTION_GAP;
pub const STATS_HEIGHT: u16 = 7;
pub const FOOTER_HEIGHT: u16 = 12;

/// Load state of a slide's image
pub enum SlideImage {
    /// Slide has no image
    None,
    /// Decode task in flight
    Loading,
    Ready(DynamicImage),
    Failed(String),
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub deck: Deck,
    pub carousel: Carousel,
    pub swipe: SwipeTracker,
    pub counters: CounterBank,
    counter_gate: VisibilityGate,
    /// Indicator the keyboard cursor sits on (Tab/BackTab moves it)
    pub indicator_cursor: usize,
    /// Page scroll offset in rows
    pub scroll: u16,
    /// Height of the page viewport, updated on draw/resize
    pub viewport_height: u16,
    /// Screen rect of the slide panel from the last draw, for hit tests
    pub carousel_area: Option<Rect>,
    /// Screen rect of the indicator row from the last draw
    pub indicator_area: Option<Rect>,
    /// Screen rects of the prev/next buttons from the last draw
    pub prev_button_area: Option<Rect>,
    pub next_button_area: Option<Rect>,
    /// Per-slide image load state, indexed like the deck
    pub images: Vec<SlideImage>,
    hovered: bool,
    terminal_focused: bool,
    carousel_in_view: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, deck: Deck) -> Self {
        let timing = CarouselTiming::from_config(&config.carousel, config.ui.reduced_motion);
        let mut carousel = Carousel::new(deck.slides.len(), timing);
        carousel.start_autoplay();

        let counters = CounterBank::new(
            &deck.stats,
            Duration::from_millis(config.counter.duration_ms),
        );
        let counter_gate = VisibilityGate::new(config.counter.visibility_threshold);
        let swipe = SwipeTracker::new(config.gesture.min_swipe_distance);
        let images = deck
            .slides
            .iter()
            .map(|s| {
                if s.image.is_some() {
                    SlideImage::Loading
                } else {
                    SlideImage::None
                }
            })
            .collect();

        Self {
            config,
            deck,
            carousel,
            swipe,
            counters,
            counter_gate,
            indicator_cursor: 0,
            scroll: 0,
            viewport_height: 0,
            carousel_area: None,
            indicator_area: None,
            prev_button_area: None,
            next_button_area: None,
            images,
            hovered: false,
            terminal_focused: true,
            carousel_in_view: true,
            should_quit: false,
            status_message: None,
        }
    }

    /// Page row where the footer section starts
    pub fn footer_top(&self) -> u16 {
        if self.deck.stats.is_empty() {
            CAROUSEL_TOP + CAROUSEL_HEIGHT + SECTION_GAP
        } else {
            STATS_TOP + STATS_HEIGHT + SECTION_GAP
        }
    }

    /// Total page height in rows
    pub fn page_height(&self) -> u16 {
        self.footer_top() + FOOTER_HEIGHT
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        let jump = (self.viewport_height / 2).max(1);
        self.scroll = self.scroll.saturating_add(jump).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        let jump = (self.viewport_height / 2).max(1);
        self.scroll = self.scroll.saturating_sub(jump);
    }

    /// Keyboard focus region: the carousel responds to navigation keys
    /// only while it counts as in view
    pub fn carousel_has_focus(&self) -> bool {
        self.carousel_in_view
    }

    pub fn next_indicator(&mut self) {
        let count = self.carousel.slide_count();
        if count > 0 {
            self.indicator_cursor = (self.indicator_cursor + 1) % count;
        }
    }

    pub fn prev_indicator(&mut self) {
        let count = self.carousel.slide_count();
        if count > 0 {
            self.indicator_cursor = (self.indicator_cursor + count - 1) % count;
        }
    }

    pub fn activate_indicator(&mut self) {
        self.carousel.go_to(self.indicator_cursor);
    }

    pub fn toggle_autoplay(&mut self) {
        if self.carousel.is_autoplaying() {
            self.carousel.pause_autoplay();
            self.set_status("Autoplay paused");
        } else {
            self.carousel.start_autoplay();
            if self.carousel.is_autoplaying() {
                self.set_status("Autoplay resumed");
            } else {
                self.set_status("Autoplay unavailable (reduced motion)");
            }
        }
    }

    pub fn on_focus_gained(&mut self) {
        self.terminal_focused = true;
        if self.carousel_in_view {
            self.carousel.start_autoplay();
        }
    }

    pub fn on_focus_lost(&mut self) {
        self.terminal_focused = false;
        self.carousel.pause_autoplay();
        self.swipe.cancel();
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let inside = contains(self.carousel_area, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(self.prev_button_area, mouse.column, mouse.row) {
                    self.carousel.prev();
                } else if contains(self.next_button_area, mouse.column, mouse.row) {
                    self.carousel.next();
                } else if contains(self.indicator_area, mouse.column, mouse.row) {
                    if let Some(index) = self.indicator_at(mouse.column) {
                        self.indicator_cursor = index;
                        self.carousel.go_to(index);
                    }
                } else if inside {
                    self.swipe.press(mouse.column, mouse.row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.drag(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.release() {
                Some(Swipe::Left) => self.carousel.next(),
                Some(Swipe::Right) => self.carousel.prev(),
                None => {}
            },
            MouseEventKind::ScrollDown => self.scroll_down(),
            MouseEventKind::ScrollUp => self.scroll_up(),
            _ => {}
        }

        self.set_hovered(inside);
    }

    // The pointer resting on the carousel holds autoplay, like the
    // original's hover pause
    fn set_hovered(&mut self, inside: bool) {
        if inside == self.hovered {
            return;
        }
        self.hovered = inside;
        if inside {
            self.carousel.pause_autoplay();
        } else if self.terminal_focused && self.carousel_in_view {
            self.carousel.start_autoplay();
        }
    }

    /// Recompute section visibility from the scroll offset and apply the
    /// pause/resume and counter triggers. Call once per frame.
    pub fn update_visibility(&mut self) {
        let was_in_view = self.carousel_in_view;
        self.carousel_in_view = section_in_view(
            CAROUSEL_TOP,
            CAROUSEL_HEIGHT,
            self.scroll,
            self.viewport_height,
            self.config.carousel.visibility_margin_rows,
            self.config.carousel.visibility_threshold,
        );

        if was_in_view && !self.carousel_in_view {
            self.carousel.pause_autoplay();
        } else if !was_in_view && self.carousel_in_view && self.terminal_focused {
            self.carousel.start_autoplay();
        }

        if !self.deck.stats.is_empty() {
            let ratio =
                section_visibility(STATS_TOP, STATS_HEIGHT, self.scroll, self.viewport_height);
            if self.counter_gate.observe(ratio) {
                self.counters.fire();
            }
        }
    }

    pub fn handle_image_result(&mut self, result: ImageLoadResult) {
        match result {
            ImageLoadResult::Success { slide, image } => {
                if let Some(state) = self.images.get_mut(slide) {
                    *state = SlideImage::Ready(image);
                }
            }
            ImageLoadResult::Failure { slide, error } => {
                warn!("slide {} image failed to load: {}", slide + 1, error);
                if let Some(state) = self.images.get_mut(slide) {
                    *state = SlideImage::Failed(error);
                }
            }
        }
    }

    /// True while something is animating and the event loop should poll
    /// at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.carousel.transition_frame().is_some() || self.counters.is_animating()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn indicator_at(&self, x: u16) -> Option<usize> {
        let area = self.indicator_area?;
        // Indicators are drawn two cells apart
        let index = usize::from(x.checked_sub(area.x)?) / 2;
        (index < self.carousel.slide_count()).then_some(index)
    }
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|r| {
        x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
    })
}
