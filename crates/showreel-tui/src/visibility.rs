//! Viewport intersection for page sections.
//!
//! The page is laid out in fixed row coordinates and the viewport slides
//! over it; each frame the app recomputes how much of each section shows.
//! The carousel pauses when it leaves the viewport, and the stats section
//! arms its counters through a one-shot gate the first time enough of it
//! is revealed.

use ratatui::layout::Rect;

/// Fraction of a section currently inside the viewport, in [0, 1].
///
/// `top` and `height` are page-row coordinates; the viewport covers rows
/// `[scroll, scroll + viewport_height)`.
pub fn section_visibility(top: u16, height: u16, scroll: u16, viewport_height: u16) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let sec_start = u32::from(top);
    let sec_end = sec_start + u32::from(height);
    let view_start = u32::from(scroll);
    let view_end = view_start + u32::from(viewport_height);

    let overlap = sec_end.min(view_end).saturating_sub(sec_start.max(view_start));
    f64::from(overlap) / f64::from(u32::from(height))
}

/// In-view test with slack rows around the viewport, so the carousel keeps
/// playing while it is only just off screen.
pub fn section_in_view(
    top: u16,
    height: u16,
    scroll: u16,
    viewport_height: u16,
    margin_rows: u16,
    threshold: f64,
) -> bool {
    let widened_scroll = scroll.saturating_sub(margin_rows);
    let widened_height = viewport_height + margin_rows + (scroll - widened_scroll);
    let ratio = section_visibility(top, height, widened_scroll, widened_height);
    ratio > 0.0 && ratio >= threshold
}

/// Screen rectangle a section occupies after scrolling, clipped to the
/// viewport. `None` when the section is entirely off screen.
pub fn section_screen_rect(viewport: Rect, top: u16, height: u16, scroll: u16) -> Option<Rect> {
    let sec_start = u32::from(top);
    let sec_end = sec_start + u32::from(height);
    let view_start = u32::from(scroll);
    let view_end = view_start + u32::from(viewport.height);

    let vis_start = sec_start.max(view_start);
    let vis_end = sec_end.min(view_end);
    if vis_end <= vis_start {
        return None;
    }
    Some(Rect {
        x: viewport.x,
        y: viewport.y + (vis_start - view_start) as u16,
        width: viewport.width,
        height: (vis_end - vis_start) as u16,
    })
}

/// One-shot trigger that latches the first time visibility reaches a
/// threshold and never fires again.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    threshold: f64,
    fired: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Returns true exactly once, on the observation that crosses the
    /// threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if !self.fired && ratio >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
