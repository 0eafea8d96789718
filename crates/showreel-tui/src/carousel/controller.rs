use std::time::{Duration, Instant};

use showreel_core::config::CarouselConfig;
use showreel_core::EasingType;

use super::easing::EasingTypeExt;
use super::timing::{is_complete, progress};

/// Timing knobs for the carousel, derived from config once at startup.
///
/// Reduced motion halves the transition window and keeps autoplay off for
/// the lifetime of the carousel.
#[derive(Debug, Clone)]
pub struct CarouselTiming {
    pub autoplay_interval: Duration,
    pub transition: Duration,
    pub resume_delay: Duration,
    pub easing: EasingType,
    pub reduced_motion: bool,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default(), false)
    }
}

impl CarouselTiming {
    pub fn from_config(config: &CarouselConfig, reduced_motion: bool) -> Self {
        let transition_ms = if reduced_motion {
            config.transition_ms / 2
        } else {
            config.transition_ms
        };
        Self {
            autoplay_interval: Duration::from_millis(config.autoplay_interval_ms),
            transition: Duration::from_millis(transition_ms),
            resume_delay: Duration::from_millis(config.resume_delay_ms),
            easing: config.easing,
            reduced_motion,
        }
    }
}

/// In-flight slide change; navigation stays locked until it completes
#[derive(Debug, Clone)]
struct Transition {
    start: Instant,
    from: usize,
    forward: bool,
    duration: Duration,
    easing: EasingType,
}

/// One frame of the transition animation, for the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Slide being pushed out
    pub from: usize,
    /// Direction of travel: true when the incoming slide enters from the right
    pub forward: bool,
    /// Eased progress in [0, 1]
    pub progress: f64,
}

/// Carousel state machine.
///
/// Owns the current slide index, the transition lock, and the autoplay
/// deadlines. Index-changing calls are no-ops while a transition is in
/// flight; a successful change locks navigation for the transition window,
/// pauses autoplay, and arms the resume cooldown. [`Carousel::tick`] fires
/// whichever deadline has come due.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    transition: Option<Transition>,
    /// Next autoplay advancement; `Some` iff autoplay is running
    autoplay_at: Option<Instant>,
    /// Pending autoplay restart after a navigation
    resume_at: Option<Instant>,
    timing: CarouselTiming,
}

impl Carousel {
    pub fn new(slide_count: usize, timing: CarouselTiming) -> Self {
        Self {
            slide_count,
            current: 0,
            transition: None,
            autoplay_at: None,
            resume_at: None,
            timing,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The slide that carries the trailing style: the one just before the
    /// current slide in deck order, wrapping at the front.
    pub fn prev_index(&self) -> Option<usize> {
        if self.slide_count < 2 {
            return None;
        }
        Some((self.current + self.slide_count - 1) % self.slide_count)
    }

    /// Navigation is locked while a transition is in flight
    pub fn is_locked(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| !is_complete(t.start, t.duration))
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_at.is_some()
    }

    /// Current transition state for rendering, if one is in flight
    pub fn transition_frame(&self) -> Option<TransitionFrame> {
        let t = self.transition.as_ref()?;
        if is_complete(t.start, t.duration) {
            return None;
        }
        Some(TransitionFrame {
            from: t.from,
            forward: t.forward,
            progress: t.easing.apply(progress(t.start, t.duration)),
        })
    }

    /// Advance to the next slide, wrapping past the end
    pub fn next(&mut self) {
        if self.is_locked() {
            return;
        }
        let target = (self.current + 1) % self.slide_count.max(1);
        self.change_to(target, true);
    }

    /// Go back one slide, wrapping past the front
    pub fn prev(&mut self) {
        if self.is_locked() {
            return;
        }
        let target = if self.current == 0 {
            self.slide_count.saturating_sub(1)
        } else {
            self.current - 1
        };
        self.change_to(target, false);
    }

    /// Jump to a specific slide. Out-of-range targets and the current
    /// slide are ignored, as is any call while locked.
    pub fn go_to(&mut self, index: usize) {
        if self.is_locked() || index >= self.slide_count {
            return;
        }
        let forward = index > self.current;
        self.change_to(index, forward);
    }

    fn change_to(&mut self, index: usize, forward: bool) {
        if index == self.current {
            return;
        }
        let departing = self.current;
        self.current = index;
        self.transition = Some(Transition {
            start: Instant::now(),
            from: departing,
            forward,
            duration: self.timing.transition,
            easing: self.timing.easing,
        });
        self.reset_autoplay();
    }

    /// Begin autoplay. Idempotent: an armed deadline is left alone.
    /// Never starts under reduced motion.
    pub fn start_autoplay(&mut self) {
        if self.timing.reduced_motion || self.autoplay_at.is_some() {
            return;
        }
        self.autoplay_at = Some(Instant::now() + self.timing.autoplay_interval);
    }

    /// Stop autoplay and cancel any pending restart
    pub fn pause_autoplay(&mut self) {
        self.autoplay_at = None;
        self.resume_at = None;
    }

    // Every navigation pays the cooldown before autoplay returns,
    // including one driven by autoplay itself.
    fn reset_autoplay(&mut self) {
        self.pause_autoplay();
        self.resume_at = Some(Instant::now() + self.timing.resume_delay);
    }

    /// Fire due deadlines. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        let transition_done = self
            .transition
            .as_ref()
            .is_some_and(|t| is_complete(t.start, t.duration));
        if transition_done {
            self.transition = None;
        }

        if let Some(at) = self.resume_at {
            if now >= at {
                self.resume_at = None;
                self.start_autoplay();
            }
        }

        if let Some(at) = self.autoplay_at {
            if now >= at {
                self.next();
                // A locked next() is a no-op; keep the cadence going
                // instead of refiring every frame
                if self.autoplay_at.is_some_and(|at| now >= at) {
                    self.autoplay_at = Some(now + self.timing.autoplay_interval);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_timing() -> CarouselTiming {
        CarouselTiming {
            transition: Duration::ZERO,
            ..CarouselTiming::default()
        }
    }

    fn past(ms: u64) -> Instant {
        Instant::now()
            .checked_sub(Duration::from_millis(ms))
            .unwrap()
    }

    #[test]
    fn test_next_wraps_to_front() {
        let mut c = Carousel::new(3, instant_timing());
        c.next();
        c.next();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_prev_wraps_to_back() {
        let mut c = Carousel::new(3, instant_timing());
        c.prev();
        assert_eq!(c.current(), 2);
        c.prev();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_go_to_valid_index() {
        let mut c = Carousel::new(4, instant_timing());
        c.go_to(2);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut c = Carousel::new(3, instant_timing());
        c.go_to(3);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_go_to_current_does_not_transition() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.go_to(0);
        assert!(!c.is_locked());
        assert!(c.transition_frame().is_none());
    }

    #[test]
    fn test_navigation_locked_during_transition() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.next();
        assert_eq!(c.current(), 1);
        assert!(c.is_locked());
        c.next();
        c.prev();
        c.go_to(2);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_lock_clears_after_window() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.next();
        c.transition.as_mut().unwrap().start = past(700);
        assert!(!c.is_locked());
        c.tick();
        assert!(c.transition.is_none());
        c.next();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_start_autoplay_is_idempotent() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.start_autoplay();
        let armed = c.autoplay_at;
        assert!(armed.is_some());
        c.start_autoplay();
        assert_eq!(c.autoplay_at, armed);
    }

    #[test]
    fn test_pause_clears_deadlines() {
        let mut c = Carousel::new(3, instant_timing());
        c.start_autoplay();
        c.next();
        c.pause_autoplay();
        assert!(!c.is_autoplaying());
        assert!(c.resume_at.is_none());
    }

    #[test]
    fn test_autoplay_deadline_advances_slide() {
        let mut c = Carousel::new(3, instant_timing());
        c.start_autoplay();
        c.autoplay_at = Some(past(1));
        c.tick();
        assert_eq!(c.current(), 1);
        // the advancement itself pays the resume cooldown
        assert!(!c.is_autoplaying());
        assert!(c.resume_at.is_some());
    }

    #[test]
    fn test_autoplay_rearms_when_locked() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.next();
        assert!(c.is_locked());
        c.autoplay_at = Some(past(1));
        c.tick();
        assert_eq!(c.current(), 1);
        let at = c.autoplay_at.unwrap();
        assert!(at > Instant::now());
    }

    #[test]
    fn test_resume_deadline_restarts_autoplay() {
        let mut c = Carousel::new(3, instant_timing());
        c.next();
        assert!(!c.is_autoplaying());
        c.resume_at = Some(past(1));
        c.tick();
        assert!(c.is_autoplaying());
    }

    #[test]
    fn test_reduced_motion_never_autoplays() {
        let timing = CarouselTiming::from_config(&CarouselConfig::default(), true);
        assert_eq!(timing.transition, Duration::from_millis(300));
        let mut c = Carousel::new(3, timing);
        c.start_autoplay();
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn test_single_slide_never_transitions() {
        let mut c = Carousel::new(1, CarouselTiming::default());
        c.next();
        c.prev();
        assert_eq!(c.current(), 0);
        assert!(!c.is_locked());
        assert!(c.prev_index().is_none());
    }

    #[test]
    fn test_prev_index_wraps() {
        let mut c = Carousel::new(3, instant_timing());
        assert_eq!(c.prev_index(), Some(2));
        c.next();
        assert_eq!(c.prev_index(), Some(0));
    }

    #[test]
    fn test_transition_frame_reports_direction() {
        let mut c = Carousel::new(3, CarouselTiming::default());
        c.next();
        let frame = c.transition_frame().unwrap();
        assert_eq!(frame.from, 0);
        assert!(frame.forward);
        assert!((0.0..=1.0).contains(&frame.progress));
    }
}
