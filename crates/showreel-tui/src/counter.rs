//! Count-up animations for the stats section.
//!
//! All counters arm together the first time the section is revealed and
//! run on the shared animation clock: each frame the displayed value is
//! the floor of linear progress times the target.

use std::time::{Duration, Instant};

use showreel_core::Stat;

use crate::carousel::timing::progress;

#[derive(Debug, Clone)]
struct Counter {
    label: String,
    target: u64,
}

/// The deck's stat counters and their shared animation state
#[derive(Debug, Clone)]
pub struct CounterBank {
    counters: Vec<Counter>,
    duration: Duration,
    started: Option<Instant>,
    fired: bool,
}

impl CounterBank {
    pub fn new(stats: &[Stat], duration: Duration) -> Self {
        let counters = stats
            .iter()
            .map(|s| Counter {
                label: s.label.clone(),
                target: s.target,
            })
            .collect();
        Self {
            counters,
            duration,
            started: None,
            fired: false,
        }
    }

    /// Arm the animation. Latches: later calls never restart it.
    pub fn fire(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;
        self.started = Some(Instant::now());
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// True while any value is still counting up
    pub fn is_animating(&self) -> bool {
        self.started
            .is_some_and(|start| start.elapsed() < self.duration)
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Current (label, value) pairs for rendering
    pub fn display(&self) -> Vec<(&str, u64)> {
        self.counters
            .iter()
            .map(|c| (c.label.as_str(), self.value_of(c.target)))
            .collect()
    }

    fn value_of(&self, target: u64) -> u64 {
        match self.started {
            None => 0,
            Some(start) => {
                let t = progress(start, self.duration);
                ((t * target as f64).floor() as u64).min(target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<Stat> {
        vec![
            Stat {
                label: "users".to_string(),
                target: 100,
            },
            Stat {
                label: "zero".to_string(),
                target: 0,
            },
        ]
    }

    fn bank() -> CounterBank {
        CounterBank::new(&stats(), Duration::from_millis(2000))
    }

    fn backdate(bank: &mut CounterBank, ms: u64) {
        bank.started = Some(
            Instant::now()
                .checked_sub(Duration::from_millis(ms))
                .unwrap(),
        );
    }

    #[test]
    fn test_displays_zero_before_firing() {
        let b = bank();
        assert!(!b.has_fired());
        assert_eq!(b.display(), vec![("users", 0), ("zero", 0)]);
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let mut b = bank();
        b.fire();
        backdate(&mut b, 2100);
        assert_eq!(b.display()[0].1, 100);
        assert!(!b.is_animating());
    }

    #[test]
    fn test_midway_value_is_partial() {
        let mut b = bank();
        b.fire();
        backdate(&mut b, 1000);
        let value = b.display()[0].1;
        assert!(value > 0 && value < 100, "got {}", value);
        assert!(b.is_animating());
    }

    #[test]
    fn test_never_exceeds_target() {
        let mut b = bank();
        b.fire();
        for ms in [0, 500, 1999, 2000, 5000] {
            backdate(&mut b, ms);
            assert!(b.display()[0].1 <= 100);
        }
    }

    #[test]
    fn test_zero_target_completes_instantly() {
        let mut b = bank();
        b.fire();
        assert_eq!(b.display()[1].1, 0);
    }

    #[test]
    fn test_fire_latches() {
        let mut b = bank();
        b.fire();
        let started = b.started;
        backdate(&mut b, 2100);
        let pinned = b.started;
        b.fire();
        assert_eq!(b.started, pinned);
        assert!(started.is_some());
    }

    #[test]
    fn test_empty_bank() {
        let b = CounterBank::new(&[], Duration::from_millis(2000));
        assert!(b.is_empty());
        assert!(!b.is_animating());
    }
}
