//! Deadline and interpolation helpers shared by the carousel transition
//! and the stat counters.

use std::time::{Duration, Instant};

/// Elapsed fraction of an animation window, clamped to [0, 1].
/// A zero-length window counts as already finished.
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate cell offsets
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(f64::from(from), f64::from(to), t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        assert!((lerp(0.0, 80.0, 0.5) - 40.0).abs() < 1e-9);
        assert_eq!(lerp_u16(0, 80, 0.0), 0);
        assert_eq!(lerp_u16(0, 80, 0.5), 40);
        assert_eq!(lerp_u16(0, 80, 1.0), 80);
    }

    #[test]
    fn test_zero_duration_is_done() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO) - 1.0).abs() < 1e-9);
        assert!(is_complete(start, Duration::ZERO));
    }

    #[test]
    fn test_elapsed_window_is_complete() {
        let start = Instant::now()
            .checked_sub(Duration::from_millis(50))
            .unwrap();
        assert!(is_complete(start, Duration::from_millis(10)));
        assert!((progress(start, Duration::from_millis(10)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fresh_window_incomplete() {
        let start = Instant::now();
        assert!(!is_complete(start, Duration::from_secs(60)));
        assert!(progress(start, Duration::from_secs(60)) < 0.5);
    }
}
