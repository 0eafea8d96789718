//! Easing curves for the slide transition.
//!
//! Pure functions mapping progress in [0, 1] to an eased value in [0, 1].

pub use showreel_core::EasingType;

/// Calculation methods for [`EasingType`]
pub trait EasingTypeExt {
    /// Apply the easing curve to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // Snap: hold the start until the window ends
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)^3
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// f(t) = 1 - (1-t)^5
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

/// f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} decreased at step {}", easing, i);
                assert!((0.0..=1.0).contains(&v), "{:?} out of range", easing);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingType::Linear.apply(1.5), 1.0);
    }
}
