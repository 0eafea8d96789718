//! Slide carousel: index state machine, autoplay deadlines, and the
//! transition animation shown while the index changes.
//!
//! The controller is pure state plus `Instant` deadlines; it never touches
//! the terminal. The event loop calls [`Carousel::tick`] every frame to fire
//! due deadlines, and the carousel widget asks for
//! [`Carousel::transition_frame`] to draw the slide-in offset.

pub mod controller;
pub mod easing;
pub mod timing;

pub use controller::{Carousel, CarouselTiming, TransitionFrame};
pub use easing::EasingTypeExt;
