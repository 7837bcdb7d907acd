//! Convex Animation
//!
//! Time-based interpolation of the curve center fraction.
//!
//! # Features
//!
//! - **Easing**: named CSS-style curves, cubic Bézier and custom functions
//! - **PositionAnimator**: one replaceable session animating a single scalar
//! - **Clocks**: host-supplied frame time, with a manual clock for tests
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use convex_animation::{Easing, PositionAnimator};
//!
//! let start = Instant::now();
//! let mut animator = PositionAnimator::new(0.1);
//! animator.begin(0.1, 0.9, Duration::from_millis(150), Easing::EaseInOut, start);
//!
//! assert_eq!(animator.current_fraction(start), 0.1);
//! assert_eq!(animator.current_fraction(start + Duration::from_millis(150)), 0.9);
//! ```

pub mod animator;
pub mod clock;
pub mod easing;
pub mod values;

pub use animator::{AnimationSession, PositionAnimator};
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use values::Interpolate;
