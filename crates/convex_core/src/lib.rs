//! Convex Core
//!
//! Foundational value types shared by the convex bottom bar crates:
//!
//! - **Geometry**: points, sizes and rectangles in logical pixels
//! - **Color**: RGBA colors with hex parsing, gradients, brushes and shadows
//! - **Paths**: chainable vector paths built from lines and Bézier curves
//! - **Draw lists**: recorded commands returned by slot renderers
//!
//! # Example
//!
//! ```rust
//! use convex_core::{Color, Path, Point};
//!
//! let bump = Path::new()
//!     .move_to(0.0, 0.0)
//!     .cubic_to(10.0, 0.0, 10.0, -20.0, 20.0, -20.0)
//!     .cubic_to(30.0, -20.0, 30.0, 0.0, 40.0, 0.0)
//!     .close();
//!
//! assert!(bump.is_closed());
//! assert_eq!(bump.end_point(), Some(Point::ZERO));
//! assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod path;

pub use color::{Brush, Color, ColorParseError, Gradient, GradientStop, Shadow};
pub use draw::{DrawCommand, DrawList, TextStyle};
pub use geometry::{sanitize_extent, sanitize_fraction, Point, Rect, Size};
pub use path::{cubic_point, Path, PathCommand};
