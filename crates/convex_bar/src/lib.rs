//! Convex Bar
//!
//! Core of a bottom navigation bar whose top edge bulges into a smooth
//! convex curve behind one tab.
//!
//! # Features
//!
//! - **Curve geometry**: two-cubic bump paths and full bar outlines
//! - **Styles**: fixed or reactive curve, optional circular badge, or a
//!   caller-supplied [`StylePolicy`]
//! - **Animation**: the curve eases between slot rest positions on tap
//! - **Frames**: every render yields a [`BarFrame`] for the host to paint
//!
//! # Example
//!
//! ```rust
//! use convex_animation::ManualClock;
//! use convex_bar::prelude::*;
//!
//! let clock = ManualClock::new();
//! let mut bar = ConvexBar::builder()
//!     .style(TabStyle::React)
//!     .items((0..5).map(|i| TabItem::new(format!("icon{i}"))))
//!     .clock(clock.clone())
//!     .build()?;
//! bar.start();
//!
//! bar.on_tab_tapped(4)?;
//! clock.advance_ms(150);
//! assert_eq!(bar.render(300.0).center_fraction, 0.9);
//! # Ok::<(), convex_bar::BarError>(())
//! ```

pub mod bar;
pub mod config;
pub mod curve;
pub mod error;
pub mod frame;
pub mod layout;
pub mod selection;
pub mod style;

#[cfg(test)]
mod tests;

pub use bar::{ConvexBar, ConvexBarBuilder, TapCallback, TapInterceptor, TapOutcome};
pub use config::{BarConfig, TransitionOrigin};
pub use curve::{generate, CurvePathGenerator};
pub use error::{BarError, Result};
pub use frame::{BarFrame, ConvexOverlay, SlotFrame};
pub use layout::{rest_fraction, SlotLayout};
pub use selection::SelectionState;
pub use style::{
    BuiltinStyle, ItemRenderer, SlotContext, StylePalette, StylePolicy, TabItem, TabItems,
    TabStyle,
};

/// Commonly used types
pub mod prelude {
    pub use crate::bar::{ConvexBar, TapOutcome};
    pub use crate::config::{BarConfig, TransitionOrigin};
    pub use crate::frame::BarFrame;
    pub use crate::style::{SlotContext, StylePolicy, TabItem, TabStyle};
    pub use convex_animation::Easing;
    pub use convex_core::{Color, DrawList};
}
