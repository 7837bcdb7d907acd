//! Convex bar controller
//!
//! [`ConvexBar`] ties the pieces together: it lays out the slots, owns the
//! selection and the curve animator, turns taps into transitions and builds
//! a [`BarFrame`] on every render.
//!
//! The bar never schedules frames itself. The host calls [`ConvexBar::render`]
//! after construction, after every tap, and on every frame while
//! [`BarFrame::animating`] is set.
//!
//! # Example
//!
//! ```rust
//! use convex_bar::{ConvexBar, TabItem, TabStyle};
//!
//! let mut bar = ConvexBar::builder()
//!     .style(TabStyle::React)
//!     .item(TabItem::new("home").title("Home"))
//!     .item(TabItem::new("map").title("Discover"))
//!     .item(TabItem::new("add").title("Add"))
//!     .on_tap(|index| println!("tapped {index}"))
//!     .build()?;
//!
//! bar.start();
//! bar.on_tab_tapped(2)?;
//! let frame = bar.render(360.0);
//! assert_eq!(frame.convex_index(), 2);
//! # Ok::<(), convex_bar::BarError>(())
//! ```

use std::fmt;
use std::time::Instant;

use convex_animation::{Clock, Easing, PositionAnimator, SystemClock};
use convex_core::{DrawList, Point, Size, TextStyle};

use crate::config::{BarConfig, TransitionOrigin};
use crate::curve::CurvePathGenerator;
use crate::error::{BarError, Result};
use crate::frame::{BarFrame, ConvexOverlay, SlotFrame};
use crate::layout::{rest_fraction, SlotLayout};
use crate::selection::SelectionState;
use crate::style::{
    BuiltinStyle, ItemRenderer, SlotContext, StylePolicy, TabItem, TabItems, TabStyle,
};

/// Called with the tapped index after the selection is updated
pub type TapCallback = Box<dyn FnMut(usize)>;

/// Consulted before a tap is handled; returning `false` vetoes it
pub type TapInterceptor = Box<dyn FnMut(usize) -> bool>;

/// Result of a tap or programmatic selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapOutcome {
    pub index: usize,
    /// Whether the active slot changed
    pub changed: bool,
    /// Whether a curve transition was started
    pub animating: bool,
    /// Whether the tap interceptor rejected the tap
    pub vetoed: bool,
}

/// A convex bottom navigation bar
pub struct ConvexBar {
    config: BarConfig,
    count: usize,
    style: Box<dyn StylePolicy>,
    fixed: bool,
    selection: SelectionState,
    animator: PositionAnimator,
    curve: CurvePathGenerator,
    clock: Box<dyn Clock>,
    on_tap: Option<TapCallback>,
    on_tab_notify: Option<TapInterceptor>,
    badges: Vec<Option<String>>,
    running: bool,
    needs_redraw: bool,
}

impl ConvexBar {
    /// Start building a bar
    pub fn builder() -> ConvexBarBuilder {
        ConvexBarBuilder::new()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Whether the curve stays at the center slot
    pub fn is_fixed_center(&self) -> bool {
        self.fixed
    }

    pub fn active_index(&self) -> usize {
        self.selection.active_index()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.selection.is_active(index)
    }

    /// Middle slot, where fixed styles keep the curve
    pub fn center_slot(&self) -> usize {
        self.count / 2
    }

    /// Rest position of the curve when `index` is active
    pub fn rest_fraction(&self, index: usize) -> f32 {
        rest_fraction(index, self.count)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach the bar to a host; transitions animate from now on
    pub fn start(&mut self) {
        if !self.running {
            tracing::info!("convex bar started with {} slots", self.count);
        }
        self.running = true;
        self.needs_redraw = true;
    }

    /// Detach the bar. Any running transition snaps to its target and later
    /// selection changes jump straight to their rest position.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("convex bar stopped");
        }
        self.animator.snap_to_target();
        self.running = false;
        self.needs_redraw = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a tap on slot `index`.
    ///
    /// Reactive styles start a transition when the active slot changes. The
    /// tap callback fires with `index` whether or not anything changed.
    pub fn on_tab_tapped(&mut self, index: usize) -> Result<TapOutcome> {
        if let Err(err) = self.selection.check(index) {
            tracing::warn!("ignoring tap: {}", err);
            return Err(err);
        }

        if let Some(notify) = self.on_tab_notify.as_mut() {
            if !notify(index) {
                tracing::debug!("tap on tab {} vetoed", index);
                return Ok(TapOutcome {
                    index,
                    changed: false,
                    animating: false,
                    vetoed: true,
                });
            }
        }

        let outcome = self.select(index)?;
        if let Some(on_tap) = self.on_tap.as_mut() {
            on_tap(index);
        }
        Ok(outcome)
    }

    /// Select `index` without a tap, e.g. to follow external navigation.
    ///
    /// Runs the same transition as a tap but bypasses the interceptor and
    /// does not fire the tap callback.
    pub fn animate_to(&mut self, index: usize) -> Result<TapOutcome> {
        self.selection.check(index)?;
        self.select(index)
    }

    /// Slot under `point` (bar coordinates, bar top at y = 0)
    pub fn hit_test(&mut self, point: Point, width: f32) -> Option<usize> {
        let layout = SlotLayout::new(self.count, Size::new(width, self.config.height));
        let fraction = self.center_fraction();
        let overlay = layout.overlay_rect(fraction, self.curve.curve_width(), self.config.top);
        layout.hit_test(point, Some((self.convex_slot(), overlay)))
    }

    /// Handle a pointer release; taps the slot under `point`, if any
    pub fn on_pointer_up(&mut self, point: Point, width: f32) -> Result<Option<TapOutcome>> {
        match self.hit_test(point, width) {
            Some(index) => self.on_tab_tapped(index).map(Some),
            None => Ok(None),
        }
    }

    /// Show a badge with `text` on slot `index`
    pub fn set_badge(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.selection.check(index)?;
        self.badges[index] = Some(text.into());
        self.needs_redraw = true;
        Ok(())
    }

    /// Remove the badge from slot `index`
    pub fn clear_badge(&mut self, index: usize) -> Result<()> {
        self.selection.check(index)?;
        self.badges[index] = None;
        self.needs_redraw = true;
        Ok(())
    }

    fn select(&mut self, index: usize) -> Result<TapOutcome> {
        let previous = self.selection.active_index();
        let changed = index != previous;
        let animating = if changed && !self.fixed {
            self.transition(previous, index)
        } else {
            false
        };

        self.selection.activate(index)?;
        self.needs_redraw = true;
        Ok(TapOutcome {
            index,
            changed,
            animating,
            vetoed: false,
        })
    }

    /// Move the curve from `previous` to `next`; returns whether it animates
    fn transition(&mut self, previous: usize, next: usize) -> bool {
        let now = self.clock.now();
        let to = self.rest_fraction(next);
        if !self.running {
            self.animator.set_immediate(to);
            return false;
        }

        let from = match self.config.transition_origin {
            TransitionOrigin::Rest => self.rest_fraction(previous),
            TransitionOrigin::Live => self.animator.current_fraction(now),
        };
        self.animator.begin(
            from,
            to,
            self.config.transition_duration(),
            self.config.easing,
            now,
        );
        self.animator.is_animating(now)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Curve center fraction at the clock's current time
    pub fn center_fraction(&mut self) -> f32 {
        let now = self.clock.now();
        self.center_fraction_at(now)
    }

    /// Curve center fraction at `now`
    pub fn center_fraction_at(&mut self, now: Instant) -> f32 {
        if self.fixed {
            0.5
        } else {
            self.animator.current_fraction(now)
        }
    }

    /// Whether the curve is mid-transition
    pub fn is_animating(&self) -> bool {
        !self.fixed && self.animator.is_animating(self.clock.now())
    }

    /// Whether the host should render another frame
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.is_animating()
    }

    /// Read and clear the redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        let requested = self.needs_redraw();
        self.needs_redraw = false;
        requested
    }

    /// Build the frame for a bar `width` wide at the clock's current time
    pub fn render(&mut self, width: f32) -> BarFrame {
        let now = self.clock.now();
        self.render_at(now, width)
    }

    /// Build the frame for a bar `width` wide at `now`
    pub fn render_at(&mut self, now: Instant, width: f32) -> BarFrame {
        let size = Size::new(width, self.config.height).sanitized();
        let layout = SlotLayout::new(self.count, size);
        let center_fraction = self.center_fraction_at(now);
        let animating = !self.fixed && self.animator.is_animating(now);

        let active = self.selection.active_index();
        let convex_index = self.convex_slot();
        let convex_active = !self.fixed || convex_index == active;

        let slots = (0..self.count)
            .map(|index| {
                let rect = layout.slot_rect(index);
                let is_active = self.selection.is_active(index);
                let content = (index != convex_index)
                    .then(|| self.slot_content(index, is_active, false, rect.size));
                SlotFrame {
                    index,
                    rect,
                    active: is_active,
                    content,
                }
            })
            .collect();

        let overlay_rect =
            layout.overlay_rect(center_fraction, self.curve.curve_width(), self.config.top);
        let overlay = ConvexOverlay {
            index: convex_index,
            rect: overlay_rect,
            active: convex_active,
            content: self.slot_content(convex_index, convex_active, true, overlay_rect.size),
        };

        tracing::trace!(
            "frame: fraction={:.4} convex={} animating={}",
            center_fraction,
            convex_index,
            animating
        );
        self.needs_redraw = animating;

        BarFrame {
            size,
            center_fraction,
            background: self.config.background(size),
            shadow: self.config.shadow(),
            outline: self
                .curve
                .bar_outline(center_fraction, size, self.config.corner_radius),
            curve: self.curve.generate(center_fraction, size.width),
            slots,
            overlay,
            animating,
        }
    }

    /// Slot whose content is drawn in the overlay
    fn convex_slot(&self) -> usize {
        if self.fixed {
            self.center_slot()
        } else {
            self.selection.active_index()
        }
    }

    fn slot_content(&self, index: usize, active: bool, convex: bool, size: Size) -> DrawList {
        let slot = SlotContext {
            index,
            active,
            convex,
            size,
        };
        let mut content = self.style.render_slot_content(&slot);
        if let Some(text) = &self.badges[index] {
            content.extend(self.badge(text, size));
        }
        content
    }

    fn badge(&self, text: &str, size: Size) -> DrawList {
        let unit = size.width.min(size.height);
        let radius = unit * 0.16;
        let center = Point::new(size.width / 2.0 + unit * 0.3, unit * 0.2);
        let mut list = DrawList::new();
        list.fill_circle(center, radius, self.config.badge_color);
        list.text(
            text,
            center,
            TextStyle::new(radius * 1.2).with_color(self.config.active_color),
        );
        list
    }
}

impl fmt::Debug for ConvexBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvexBar")
            .field("count", &self.count)
            .field("fixed", &self.fixed)
            .field("selection", &self.selection)
            .field("animator", &self.animator)
            .field("running", &self.running)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ConvexBar`]; all validation happens in [`build`](Self::build)
pub struct ConvexBarBuilder {
    config: BarConfig,
    items: Vec<TabItem>,
    renderer: Option<Box<dyn ItemRenderer>>,
    count: Option<usize>,
    policy: Option<Box<dyn StylePolicy>>,
    clock: Option<Box<dyn Clock>>,
    on_tap: Option<TapCallback>,
    on_tab_notify: Option<TapInterceptor>,
}

impl ConvexBarBuilder {
    pub fn new() -> Self {
        Self {
            config: BarConfig::default(),
            items: Vec::new(),
            renderer: None,
            count: None,
            policy: None,
            clock: None,
            on_tap: None,
            on_tab_notify: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn style(mut self, style: TabStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self
    }

    pub fn initial_active_index(mut self, index: usize) -> Self {
        self.config.initial_active_index = index;
        self
    }

    /// Append a tab item
    pub fn item(mut self, item: TabItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append several tab items
    pub fn items(mut self, items: impl IntoIterator<Item = TabItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Number of slots, for bars without a tab item list
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Draw item content with `renderer` instead of the tab item list
    pub fn item_renderer(mut self, renderer: impl ItemRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Use a caller-defined style; selects [`TabStyle::Custom`]
    pub fn custom_style(mut self, policy: impl StylePolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self.config.style = TabStyle::Custom;
        self
    }

    /// Time source used for transitions; defaults to the system clock
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn on_tap(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    pub fn on_tab_notify(mut self, interceptor: impl FnMut(usize) -> bool + 'static) -> Self {
        self.on_tab_notify = Some(Box::new(interceptor));
        self
    }

    /// Validate the configuration and build the bar
    pub fn build(self) -> Result<ConvexBar> {
        self.config.validate()?;
        let count = self.resolve_count()?;

        let style: Box<dyn StylePolicy> = match self.config.style {
            TabStyle::Custom => self
                .policy
                .ok_or_else(|| BarError::config("custom style requires a style policy"))?,
            builtin => {
                let items: Box<dyn ItemRenderer> = match self.renderer {
                    Some(renderer) => renderer,
                    None if !self.items.is_empty() => {
                        Box::new(TabItems::new(self.items, self.config.palette()))
                    }
                    None => {
                        return Err(BarError::config(
                            "built-in styles require tab items or an item renderer",
                        ))
                    }
                };
                Box::new(BuiltinStyle::new(builtin, items, self.config.palette()))
            }
        };

        let fixed = style.is_fixed_center();
        if fixed && count % 2 == 0 {
            return Err(BarError::config(format!(
                "slot count must be odd for fixed-center styles, got {count}"
            )));
        }

        let initial = self.config.initial_active_index;
        if initial >= count {
            return Err(BarError::config(format!(
                "initial active index {initial} out of range for {count} slots"
            )));
        }
        let selection = SelectionState::new(count, initial)?;
        let curve = CurvePathGenerator::new(
            self.config.curve_size,
            self.config.curve_height,
            self.config.top,
        );

        tracing::debug!(
            "built convex bar: {} slots, style {:?}, fixed={}",
            count,
            self.config.style,
            fixed
        );

        Ok(ConvexBar {
            animator: PositionAnimator::new(rest_fraction(initial, count)),
            badges: vec![None; count],
            config: self.config,
            count,
            style,
            fixed,
            selection,
            curve,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            on_tap: self.on_tap,
            on_tab_notify: self.on_tab_notify,
            running: false,
            needs_redraw: true,
        })
    }

    fn resolve_count(&self) -> Result<usize> {
        let count = match (self.items.len(), self.count) {
            (0, Some(count)) => count,
            (0, None) => 0,
            (n, Some(count)) if count != n => {
                return Err(BarError::config(format!(
                    "{n} tab items given for {count} slots"
                )))
            }
            (n, _) => n,
        };
        if count == 0 {
            return Err(BarError::config("at least one tab slot is required"));
        }
        Ok(count)
    }
}

impl Default for ConvexBarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
