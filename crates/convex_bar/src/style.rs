//! Tab styles
//!
//! A style decides two things: whether the curve stays fixed at the center
//! slot or follows the selection, and what each slot draws. The four
//! built-in styles draw [`TabItem`]s (or the output of an [`ItemRenderer`]);
//! [`TabStyle::Custom`] hands both decisions to a caller-supplied
//! [`StylePolicy`].
//!
//! | Style          | Fixed center | Convex slot decoration   |
//! |----------------|--------------|--------------------------|
//! | `Fixed`        | yes          | plain                    |
//! | `FixedCircle`  | yes          | circular badge           |
//! | `React`        | no           | plain                    |
//! | `ReactCircle`  | no           | circular badge           |

use std::fmt;

use convex_core::{Color, DrawCommand, DrawList, Path, Point, Size, TextStyle};
use serde::{Deserialize, Serialize};

/// Built-in style selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabStyle {
    /// Curve fixed at the center slot
    Fixed,
    /// Fixed curve with a circular badge behind the center item
    FixedCircle,
    /// Curve follows the active slot
    #[default]
    React,
    /// Moving curve with a circular badge behind the active item
    ReactCircle,
    /// Caller-supplied [`StylePolicy`]
    Custom,
}

impl TabStyle {
    /// Fixed-center capability of a built-in style (`None` for custom)
    pub fn is_fixed_center(&self) -> Option<bool> {
        match self {
            TabStyle::Fixed | TabStyle::FixedCircle => Some(true),
            TabStyle::React | TabStyle::ReactCircle => Some(false),
            TabStyle::Custom => None,
        }
    }

    /// Whether the convex slot gets a circular badge
    pub fn has_circle(&self) -> bool {
        matches!(self, TabStyle::FixedCircle | TabStyle::ReactCircle)
    }
}

/// What a slot renderer is asked to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotContext {
    /// Slot index in `[0, count)`
    pub index: usize,
    /// Whether this slot should use its selected look
    pub active: bool,
    /// Whether the content is drawn in the convex overlay
    pub convex: bool,
    /// Size of the area the content is drawn into
    pub size: Size,
}

impl SlotContext {
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

/// Style capability consumed by the bar
pub trait StylePolicy {
    /// Whether the curve stays at the center slot regardless of selection
    fn is_fixed_center(&self) -> bool;

    /// Draw the content of one slot, in slot-local coordinates
    fn render_slot_content(&self, slot: &SlotContext) -> DrawList;
}

/// Renders the content of a single tab item
pub trait ItemRenderer {
    fn render(&self, slot: &SlotContext) -> DrawList;
}

impl<F> ItemRenderer for F
where
    F: Fn(&SlotContext) -> DrawList,
{
    fn render(&self, slot: &SlotContext) -> DrawList {
        self(slot)
    }
}

/// An icon with an optional title
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    icon: String,
    active_icon: Option<String>,
    title: Option<String>,
}

impl TabItem {
    /// Create a tab item with an icon name
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            active_icon: None,
            title: None,
        }
    }

    /// Set the text title shown under the icon
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an alternate icon used while active
    pub fn active_icon(mut self, icon: impl Into<String>) -> Self {
        self.active_icon = Some(icon.into());
        self
    }

    pub fn icon_for(&self, active: bool) -> &str {
        match (&self.active_icon, active) {
            (Some(icon), true) => icon.as_str(),
            _ => self.icon.as_str(),
        }
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Colors used by the built-in styles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylePalette {
    /// Inactive item tint
    pub color: Color,
    /// Active item tint
    pub active_color: Color,
    /// Fill of the circular badge
    pub circle_color: Color,
}

/// Default item renderer for a list of [`TabItem`]s
#[derive(Clone, Debug)]
pub struct TabItems {
    items: Vec<TabItem>,
    palette: StylePalette,
}

impl TabItems {
    pub fn new(items: Vec<TabItem>, palette: StylePalette) -> Self {
        Self { items, palette }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRenderer for TabItems {
    fn render(&self, slot: &SlotContext) -> DrawList {
        let mut list = DrawList::new();
        let Some(item) = self.items.get(slot.index) else {
            return list;
        };
        let tint = if slot.active {
            self.palette.active_color
        } else {
            self.palette.color
        };
        let Size { width, height } = slot.size;

        if slot.convex {
            // Icon only, centered in the raised area
            let icon_size = width.min(height) * 0.4;
            list.icon(item.icon_for(slot.active), slot.center(), icon_size, tint);
            return list;
        }

        let icon_size = (height * 0.45).min(width * 0.6);
        match item.title_text() {
            Some(title) => {
                list.icon(
                    item.icon_for(slot.active),
                    Point::new(width / 2.0, height * 0.38),
                    icon_size,
                    tint,
                );
                list.text(
                    title,
                    Point::new(width / 2.0, height * 0.8),
                    TextStyle::new(height * 0.22)
                        .with_color(tint)
                        .with_bold(slot.active),
                );
            }
            None => list.icon(item.icon_for(slot.active), slot.center(), icon_size, tint),
        }
        list
    }
}

/// One of the four built-in styles wrapped around an item renderer
pub struct BuiltinStyle {
    style: TabStyle,
    items: Box<dyn ItemRenderer>,
    palette: StylePalette,
}

impl BuiltinStyle {
    /// Wrap `items` in a built-in style.
    ///
    /// `TabStyle::Custom` is treated as `React`; custom styles are supplied
    /// as a [`StylePolicy`] instead.
    pub fn new(style: TabStyle, items: Box<dyn ItemRenderer>, palette: StylePalette) -> Self {
        let style = match style {
            TabStyle::Custom => TabStyle::React,
            other => other,
        };
        Self {
            style,
            items,
            palette,
        }
    }

    pub fn style(&self) -> TabStyle {
        self.style
    }

    fn circle_badge(&self, slot: &SlotContext) -> DrawList {
        let mut list = DrawList::new();
        let radius = slot.size.width.min(slot.size.height) / 2.0 * 0.8;
        let center = slot.center();
        list.fill_circle(center, radius, self.palette.circle_color);
        let ring = if slot.active {
            self.palette.active_color
        } else {
            self.palette.color
        };
        list.push(DrawCommand::StrokePath {
            path: Path::circle(center, radius),
            width: 2.0,
            color: ring,
        });
        list
    }
}

impl fmt::Debug for BuiltinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinStyle")
            .field("style", &self.style)
            .field("palette", &self.palette)
            .finish()
    }
}

impl StylePolicy for BuiltinStyle {
    fn is_fixed_center(&self) -> bool {
        self.style.is_fixed_center().unwrap_or(false)
    }

    fn render_slot_content(&self, slot: &SlotContext) -> DrawList {
        let content = self.items.render(slot);
        if slot.convex && self.style.has_circle() {
            let mut list = self.circle_badge(slot);
            list.extend(content);
            list
        } else {
            content
        }
    }
}
