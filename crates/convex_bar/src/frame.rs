//! Rendered frame output
//!
//! [`ConvexBar::render`](crate::ConvexBar::render) produces a [`BarFrame`]:
//! a plain description of everything the host needs to paint one frame.
//! Slot content is in slot-local coordinates; [`BarFrame::draw_list`]
//! flattens the whole frame into bar coordinates.

use convex_core::{Brush, DrawCommand, DrawList, Path, Rect, Shadow, Size};
use smallvec::SmallVec;

/// One slot of the row
#[derive(Clone, Debug, PartialEq)]
pub struct SlotFrame {
    pub index: usize,
    pub rect: Rect,
    pub active: bool,
    /// `None` for the slot under the curve, whose content is drawn by the
    /// overlay instead
    pub content: Option<DrawList>,
}

/// Content drawn at the curve position
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexOverlay {
    pub index: usize,
    pub rect: Rect,
    pub active: bool,
    pub content: DrawList,
}

/// Everything needed to paint the bar for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct BarFrame {
    pub size: Size,
    /// Curve center as a fraction of the bar width
    pub center_fraction: f32,
    pub background: Brush,
    pub shadow: Option<Shadow>,
    /// Fill outline of the bar including the bump
    pub outline: Path,
    /// The bump alone, for clipping the overlay
    pub curve: Path,
    pub slots: SmallVec<[SlotFrame; 5]>,
    pub overlay: ConvexOverlay,
    /// Whether the curve is still moving; the host should render again
    pub animating: bool,
}

impl BarFrame {
    /// The slot currently hidden behind the overlay
    pub fn convex_index(&self) -> usize {
        self.overlay.index
    }

    /// Flatten the frame into a single list in bar coordinates
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::new().with(DrawCommand::FillPath {
            path: self.outline.clone(),
            brush: self.background.clone(),
        });
        for slot in &self.slots {
            if let Some(content) = &slot.content {
                list.extend(content.translated(slot.rect.x(), slot.rect.y()));
            }
        }
        list.extend(
            self.overlay
                .content
                .translated(self.overlay.rect.x(), self.overlay.rect.y()),
        );
        list
    }
}
