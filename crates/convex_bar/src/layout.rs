//! Slot layout
//!
//! The bar is divided into `count` equal-width slots laid out in a row.
//! The convex overlay sits above the slot under the curve and reaches up
//! to the top inset.

use convex_core::{Point, Rect, Size};

/// Rest position of the curve center for `index`, as a fraction of width
pub fn rest_fraction(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.5;
    }
    (2 * index + 1) as f32 / (2 * count) as f32
}

/// Geometry of the slot row for a given bar size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    count: usize,
    size: Size,
}

impl SlotLayout {
    pub fn new(count: usize, size: Size) -> Self {
        Self {
            count,
            size: size.sanitized(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn slot_width(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.size.width / self.count as f32
        }
    }

    /// Bounds of slot `index` inside the bar
    pub fn slot_rect(&self, index: usize) -> Rect {
        let w = self.slot_width();
        Rect::new(index as f32 * w, 0.0, w, self.size.height)
    }

    /// Index of the middle slot
    pub fn center_slot(&self) -> usize {
        self.count / 2
    }

    pub fn rest_fraction(&self, index: usize) -> f32 {
        rest_fraction(index, self.count)
    }

    /// Bounds of the convex overlay centered at `center_fraction`.
    ///
    /// The overlay is `curve_width` wide and spans from the top inset down
    /// to the bottom of the bar.
    pub fn overlay_rect(&self, center_fraction: f32, curve_width: f32, top: f32) -> Rect {
        let cx = center_fraction * self.size.width;
        let top = top.min(0.0);
        Rect::new(cx - curve_width / 2.0, top, curve_width, self.size.height - top)
    }

    /// Slot under `point`, in bar coordinates.
    ///
    /// Points above the bar only hit while inside the convex overlay.
    pub fn hit_test(&self, point: Point, overlay: Option<(usize, Rect)>) -> Option<usize> {
        if let Some((index, rect)) = overlay {
            if rect.contains(point) {
                return Some(index);
            }
        }
        let row = Rect::from(self.size);
        if self.count == 0 || !row.contains(point) {
            return None;
        }
        let index = (point.x / self.slot_width()) as usize;
        Some(index.min(self.count - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_fraction_formula() {
        for count in 1..=7 {
            for i in 0..count {
                let expected = (2.0 * i as f32 + 1.0) / (2.0 * count as f32);
                assert_eq!(rest_fraction(i, count), expected);
            }
        }
        assert_eq!(rest_fraction(0, 5), 0.1);
        assert_eq!(rest_fraction(4, 5), 0.9);
        assert_eq!(rest_fraction(2, 5), 0.5);
    }

    #[test]
    fn test_slot_rects_tile_the_bar() {
        let layout = SlotLayout::new(4, Size::new(400.0, 50.0));
        assert_eq!(layout.slot_width(), 100.0);
        assert_eq!(layout.slot_rect(0), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(layout.slot_rect(3), Rect::new(300.0, 0.0, 100.0, 50.0));
        assert_eq!(layout.center_slot(), 2);
    }

    #[test]
    fn test_overlay_rect() {
        let layout = SlotLayout::new(5, Size::new(300.0, 50.0));
        let rect = layout.overlay_rect(0.5, 75.0, -25.0);
        assert_eq!(rect, Rect::new(112.5, -25.0, 75.0, 75.0));
    }

    #[test]
    fn test_hit_test() {
        let layout = SlotLayout::new(5, Size::new(300.0, 50.0));
        assert_eq!(layout.hit_test(Point::new(10.0, 10.0), None), Some(0));
        assert_eq!(layout.hit_test(Point::new(300.0, 10.0), None), Some(4));
        assert_eq!(layout.hit_test(Point::new(150.0, -10.0), None), None);

        let overlay = layout.overlay_rect(0.5, 75.0, -25.0);
        assert_eq!(
            layout.hit_test(Point::new(150.0, -10.0), Some((2, overlay))),
            Some(2)
        );
    }
}
