//! Draw lists
//!
//! Slot renderers do not paint directly. They return a [`DrawList`], a small
//! recorded list of [`DrawCommand`]s in slot-local coordinates, which the
//! host rendering layer replays at the slot's position.

use smallvec::SmallVec;

use crate::color::{Brush, Color};
use crate::geometry::Point;
use crate::path::Path;

/// Text style for labels
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            bold: false,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// A recorded drawing command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a path with a brush
    FillPath { path: Path, brush: Brush },
    /// Stroke a path outline
    StrokePath { path: Path, width: f32, color: Color },
    /// Fill a circle
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    /// Draw a named icon centered on a point
    Icon {
        name: String,
        center: Point,
        size: f32,
        color: Color,
    },
    /// Draw a text run centered on a point
    Text {
        text: String,
        center: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Return a copy moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> DrawCommand {
        match self {
            DrawCommand::FillPath { path, brush } => DrawCommand::FillPath {
                path: path.translated(dx, dy),
                brush: brush.clone(),
            },
            DrawCommand::StrokePath { path, width, color } => DrawCommand::StrokePath {
                path: path.translated(dx, dy),
                width: *width,
                color: *color,
            },
            DrawCommand::FillCircle {
                center,
                radius,
                brush,
            } => DrawCommand::FillCircle {
                center: center.offset(dx, dy),
                radius: *radius,
                brush: brush.clone(),
            },
            DrawCommand::Icon {
                name,
                center,
                size,
                color,
            } => DrawCommand::Icon {
                name: name.clone(),
                center: center.offset(dx, dy),
                size: *size,
                color: *color,
            },
            DrawCommand::Text {
                text,
                center,
                style,
            } => DrawCommand::Text {
                text: text.clone(),
                center: center.offset(dx, dy),
                style: style.clone(),
            },
        }
    }
}

/// Recorded visual output of a single slot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: SmallVec<[DrawCommand; 4]>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Append a command (builder pattern)
    pub fn with(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append every command of another list
    pub fn extend(&mut self, other: DrawList) {
        self.commands.extend(other.commands);
    }

    /// Fill a circle
    pub fn fill_circle(&mut self, center: Point, radius: f32, brush: impl Into<Brush>) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            brush: brush.into(),
        });
    }

    /// Draw a named icon
    pub fn icon(&mut self, name: impl Into<String>, center: Point, size: f32, color: Color) {
        self.push(DrawCommand::Icon {
            name: name.into(),
            center,
            size,
            color,
        });
    }

    /// Draw a text run
    pub fn text(&mut self, text: impl Into<String>, center: Point, style: TextStyle) {
        self.push(DrawCommand::Text {
            text: text.into(),
            center,
            style,
        });
    }

    /// Return a copy with every command moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> DrawList {
        DrawList {
            commands: self.commands.iter().map(|c| c.translated(dx, dy)).collect(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.fill_circle(Point::new(10.0, 10.0), 5.0, Color::RED);
        list.icon("home", Point::new(10.0, 10.0), 24.0, Color::WHITE);
        list.text("Home", Point::new(10.0, 30.0), TextStyle::new(12.0));

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::FillCircle { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_translated_moves_every_point() {
        let list = DrawList::new()
            .with(DrawCommand::FillPath {
                path: Path::new().move_to(0.0, 0.0).line_to(4.0, 0.0).close(),
                brush: Color::BLUE.into(),
            })
            .with(DrawCommand::Icon {
                name: "star".into(),
                center: Point::new(1.0, 1.0),
                size: 8.0,
                color: Color::WHITE,
            });

        let moved = list.translated(10.0, -5.0);
        match &moved.commands()[0] {
            DrawCommand::FillPath { path, .. } => {
                assert_eq!(path.start_point(), Some(Point::new(10.0, -5.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
        match &moved.commands()[1] {
            DrawCommand::Icon { center, .. } => assert_eq!(*center, Point::new(11.0, -4.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
