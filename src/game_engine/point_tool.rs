use serde::{Deserialize, Serialize};

use crate::game_engine::line::Line;
use crate::game_engine::models::Point;

/// Direction the tool's tip points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Up,
    Down,
}

/// A movable probe that reports the coordinates under it and highlights when
/// it sits on one of the graphed lines.
///
/// The tool snaps to the integer grid, so the on-line test is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTool {
    position: Point,
    home: Point,
    pub orientation: Orientation,
}

impl PointTool {
    pub fn new(home: Point, orientation: Orientation) -> Self {
        PointTool { position: home, home, orientation }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Move the tool back to its home position.
    pub fn reset(&mut self) {
        self.position = self.home;
    }

    /// True if the tool sits exactly on `line`.
    pub fn is_on_line(&self, line: &Line) -> bool {
        line.contains_point(self.position)
    }

    /// The line the tool is on, given lines in rendering order; the topmost
    /// (last-rendered) match wins. `None` when the tool is on no line.
    pub fn on_line<'a>(&self, lines: &'a [Line]) -> Option<&'a Line> {
        lines.iter().rev().find(|line| self.is_on_line(line))
    }
}
