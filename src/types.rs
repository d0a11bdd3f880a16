//! Core data types for the diagram editor.
//!
//! This module defines grid points, canonical lines, the editing mode and the
//! immutable `(dots, lines)` snapshot handed to the host on every change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An integer position on the editor grid.
///
/// Identity is by value: two points with equal coordinates are the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Column index, 0-based
    pub x: u32,
    /// Row index, 0-based
    pub y: u32,
}

impl GridPoint {
    /// Creates a grid point from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns true if the point lies within `[0, width) x [0, height)`.
    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }
}

impl From<(u32, u32)> for GridPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An undirected segment between two distinct grid points.
///
/// Endpoints are stored in ascending order, so `{a, b}` and `{b, a}` build the
/// same value and derived equality, ordering and hashing are all canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line {
    a: GridPoint,
    b: GridPoint,
}

impl Line {
    /// Builds the canonical line between two points.
    ///
    /// Returns `None` when both endpoints are equal, since a self-loop is not a line.
    pub fn new(p: GridPoint, q: GridPoint) -> Option<Self> {
        match p.cmp(&q) {
            std::cmp::Ordering::Less => Some(Self { a: p, b: q }),
            std::cmp::Ordering::Greater => Some(Self { a: q, b: p }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller endpoint.
    pub fn a(&self) -> GridPoint {
        self.a
    }

    /// The larger endpoint.
    pub fn b(&self) -> GridPoint {
        self.b
    }

    /// Both endpoints in canonical order.
    pub fn endpoints(&self) -> (GridPoint, GridPoint) {
        (self.a, self.b)
    }

    /// Returns true if both endpoints lie within the grid.
    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.a.in_bounds(width, height) && self.b.in_bounds(width, height)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.a, self.b)
    }
}

/// The active editing mode, supplied by the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "String", into = "String")]
pub enum EditMode {
    /// Clicking a grid point toggles a dot
    Dot,
    /// Two clicks on distinct grid points draw a line
    #[default]
    Line,
}

impl EditMode {
    /// The lowercase name used in configuration and the mode label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Dot => "dot",
            EditMode::Line => "line",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(EditMode::Dot),
            "line" => Ok(EditMode::Line),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for EditMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EditMode> for String {
    fn from(mode: EditMode) -> Self {
        mode.as_str().to_string()
    }
}

/// The observable part of the editor: every dot and every line.
///
/// The pending line selection is deliberately absent; it is internal editing state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagram {
    /// Marked grid points
    pub dots: BTreeSet<GridPoint>,
    /// Drawn lines, canonical and distinct
    pub lines: BTreeSet<Line>,
}

impl Diagram {
    /// Returns true if the diagram has no dots and no lines.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.lines.is_empty()
    }
}
