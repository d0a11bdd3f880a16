//! The diagram state machine.
//!
//! [`DiagramState`] owns the dot set, the line set and the pending first endpoint
//! of a line gesture. Every transition takes `&self` and returns a fresh state, so a
//! caller holding an old value never sees it change.

use std::collections::BTreeSet;

use crate::types::{Diagram, GridPoint, Line};

/// Dots, lines and the pending line selection of one editor instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramState {
    width: u32,
    height: u32,
    dots: BTreeSet<GridPoint>,
    lines: BTreeSet<Line>,
    selection: Option<GridPoint>,
}

impl DiagramState {
    /// Creates an empty state for a `width` x `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dots: BTreeSet::new(),
            lines: BTreeSet::new(),
            selection: None,
        }
    }

    /// Grid columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Marked grid points.
    pub fn dots(&self) -> &BTreeSet<GridPoint> {
        &self.dots
    }

    /// Drawn lines.
    pub fn lines(&self) -> &BTreeSet<Line> {
        &self.lines
    }

    /// The first endpoint of an in-progress line gesture, if any.
    pub fn selection(&self) -> Option<GridPoint> {
        self.selection
    }

    /// Copies the observable dots and lines into a host-facing snapshot.
    pub fn snapshot(&self) -> Diagram {
        Diagram {
            dots: self.dots.clone(),
            lines: self.lines.clone(),
        }
    }

    fn accepts(&self, point: GridPoint) -> bool {
        let inside = point.in_bounds(self.width, self.height);
        if !inside {
            log::warn!(
                "ignoring out-of-range point {point} on a {}x{} grid",
                self.width,
                self.height
            );
        }
        inside
    }

    /// Adds `point` to the dot set, or removes it if already present.
    #[must_use]
    pub fn toggle_dot(&self, point: GridPoint) -> Self {
        if !self.accepts(point) {
            return self.clone();
        }
        let mut next = self.clone();
        if !next.dots.remove(&point) {
            next.dots.insert(point);
        }
        next
    }

    /// Advances the two-click line gesture with a click on `point`.
    ///
    /// The first click selects a point. A second click on a different point adds the
    /// line between the two, a second click on the same point aborts the gesture.
    /// Either way the selection is cleared after the second click.
    #[must_use]
    pub fn begin_or_complete_line(&self, point: GridPoint) -> Self {
        if !self.accepts(point) {
            return self.clone();
        }
        let mut next = self.clone();
        match next.selection.take() {
            None => next.selection = Some(point),
            Some(start) => {
                // Equal endpoints yield no line: the re-click aborts the gesture
                if let Some(line) = Line::new(start, point) {
                    next.lines.insert(line);
                }
            }
        }
        next
    }

    /// Inserts a line directly, ignoring the selection.
    #[must_use]
    pub fn add_line(&self, line: Line) -> Self {
        if !line.in_bounds(self.width, self.height) {
            log::warn!("ignoring out-of-range line {line}");
            return self.clone();
        }
        let mut next = self.clone();
        next.lines.insert(line);
        next
    }

    /// Removes the line canonically equal to `line`; no-op if absent.
    #[must_use]
    pub fn remove_line(&self, line: Line) -> Self {
        let mut next = self.clone();
        next.lines.remove(&line);
        next
    }

    /// Drops the pending line selection, keeping dots and lines.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        Self {
            selection: None,
            ..self.clone()
        }
    }

    /// Returns the empty state for the same grid.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.width, self.height)
    }
}
