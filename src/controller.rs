//! Input dispatch and change notification.
//!
//! The [`InteractionController`] owns the editor's [`DiagramState`], routes each
//! input event to the transition selected by the current [`EditMode`], and reports
//! the resulting dots and lines to the host exactly once per event.

use crate::config::EditorConfig;
use crate::diagram::DiagramState;
use crate::types::{Diagram, EditMode, GridPoint, Line};

/// Host callback receiving the full diagram after every handled event.
pub type ChangeListener = Box<dyn FnMut(&Diagram)>;

/// A discrete user input on the editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// A grid point's overlay button was clicked
    GridPointClicked(GridPoint),
    /// A rendered line was clicked
    LineClicked(Line),
    /// The reset control was activated
    Reset,
}

/// Mode-aware dispatcher over a single editor's diagram state.
pub struct InteractionController {
    state: DiagramState,
    mode: EditMode,
    listener: ChangeListener,
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl InteractionController {
    /// Creates a controller with an empty diagram sized from `config`.
    ///
    /// `listener` is registered once and called synchronously after every event,
    /// including events that leave dots and lines unchanged. Construction itself
    /// reports nothing.
    pub fn new(config: &EditorConfig, listener: impl FnMut(&Diagram) + 'static) -> Self {
        Self {
            state: DiagramState::new(config.width, config.height),
            mode: config.mode,
            listener: Box::new(listener),
        }
    }

    /// The current diagram state, including the pending selection.
    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    /// The active editing mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Applies a mode supplied by the host. Takes effect from the next click.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            log::debug!("mode changed: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// The first endpoint of an in-progress line, if any.
    pub fn selection(&self) -> Option<GridPoint> {
        self.state.selection()
    }

    /// The current dots and lines.
    pub fn snapshot(&self) -> Diagram {
        self.state.snapshot()
    }

    /// Dispatches an input event to the matching handler.
    pub fn handle(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::GridPointClicked(point) => self.click_grid_point(point),
            EditorEvent::LineClicked(line) => self.click_line(line),
            EditorEvent::Reset => self.reset(),
        }
    }

    /// Handles a click on a grid point according to the current mode.
    pub fn click_grid_point(&mut self, point: GridPoint) {
        let next = match self.mode {
            // Dot mode never leaves a line selection pending
            EditMode::Dot => self.state.toggle_dot(point).clear_selection(),
            EditMode::Line => self.state.begin_or_complete_line(point),
        };
        log::debug!("{} click at {point}", self.mode);
        self.commit(next);
    }

    /// Removes a clicked line, whatever the current mode.
    pub fn click_line(&mut self, line: Line) {
        log::debug!("line click on {line}");
        let next = self.state.remove_line(line);
        self.commit(next);
    }

    /// Clears every dot, line and selection.
    pub fn reset(&mut self) {
        log::debug!("reset");
        let next = self.state.reset();
        self.commit(next);
    }

    fn commit(&mut self, next: DiagramState) {
        self.state = next;
        let snapshot = self.state.snapshot();
        log::debug!(
            "diagram now has {} dots, {} lines, selection {:?}",
            snapshot.dots.len(),
            snapshot.lines.len(),
            self.state.selection()
        );
        (self.listener)(&snapshot);
    }
}
