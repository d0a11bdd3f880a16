//! Editor and host application state.
//!
//! [`DiagramEditor`] is the embeddable component: validated configuration, its
//! coordinate mapper, and the interaction controller. [`DiagramApp`] is the desktop
//! host around it, which supplies the mode and records what the editor reports.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::EditorConfig;
use crate::controller::InteractionController;
use crate::error::ConfigResult;
use crate::mapper::CoordinateMapper;
use crate::types::{Diagram, EditMode};

/// The grid editor component.
///
/// Holds no drawing state of its own; every frame is rendered from the controller.
#[derive(Debug)]
pub struct DiagramEditor {
    /// Validated configuration the editor was built from
    pub config: EditorConfig,
    /// Layout mapper derived from the configuration
    pub mapper: CoordinateMapper,
    /// Dispatcher owning the diagram state
    pub controller: InteractionController,
}

impl DiagramEditor {
    /// Validates `config` and creates an empty editor that reports changes to `on_change`.
    pub fn new(
        config: EditorConfig,
        on_change: impl FnMut(&Diagram) + 'static,
    ) -> ConfigResult<Self> {
        let config = config.validate()?;
        let mapper = config.mapper();
        let controller = InteractionController::new(&config, on_change);
        log::info!(
            "editor ready: {}x{} grid at {} px/cell, mode {}",
            config.width,
            config.height,
            config.disp_scale,
            config.mode
        );
        Ok(Self {
            config,
            mapper,
            controller,
        })
    }

    /// Applies a host-supplied mode change.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.config.mode = mode;
        self.controller.set_mode(mode);
    }
}

/// What the host has been told by the editor so far.
#[derive(Debug, Clone, Default)]
pub struct HostReport {
    /// Diagram from the most recent change notification
    pub last: Diagram,
    /// Number of notifications received
    pub notifications: u64,
}

/// The desktop application: a host toolbar, a report panel and the editor.
///
/// This struct implements the `eframe::App` trait.
pub struct DiagramApp {
    /// The embedded editor component
    pub editor: DiagramEditor,
    /// Shared with the editor's change listener
    pub report: Rc<RefCell<HostReport>>,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl DiagramApp {
    /// Builds the app around a new editor whose notifications update [`HostReport`].
    pub fn new(config: EditorConfig) -> ConfigResult<Self> {
        let report = Rc::new(RefCell::new(HostReport::default()));
        let sink = Rc::clone(&report);
        let editor = DiagramEditor::new(config, move |diagram: &Diagram| {
            let mut report = sink.borrow_mut();
            report.last = diagram.clone();
            report.notifications += 1;
            log::info!(
                "diagram changed: {} dots, {} lines",
                diagram.dots.len(),
                diagram.lines.len()
            );
        })?;
        Ok(Self {
            editor,
            report,
            dark_mode: true,
        })
    }
}
