//! # Diagram Maker
//!
//! An interactive grid diagram editor. The user clicks grid points to toggle
//! **dots**, or clicks two grid points in turn to draw an undirected **line**
//! between them; clicking a line removes it. The host is told the complete set of
//! dots and lines after every change.
//!
//! ## Layers
//! - [`CoordinateMapper`]: grid indices to inner (scale-independent) and display pixels
//! - [`DiagramState`]: dots, lines and the pending line selection, with pure transitions
//! - [`InteractionController`]: mode-aware click dispatch and change notification
//! - [`DiagramEditor`] / [`DiagramApp`]: the egui surface and its desktop host

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod config;
mod controller;
mod diagram;
mod error;
mod mapper;
mod types;
mod ui;

// Re-export public types and functions
pub use config::{EditorConfig, MODE_ENV_VAR};
pub use controller::{ChangeListener, EditorEvent, InteractionController};
pub use diagram::DiagramState;
pub use error::{ConfigError, ConfigResult};
pub use mapper::{surface_extent, CoordinateMapper, SurfaceExtent};
pub use types::*;
pub use ui::{DiagramApp, DiagramEditor, HostReport};

/// Runs the editor window with the given configuration.
///
/// The configuration is validated before the window opens; an invalid one is
/// reported through the returned error without starting the event loop.
///
/// # Example
///
/// ```no_run
/// use diagram_maker::{run_app, EditorConfig};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(EditorConfig::default())
/// }
/// ```
pub fn run_app(config: EditorConfig) -> Result<(), eframe::Error> {
    let app = DiagramApp::new(config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let extent = app.editor.mapper.extent();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            extent.pixel_width + 320.0,
            extent.pixel_height + 140.0,
        ]),
        ..Default::default()
    };
    eframe::run_native(
        "Diagram Maker",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
