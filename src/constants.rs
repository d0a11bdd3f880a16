//! Shared application-wide constants.
//! Centralizes tweakable values used across coordinate mapping, rendering and interactions.

// Configuration defaults
/// Default number of grid columns.
pub const DEFAULT_WIDTH: u32 = 5;
/// Default number of grid rows.
pub const DEFAULT_HEIGHT: u32 = 5;
/// Default display scale in pixels per grid cell.
pub const DEFAULT_DISP_SCALE: f32 = 120.0;
/// Largest accepted column or row count. Keeps cell centres exactly representable as `f32`.
pub const MAX_GRID_CELLS: u32 = 1024;

// Inner (scale-independent) drawing space
/// Inner view units per grid cell. Fixed, so strokes and radii keep their proportions at any scale.
pub const INNER_UNITS_PER_CELL: f32 = 100.0;
/// Radius of the grey grid markers in inner units.
pub const GRID_MARKER_RADIUS: f32 = 6.0;
/// Radius of a placed dot in inner units.
pub const DOT_RADIUS: f32 = 12.0;
/// Stroke width of a drawn line in inner units.
pub const LINE_STROKE_WIDTH: f32 = 6.0;
/// Distance from a line (in inner units) within which a click removes it.
pub const LINE_HIT_TOLERANCE: f32 = 8.0;

// Display (scaled) interaction space
/// Overlay button radius as a fraction of the display scale.
pub const NODE_BUTTON_RADIUS_FRACTION: f32 = 0.2;
/// Border drawn around the drawing surface, in screen pixels.
pub const SURFACE_BORDER_WIDTH: f32 = 3.0;
/// Corner radius of the drawing surface border, in screen pixels.
pub const SURFACE_CORNER_RADIUS: f32 = 5.0;
/// Vertical gap above and below the drawing surface, in screen pixels.
pub const SURFACE_MARGIN: f32 = 10.0;
