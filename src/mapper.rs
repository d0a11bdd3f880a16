//! Coordinate mapping between grid indices and the two pixel spaces.
//!
//! The *inner* space is the scale-independent drawing surface: every cell is
//! [`INNER_UNITS_PER_CELL`] units wide whatever the display scale. The *display*
//! space is what the user clicks on: every cell is `disp_scale` pixels wide.
//! Grid point `i` sits at the centre of cell `i` in both spaces.

use crate::constants::{INNER_UNITS_PER_CELL, NODE_BUTTON_RADIUS_FRACTION};
use crate::types::GridPoint;

/// Overall size of the drawing surface in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceExtent {
    /// Rendered width in display pixels
    pub pixel_width: f32,
    /// Rendered height in display pixels
    pub pixel_height: f32,
    /// Width of the inner view box
    pub inner_view_width: f32,
    /// Height of the inner view box
    pub inner_view_height: f32,
}

/// Computes the rendered and inner extents of a `width` x `height` grid at `scale` pixels per cell.
pub fn surface_extent(width: u32, height: u32, scale: f32) -> SurfaceExtent {
    SurfaceExtent {
        pixel_width: width as f32 * scale,
        pixel_height: height as f32 * scale,
        inner_view_width: width as f32 * INNER_UNITS_PER_CELL,
        inner_view_height: height as f32 * INNER_UNITS_PER_CELL,
    }
}

/// Stateless translator between grid indices, inner units and display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: u32,
    height: u32,
    disp_scale: f32,
}

impl CoordinateMapper {
    /// Creates a mapper for a grid of the given size and display scale.
    pub fn new(width: u32, height: u32, disp_scale: f32) -> Self {
        Self {
            width,
            height,
            disp_scale,
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

    /// Display pixels per grid cell.
    pub fn disp_scale(&self) -> f32 {
        self.disp_scale
    }

    /// Surface extent for this mapper's grid.
    pub fn extent(&self) -> SurfaceExtent {
        surface_extent(self.width, self.height, self.disp_scale)
    }

    /// Position of grid index `index` along one axis of the inner space.
    pub fn to_inner_position(&self, index: u32) -> f32 {
        cell_centre(index, INNER_UNITS_PER_CELL)
    }

    /// Position of grid index `index` along one axis of the display space.
    pub fn to_display_position(&self, index: u32) -> f32 {
        cell_centre(index, self.disp_scale)
    }

    /// Inner-space position of a grid point.
    pub fn inner_point(&self, point: GridPoint) -> (f32, f32) {
        (self.to_inner_position(point.x), self.to_inner_position(point.y))
    }

    /// Display-space position of a grid point.
    pub fn display_point(&self, point: GridPoint) -> (f32, f32) {
        (
            self.to_display_position(point.x),
            self.to_display_position(point.y),
        )
    }

    /// Display pixels per inner unit.
    pub fn display_per_inner(&self) -> f32 {
        self.disp_scale / INNER_UNITS_PER_CELL
    }

    /// Converts a display-space position into the inner space.
    pub fn display_to_inner(&self, (x, y): (f32, f32)) -> (f32, f32) {
        let k = self.display_per_inner();
        (x / k, y / k)
    }

    /// Converts an inner-space position into the display space.
    pub fn inner_to_display(&self, (x, y): (f32, f32)) -> (f32, f32) {
        let k = self.display_per_inner();
        (x * k, y * k)
    }

    /// Radius of the clickable overlay button around each grid point, in display pixels.
    pub fn button_radius(&self) -> f32 {
        self.disp_scale * NODE_BUTTON_RADIUS_FRACTION
    }

    /// Finds the grid point whose overlay button contains a display-space position.
    ///
    /// Buttons are smaller than half a cell, so only the point of the cell under the
    /// pointer can match.
    pub fn grid_point_at_display(&self, (x, y): (f32, f32)) -> Option<GridPoint> {
        let col = self.cell_index(x, self.width)?;
        let row = self.cell_index(y, self.height)?;
        let point = GridPoint::new(col, row);
        let (cx, cy) = self.display_point(point);
        let radius = self.button_radius();
        let hit = (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius;
        log::trace!("hit test ({x:.1}, {y:.1}) -> cell {point} hit={hit}");
        hit.then_some(point)
    }

    fn cell_index(&self, pos: f32, cells: u32) -> Option<u32> {
        if !pos.is_finite() || pos < 0.0 {
            return None;
        }
        let index = (pos / self.disp_scale).floor() as u32;
        (index < cells).then_some(index)
    }
}

fn cell_centre(index: u32, cell: f32) -> f32 {
    (index as f32 + 0.5) * cell
}
