//! Drawing surface interaction.
//!
//! This module lays out the editor surface, turns pointer clicks into
//! [`EditorEvent`]s, and hit-tests grid-point buttons and lines.

use super::state::DiagramEditor;
use crate::constants::{LINE_HIT_TOLERANCE, SURFACE_MARGIN};
use crate::controller::EditorEvent;
use crate::types::{GridPoint, Line};
use eframe::egui;

impl DiagramEditor {
    /// Draws the mode label, the drawing surface and the reset control, and handles clicks.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI to draw into
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.config.show_mode {
            ui.label(format!("Mode: {}", self.controller.mode()));
        }

        ui.add_space(SURFACE_MARGIN);
        let extent = self.mapper.extent();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(extent.pixel_width, extent.pixel_height),
            egui::Sense::click(),
        );
        let surface = response.rect;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.handle_surface_click(surface, pos);
            }
        }

        let hovered = response
            .hover_pos()
            .and_then(|pos| self.find_grid_point_at(surface, pos));
        self.render_surface(&painter, surface, hovered);
        ui.add_space(SURFACE_MARGIN);

        if ui.button("Reset").clicked() {
            self.controller.handle(EditorEvent::Reset);
        }
    }

    /// Converts a screen position into the surface's display space.
    pub fn screen_to_display(&self, surface: egui::Rect, screen_pos: egui::Pos2) -> (f32, f32) {
        let local = screen_pos - surface.min;
        (local.x, local.y)
    }

    /// Converts an inner-space position into screen space.
    pub fn inner_to_screen(&self, surface: egui::Rect, inner: (f32, f32)) -> egui::Pos2 {
        let (x, y) = self.mapper.inner_to_display(inner);
        surface.min + egui::vec2(x, y)
    }

    /// Routes a click on the surface to the controller.
    ///
    /// Grid-point buttons sit above the lines, so they win when both are hit.
    /// Clicks on empty surface produce no event.
    pub fn handle_surface_click(
        &mut self,
        surface: egui::Rect,
        screen_pos: egui::Pos2,
    ) -> Option<EditorEvent> {
        let event = if let Some(point) = self.find_grid_point_at(surface, screen_pos) {
            EditorEvent::GridPointClicked(point)
        } else if let Some(line) = self.find_line_at(surface, screen_pos) {
            EditorEvent::LineClicked(line)
        } else {
            return None;
        };
        self.controller.handle(event);
        Some(event)
    }

    /// Finds the grid point whose overlay button is under `screen_pos`.
    pub fn find_grid_point_at(&self, surface: egui::Rect, screen_pos: egui::Pos2) -> Option<GridPoint> {
        self.mapper
            .grid_point_at_display(self.screen_to_display(surface, screen_pos))
    }

    /// Finds the topmost line within [`LINE_HIT_TOLERANCE`] inner units of `screen_pos`.
    pub fn find_line_at(&self, surface: egui::Rect, screen_pos: egui::Pos2) -> Option<Line> {
        let (ix, iy) = self
            .mapper
            .display_to_inner(self.screen_to_display(surface, screen_pos));
        let point = egui::pos2(ix, iy);
        // Later lines are painted on top
        self.controller.state().lines().iter().rev().copied().find(|line| {
            let (ax, ay) = self.mapper.inner_point(line.a());
            let (bx, by) = self.mapper.inner_point(line.b());
            point_to_segment_distance(point, egui::pos2(ax, ay), egui::pos2(bx, by))
                <= LINE_HIT_TOLERANCE
        })
    }
}

/// Distance from a point to a line segment, by clamped projection onto the segment.
fn point_to_segment_distance(point: egui::Pos2, start: egui::Pos2, end: egui::Pos2) -> f32 {
    let segment = end - start;
    let offset = point - start;
    let len_sq = segment.length_sq();
    if len_sq < 0.0001 {
        return offset.length();
    }
    let t = (offset.dot(segment) / len_sq).clamp(0.0, 1.0);
    (point - (start + segment * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = egui::pos2(0.0, 0.0);
        let b = egui::pos2(10.0, 0.0);
        assert_eq!(point_to_segment_distance(egui::pos2(5.0, 3.0), a, b), 3.0);
        assert_eq!(point_to_segment_distance(egui::pos2(14.0, 3.0), a, b), 5.0);
        assert_eq!(point_to_segment_distance(egui::pos2(-3.0, 4.0), a, b), 5.0);
    }
}
