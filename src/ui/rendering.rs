//! Surface rendering for grid markers, lines, dots and overlay buttons.
//!
//! Dots, lines and markers are sized in inner units and scaled to the display on
//! draw; overlay buttons are sized in display pixels.

use super::state::DiagramEditor;
use crate::constants::{
    DOT_RADIUS, GRID_MARKER_RADIUS, LINE_STROKE_WIDTH, SURFACE_BORDER_WIDTH, SURFACE_CORNER_RADIUS,
};
use crate::types::{EditMode, GridPoint};
use eframe::egui;
use eframe::epaint::StrokeKind;

const MARKER_COLOR: egui::Color32 = egui::Color32::from_gray(160);
const INK_COLOR: egui::Color32 = egui::Color32::RED;
const BORDER_COLOR: egui::Color32 = egui::Color32::LIGHT_GRAY;

impl DiagramEditor {
    /// Renders the whole surface in layers: border, grid markers, lines, dots, buttons.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `surface` - Screen-space rectangle of the drawing surface
    /// * `hovered` - Grid point under the pointer, if any
    pub fn render_surface(
        &self,
        painter: &egui::Painter,
        surface: egui::Rect,
        hovered: Option<GridPoint>,
    ) {
        painter.rect_stroke(
            surface.expand(SURFACE_BORDER_WIDTH),
            SURFACE_CORNER_RADIUS,
            egui::Stroke::new(SURFACE_BORDER_WIDTH, BORDER_COLOR),
            StrokeKind::Inside,
        );

        let scale = self.mapper.display_per_inner();

        for y in 0..self.mapper.height() {
            for x in 0..self.mapper.width() {
                let center = self.inner_to_screen(surface, self.mapper.inner_point(GridPoint::new(x, y)));
                painter.circle_filled(center, GRID_MARKER_RADIUS * scale, MARKER_COLOR);
            }
        }

        let state = self.controller.state();
        let stroke = egui::Stroke::new(LINE_STROKE_WIDTH * scale, INK_COLOR);
        for line in state.lines() {
            let a = self.inner_to_screen(surface, self.mapper.inner_point(line.a()));
            let b = self.inner_to_screen(surface, self.mapper.inner_point(line.b()));
            painter.line_segment([a, b], stroke);
            // Round caps
            painter.circle_filled(a, stroke.width / 2.0, INK_COLOR);
            painter.circle_filled(b, stroke.width / 2.0, INK_COLOR);
        }

        for dot in state.dots() {
            let center = self.inner_to_screen(surface, self.mapper.inner_point(*dot));
            painter.circle_filled(center, DOT_RADIUS * scale, INK_COLOR);
        }

        self.draw_node_buttons(painter, surface, hovered);
    }

    /// Draws the clickable ring around every grid point, highlighting the pending selection.
    fn draw_node_buttons(
        &self,
        painter: &egui::Painter,
        surface: egui::Rect,
        hovered: Option<GridPoint>,
    ) {
        let radius = self.mapper.button_radius();
        // A pending line endpoint is only shown while drawing lines
        let selected = match self.controller.mode() {
            EditMode::Line => self.controller.selection(),
            EditMode::Dot => None,
        };
        let visuals = painter.ctx().style().visuals.clone();

        for y in 0..self.mapper.height() {
            for x in 0..self.mapper.width() {
                let point = GridPoint::new(x, y);
                let (dx, dy) = self.mapper.display_point(point);
                let center = surface.min + egui::vec2(dx, dy);

                if Some(point) == selected {
                    painter.circle_filled(center, radius, visuals.selection.bg_fill.gamma_multiply(0.5));
                    painter.circle_stroke(center, radius, visuals.selection.stroke);
                } else if Some(point) == hovered {
                    painter.circle_filled(center, radius, visuals.widgets.hovered.weak_bg_fill.gamma_multiply(0.4));
                    painter.circle_stroke(center, radius, visuals.widgets.hovered.bg_stroke);
                }
            }
        }
    }
}
