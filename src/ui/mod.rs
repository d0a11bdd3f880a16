//! User interface components and rendering logic for the diagram editor.
//!
//! # Module Organization
//!
//! - `state` - The embeddable [`DiagramEditor`] and the desktop host [`DiagramApp`]
//! - `canvas` - Surface layout, click dispatch and hit testing
//! - `rendering` - Drawing grid markers, lines, dots and overlay buttons

mod canvas;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::{DiagramApp, DiagramEditor, HostReport};

use crate::types::EditMode;
use eframe::egui;

impl eframe::App for DiagramApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_frame(ctx);
    }
}

impl DiagramApp {
    /// Lays out the host toolbar, the report panel and the editor for one frame.
    pub fn draw_frame(&mut self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::right("report_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_report_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.editor.show(ui);
            });
        });
    }

    /// Draws the host toolbar: mode selection, mode label toggle and theme switch.
    ///
    /// The mode is host configuration handed to the editor, not editor state.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut mode = self.editor.controller.mode();
            ui.label("Mode:");
            ui.selectable_value(&mut mode, EditMode::Dot, "Dot");
            ui.selectable_value(&mut mode, EditMode::Line, "Line");
            if mode != self.editor.controller.mode() {
                self.editor.set_mode(mode);
            }

            ui.separator();
            ui.checkbox(&mut self.editor.config.show_mode, "Show mode");

            ui.separator();
            let theme_label = if self.dark_mode { "Light" } else { "Dark" };
            if ui.button(theme_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }

    /// Lists the dots and lines from the most recent change notification.
    fn draw_report_panel(&self, ui: &mut egui::Ui) {
        let report = self.report.borrow();
        ui.heading("Diagram");
        ui.label(format!("Changes reported: {}", report.notifications));
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.strong(format!("Dots ({})", report.last.dots.len()));
            for dot in &report.last.dots {
                ui.monospace(dot.to_string());
            }
            ui.add_space(8.0);
            ui.strong(format!("Lines ({})", report.last.lines.len()));
            for line in &report.last.lines {
                ui.monospace(line.to_string());
            }
        });
    }
}
