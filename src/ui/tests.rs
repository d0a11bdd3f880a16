use super::*;
use crate::config::EditorConfig;
use crate::controller::EditorEvent;
use crate::types::{GridPoint, Line};
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    })
}

fn app_with_mode(mode: EditMode) -> DiagramApp {
    DiagramApp::new(EditorConfig {
        mode,
        ..Default::default()
    })
    .expect("default config is valid")
}

/// A 600x600 surface (5x5 grid at 120 px/cell) offset from the window origin.
fn surface() -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(600.0, 600.0))
}

/// Screen position of a grid point's button centre on [`surface`].
fn screen_pos(point: GridPoint) -> egui::Pos2 {
    let (x, y) = EditorConfig::default().mapper().display_point(point);
    surface().min + egui::vec2(x, y)
}

#[test]
fn clicking_grid_point_in_dot_mode_toggles_dot_and_reports() {
    let mut app = app_with_mode(EditMode::Dot);
    let target = GridPoint::new(2, 3);

    let event = app
        .editor
        .handle_surface_click(surface(), screen_pos(target) + egui::vec2(5.0, -5.0));
    assert_eq!(event, Some(EditorEvent::GridPointClicked(target)));
    assert!(app.report.borrow().last.dots.contains(&target));

    app.editor
        .handle_surface_click(surface(), screen_pos(target));
    let report = app.report.borrow();
    assert!(report.last.dots.is_empty());
    assert_eq!(report.notifications, 2);
}

#[test]
fn two_clicks_in_line_mode_draw_line_and_clicking_it_removes_it() {
    let mut app = app_with_mode(EditMode::Line);
    let a = GridPoint::new(0, 0);
    let b = GridPoint::new(1, 1);

    app.editor.handle_surface_click(surface(), screen_pos(a));
    assert_eq!(app.editor.controller.selection(), Some(a));
    app.editor.handle_surface_click(surface(), screen_pos(b));
    assert_eq!(app.editor.controller.selection(), None);
    assert_eq!(app.report.borrow().last.lines.len(), 1);

    // Midpoint of the segment lies outside every button
    let mid = screen_pos(a) + (screen_pos(b) - screen_pos(a)) * 0.5;
    let event = app.editor.handle_surface_click(surface(), mid);
    assert_eq!(
        event,
        Some(EditorEvent::LineClicked(Line::new(b, a).expect("distinct")))
    );
    assert!(app.report.borrow().last.lines.is_empty());
    assert_eq!(app.report.borrow().notifications, 3);
}

#[test]
fn button_takes_priority_over_line_beneath_it() {
    let mut app = app_with_mode(EditMode::Line);
    let a = GridPoint::new(0, 0);
    let c = GridPoint::new(2, 0);
    app.editor.handle_surface_click(surface(), screen_pos(a));
    app.editor.handle_surface_click(surface(), screen_pos(c));

    // (1, 0) sits on the drawn line
    let middle = GridPoint::new(1, 0);
    let event = app
        .editor
        .handle_surface_click(surface(), screen_pos(middle));
    assert_eq!(event, Some(EditorEvent::GridPointClicked(middle)));
    assert_eq!(app.editor.controller.selection(), Some(middle));
    assert_eq!(app.report.borrow().last.lines.len(), 1);
}

#[test]
fn click_on_empty_surface_is_ignored() {
    let mut app = app_with_mode(EditMode::Dot);
    let empty = surface().min + egui::vec2(120.0, 120.0);
    assert_eq!(app.editor.handle_surface_click(surface(), empty), None);
    assert_eq!(app.report.borrow().notifications, 0);
}

#[test]
fn host_mode_switch_changes_click_behaviour() {
    let mut app = app_with_mode(EditMode::Line);
    let target = GridPoint::new(4, 4);
    app.editor.handle_surface_click(surface(), screen_pos(target));
    assert_eq!(app.editor.controller.selection(), Some(target));

    app.editor.set_mode(EditMode::Dot);
    app.editor.handle_surface_click(surface(), screen_pos(target));
    assert_eq!(app.editor.controller.selection(), None);
    assert!(app.report.borrow().last.dots.contains(&target));
    assert_eq!(app.editor.config.mode, EditMode::Dot);
}

#[test]
fn reset_event_empties_reported_diagram() {
    let mut app = app_with_mode(EditMode::Dot);
    app.editor
        .handle_surface_click(surface(), screen_pos(GridPoint::new(2, 3)));
    app.editor.controller.handle(EditorEvent::Reset);
    let report = app.report.borrow();
    assert!(report.last.is_empty());
    assert_eq!(report.notifications, 2);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = EditorConfig {
        width: 0,
        ..Default::default()
    };
    assert!(DiagramApp::new(config).is_err());
}

#[test]
fn drawing_editor_with_content_produces_shapes() {
    let mut app = app_with_mode(EditMode::Line);
    app.editor.config.show_mode = true;
    app.editor
        .handle_surface_click(surface(), screen_pos(GridPoint::new(0, 0)));
    app.editor
        .handle_surface_click(surface(), screen_pos(GridPoint::new(3, 2)));
    app.editor
        .handle_surface_click(surface(), screen_pos(GridPoint::new(1, 4)));

    let out = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.editor.show(ui);
        });
    });

    // Border, 25 grid markers and the line already exceed this; exact counts vary with egui.
    assert!(out.shapes.len() > 25, "expected surface shapes to be painted");
}

#[test]
fn full_app_frame_renders_without_panic() {
    let mut app = app_with_mode(EditMode::Dot);
    let _ = run_ui_with(Vec::new(), |ctx| {
        app.draw_frame(ctx);
    });
}

#[test]
fn stale_selection_is_not_drawn_after_switching_to_dot_mode() {
    let render = |app: &mut DiagramApp| {
        run_ui_with(Vec::new(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                app.editor.show(ui);
            });
        })
        .shapes
        .len()
    };

    let mut switched = app_with_mode(EditMode::Line);
    switched
        .editor
        .handle_surface_click(surface(), screen_pos(GridPoint::new(4, 4)));
    let with_highlight = render(&mut switched);
    switched.editor.set_mode(EditMode::Dot);
    let after_switch = render(&mut switched);

    let mut fresh = app_with_mode(EditMode::Dot);
    let clean = render(&mut fresh);

    assert_eq!(after_switch, clean);
    assert!(with_highlight > clean, "line mode should highlight the pending endpoint");
}
