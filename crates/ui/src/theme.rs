use bevy_egui::{egui, EguiContexts};

/// Light, warm theme that sits well next to the pastel furniture cards.
pub fn apply_planner_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::from_rgb(250, 248, 244);
    let inactive = egui::Color32::from_rgb(236, 232, 226);
    let hover = egui::Color32::from_rgb(222, 230, 244);
    let active = egui::Color32::from_rgb(96, 140, 220);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    // Selected row in the item list
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(200, 218, 248);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}
