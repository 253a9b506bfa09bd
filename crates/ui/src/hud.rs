//! Heads-up display: grid snap input plus drag and gizmo status.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use planner::events::PlannerCommand;
use planner::gizmo::{GizmoMode, TransformGizmo};
use planner::session::PlacementSession;

use crate::widgets::stepped_edit;

const SNAP_STEP: f32 = 0.05;
const SNAP_MAX: f32 = 2.0;

pub fn snap_hud_ui(
    mut contexts: EguiContexts,
    session: Res<PlacementSession>,
    gizmo: Res<TransformGizmo>,
    mut commands: EventWriter<PlannerCommand>,
) {
    egui::Area::new(egui::Id::new("snap_hud"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Grid snap");
                    let current = session.snap();
                    let mut edited = current;
                    let response = ui.add(
                        egui::DragValue::new(&mut edited)
                            .speed(SNAP_STEP)
                            .range(0.0..=SNAP_MAX)
                            .max_decimals(2)
                            .suffix(" m"),
                    );
                    if response.changed() {
                        if let Some(quantum) = stepped_edit(current, edited, SNAP_STEP, 0.0, SNAP_MAX)
                        {
                            commands.send(PlannerCommand::SetSnap { quantum });
                        }
                    }
                });
                if session.snap() == 0.0 {
                    ui.weak("Snapping off");
                }

                let mode = match gizmo.mode {
                    GizmoMode::Translate => "Move (W)",
                    GizmoMode::Rotate => "Rotate (E)",
                };
                ui.label(format!("Gizmo: {mode}"));

                if let Some(kind) = session.drag().kind() {
                    ui.label(
                        egui::RichText::new(format!("Placing {}", kind.label()))
                            .color(ui.visuals().selection.stroke.color),
                    );
                }
            });
        });
}
