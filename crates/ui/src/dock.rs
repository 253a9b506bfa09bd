//! Floating palette dock: one drag card per furniture kind.
//!
//! Pressing a card starts a palette drag. The drop itself is handled by the
//! canvas pointer input, which sees the release wherever it happens.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use planner::events::PlannerCommand;
use planner::furniture::FurnitureKind;
use planner::session::PlacementSession;

use crate::widgets::{kind_color, CARD_TEXT};

const CARD_SIZE: egui::Vec2 = egui::vec2(84.0, 64.0);

pub fn palette_dock_ui(
    mut contexts: EguiContexts,
    session: Res<PlacementSession>,
    mut commands: EventWriter<PlannerCommand>,
) {
    let dragging = session.drag().kind();
    egui::Area::new(egui::Id::new("palette_dock"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    for kind in FurnitureKind::ALL {
                        let active = dragging == Some(kind);
                        let stroke = if active {
                            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
                        } else {
                            egui::Stroke::NONE
                        };
                        let card = egui::Button::new(
                            egui::RichText::new(kind.label()).color(CARD_TEXT).strong(),
                        )
                        .fill(kind_color(kind))
                        .stroke(stroke)
                        .min_size(CARD_SIZE)
                        .sense(egui::Sense::click_and_drag());
                        let response = ui.add(card).on_hover_text("Drag onto the floor");

                        let pressed = ui.input(|i| i.pointer.primary_pressed());
                        if pressed && response.hovered() {
                            commands.send(PlannerCommand::StartDrag { kind });
                        }
                    }
                });
            });
        });
}
