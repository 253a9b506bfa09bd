//! Planner sidebar.
//!
//! Room dimensions, quick-add buttons, the scene item list and the
//! destructive actions. Every edit is sent as a `PlannerCommand`.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use planner::events::PlannerCommand;
use planner::furniture::FurnitureKind;
use planner::room::RoomDimensions;
use planner::session::PlacementSession;
use planner::view::PlannerView;

use crate::widgets::{kind_color, stepped_drag_value, CARD_TEXT};

const FLOOR_STEP: f32 = 0.5;
const HEIGHT_STEP: f32 = 0.1;
const FLOOR_RANGE: (f32, f32) = (1.0, 30.0);
const HEIGHT_RANGE: (f32, f32) = (0.5, 10.0);

const HINTS: [&str; 5] = [
    "Drag a card from the dock onto the floor",
    "Click an item to select it, click the floor to deselect",
    "W move, E rotate, Delete removes",
    "Esc cancels a drag or clears the selection",
    "Right-drag orbits, middle-drag pans, wheel zooms",
];

pub fn planner_sidebar_ui(
    mut contexts: EguiContexts,
    session: Res<PlacementSession>,
    room: Res<RoomDimensions>,
    mut commands: EventWriter<PlannerCommand>,
    mut next_view: ResMut<NextState<PlannerView>>,
) {
    egui::SidePanel::left("planner_sidebar")
        .default_width(240.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            ui.heading("Room Planner");
            ui.separator();

            // --- Room dimensions ---
            ui.label(egui::RichText::new("Room").strong());
            let width = stepped_drag_value(ui, "Width", room.width(), FLOOR_STEP, FLOOR_RANGE);
            let depth = stepped_drag_value(ui, "Depth", room.depth(), FLOOR_STEP, FLOOR_RANGE);
            let height =
                stepped_drag_value(ui, "Height", room.height(), HEIGHT_STEP, HEIGHT_RANGE);
            if width.is_some() || depth.is_some() || height.is_some() {
                commands.send(PlannerCommand::ResizeRoom {
                    width,
                    depth,
                    height,
                });
            }
            ui.separator();

            // --- Quick add ---
            ui.label(egui::RichText::new("Quick add").strong());
            ui.horizontal_wrapped(|ui| {
                for kind in FurnitureKind::ALL {
                    let button = egui::Button::new(
                        egui::RichText::new(format!("+ {}", kind.label())).color(CARD_TEXT),
                    )
                    .fill(kind_color(kind));
                    if ui.add(button).clicked() {
                        commands.send(PlannerCommand::AddItem {
                            kind,
                            position: None,
                        });
                    }
                }
            });
            ui.separator();

            // --- Scene items ---
            ui.label(egui::RichText::new(format!("Items ({})", session.items().len())).strong());
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    if session.items().is_empty() {
                        ui.weak("Nothing placed yet");
                    }
                    for item in session.items() {
                        let selected = session.selection().is_selected(item.id);
                        if ui.selectable_label(selected, item.short_label()).clicked() && !selected
                        {
                            commands.send(PlannerCommand::Select { id: Some(item.id) });
                        }
                    }
                });
            ui.separator();

            // --- Actions ---
            let has_selection = session.selection().id().is_some();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete Selected"))
                    .clicked()
                {
                    commands.send(PlannerCommand::RemoveSelected);
                }
                if ui.button("Clear All").clicked() {
                    commands.send(PlannerCommand::ClearItems);
                }
            });
            ui.separator();

            // --- Hints ---
            for hint in HINTS {
                ui.small(hint);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                if ui.button("Close planner").clicked() {
                    next_view.set(PlannerView::Closed);
                }
            });
        });
}
