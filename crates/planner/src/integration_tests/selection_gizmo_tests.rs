use bevy::prelude::*;

use crate::events::{GizmoEvent, PlannerCommand, PointerEvent};
use crate::furniture::FurnitureKind;
use crate::gizmo::GizmoMode;
use crate::item::{ItemId, TransformPatch};
use crate::session::{Selection, SelectionChanged};
use crate::test_harness::TestPlanner;

fn add(planner: &mut TestPlanner, kind: FurnitureKind, x: f32) -> ItemId {
    planner.command(PlannerCommand::AddItem {
        kind,
        position: Some([x, 0.0, 0.0]),
    });
    planner.last_item().expect("item was added")
}

fn moved_to(x: f32) -> TransformPatch {
    TransformPatch {
        position: Vec3::new(x, 0.0, 1.0),
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    }
}

// ===========================================================================
// Gizmo follows the selection
// ===========================================================================

#[test]
fn test_switching_selection_moves_single_attachment() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    let first = planner.gizmo().attachment().expect("attached to A");
    assert_eq!(first.target, a);

    let b = add(&mut planner, FurnitureKind::Table, 2.0);
    assert_eq!(
        planner.selection_events(),
        vec![SelectionChanged {
            previous: Selection::Item(a),
            current: Selection::Item(b),
        }]
    );
    let second = planner.gizmo().attachment().expect("attached to B");
    assert_eq!(second.target, b);
    assert_ne!(first.binding, second.binding);
}

#[test]
fn test_reselecting_same_item_publishes_nothing() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    let binding = planner.gizmo().attachment().map(|att| att.binding);

    planner.command(PlannerCommand::Select { id: Some(a) });
    assert!(planner.selection_events().is_empty());
    assert_eq!(planner.gizmo().attachment().map(|att| att.binding), binding);
}

#[test]
fn test_background_press_clears_selection_and_detaches() {
    let mut planner = TestPlanner::new();
    add(&mut planner, FurnitureKind::Bed, 0.0);
    planner.pointer(PointerEvent::BackgroundPressed);
    planner.tick();
    assert_eq!(planner.session().selection(), Selection::None);
    assert_eq!(planner.gizmo().target(), None);
}

#[test]
fn test_background_press_ignored_while_gizmo_drags() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    planner.gizmo_event(GizmoEvent::DraggingChanged(true));
    planner.tick();
    assert!(planner.gizmo().is_dragging());

    planner.pointer(PointerEvent::BackgroundPressed);
    planner.tick();
    assert_eq!(planner.session().selection(), Selection::Item(a));
    assert_eq!(planner.gizmo().target(), Some(a));
}

#[test]
fn test_item_press_selects_and_unknown_id_clears() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    let b = add(&mut planner, FurnitureKind::Chair, 1.0);

    planner.pointer(PointerEvent::ItemPressed(a));
    planner.tick();
    assert_eq!(planner.session().selection(), Selection::Item(a));
    assert_eq!(planner.gizmo().target(), Some(a));

    planner.command(PlannerCommand::RemoveItem { id: b });
    planner.pointer(PointerEvent::ItemPressed(b));
    planner.tick();
    assert_eq!(planner.session().selection(), Selection::None);
    assert_eq!(planner.gizmo().target(), None);
}

// ===========================================================================
// Gizmo changes land on the right item
// ===========================================================================

#[test]
fn test_gizmo_change_updates_attached_item() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Table, 0.0);
    let binding = planner.gizmo().attachment().expect("attached").binding;

    planner.gizmo_event(GizmoEvent::ObjectChanged {
        binding,
        transform: moved_to(3.0),
    });
    planner.tick();
    let item = planner.session().item(a).expect("still present");
    assert_eq!(item.position, Vec3::new(3.0, 0.0, 1.0));
}

#[test]
fn test_stale_gizmo_change_is_dropped() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    let stale = planner.gizmo().attachment().expect("attached").binding;
    let b = add(&mut planner, FurnitureKind::Bed, 2.0);

    planner.gizmo_event(GizmoEvent::ObjectChanged {
        binding: stale,
        transform: moved_to(5.0),
    });
    planner.tick();
    assert_eq!(planner.session().item(a).map(|it| it.position), Some(Vec3::ZERO));
    assert_eq!(
        planner.session().item(b).map(|it| it.position),
        Some(Vec3::new(2.0, 0.0, 0.0))
    );
}

#[test]
fn test_gizmo_change_after_detach_is_dropped() {
    let mut planner = TestPlanner::new();
    let a = add(&mut planner, FurnitureKind::Chair, 0.0);
    let binding = planner.gizmo().attachment().expect("attached").binding;
    planner.command(PlannerCommand::Select { id: None });

    planner.gizmo_event(GizmoEvent::ObjectChanged {
        binding,
        transform: moved_to(4.0),
    });
    planner.tick();
    assert_eq!(planner.session().item(a).map(|it| it.position), Some(Vec3::ZERO));
}

// ===========================================================================
// Removal paths detach
// ===========================================================================

#[test]
fn test_remove_selected_detaches() {
    let mut planner = TestPlanner::new();
    add(&mut planner, FurnitureKind::Chair, 0.0);
    planner.gizmo_event(GizmoEvent::DraggingChanged(true));
    planner.command(PlannerCommand::RemoveSelected);
    assert!(planner.session().items().is_empty());
    assert_eq!(planner.gizmo().target(), None);
    assert!(!planner.gizmo().is_dragging());
}

#[test]
fn test_clear_items_detaches() {
    let mut planner = TestPlanner::new();
    add(&mut planner, FurnitureKind::Chair, 0.0);
    add(&mut planner, FurnitureKind::Table, 1.0);
    planner.command(PlannerCommand::ClearItems);
    assert!(planner.session().items().is_empty());
    assert_eq!(planner.session().selection(), Selection::None);
    assert_eq!(planner.gizmo().target(), None);
}

#[test]
fn test_gizmo_mode_command() {
    let mut planner = TestPlanner::new();
    planner.command(PlannerCommand::SetGizmoMode {
        mode: GizmoMode::Rotate,
    });
    assert_eq!(planner.gizmo().mode, GizmoMode::Rotate);
}
