//! Workload tests for the placement session through its public API.
//!
//! These exercise long operation sequences and large item counts:
//! - ids stay unique and ordered across thousands of adds and removes
//! - selection always references an existing item
//! - every recorded transition chains from the previous one
//! - picking stays correct with many items on the floor
//!
//! Run: cargo test -p planner --test session_scale

use std::collections::HashSet;
use std::time::Instant;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use planner::furniture::FurnitureKind;
use planner::item::ItemId;
use planner::picking::pick_item;
use planner::session::{PlacementSession, Selection};

const NUM_OPERATIONS: usize = 5_000;
const SEED: u64 = 0x5EED_F00D_CAFE_0001;

// ---------------------------------------------------------------------------
// 1. Long mixed workload keeps every invariant
// ---------------------------------------------------------------------------

#[test]
fn test_mixed_workload_keeps_invariants() {
    let mut session = PlacementSession::default();
    let mut seen = HashSet::new();
    let mut last_selection = Selection::None;
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..NUM_OPERATIONS {
        let kind = FurnitureKind::ALL[rng.gen_range(0..FurnitureKind::ALL.len())];
        match rng.gen_range(0..8) {
            0..=2 => {
                let id = session.add_item(kind, Vec3::ZERO);
                assert!(seen.insert(id), "id {id} reused");
            }
            3 => {
                session.remove_selected();
            }
            4 => {
                let n = session.items().len();
                let pick = (n > 0).then(|| session.items()[rng.gen_range(0..n)].id);
                session.select(pick);
            }
            5 => session.start_drag(kind),
            6 => {
                let x: f32 = rng.gen_range(-3.0..4.0);
                session.update_preview(Vec3::new(x, 0.4, -x));
            }
            _ => {
                if let Some(id) = session.commit_drag() {
                    assert!(seen.insert(id), "id {id} reused");
                }
            }
        }

        if let Some(id) = session.selection().id() {
            assert!(session.contains(id), "selection references missing {id}");
        }
        for change in session.drain_transitions() {
            assert_eq!(change.previous, last_selection);
            assert_ne!(change.previous, change.current);
            last_selection = change.current;
        }
        assert_eq!(last_selection, session.selection());

        let ids: Vec<ItemId> = session.items().iter().map(|it| it.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "insertion order broken");
    }
}

// ---------------------------------------------------------------------------
// 2. Picking among many items
// ---------------------------------------------------------------------------

#[test]
fn test_pick_among_ten_thousand_items() {
    let mut session = PlacementSession::default();
    for i in 0..10_000 {
        let x = (i % 100) as f32 * 2.0;
        let z = (i / 100) as f32 * 2.0;
        session.add_item(FurnitureKind::Chair, Vec3::new(x, 0.0, z));
    }

    let start = Instant::now();
    let ray = Ray3d::new(Vec3::new(42.0, 20.0, 64.0), Dir3::NEG_Y);
    let hit = pick_item(session.items(), ray);
    let elapsed = start.elapsed();

    let expected = session
        .items()
        .iter()
        .find(|it| it.position == Vec3::new(42.0, 0.0, 64.0))
        .map(|it| it.id);
    assert_eq!(hit, expected);
    assert!(
        elapsed.as_millis() < 500,
        "picking 10K items took {elapsed:?}"
    );
}

// ---------------------------------------------------------------------------
// 3. Clearing a full session
// ---------------------------------------------------------------------------

#[test]
fn test_clear_large_session() {
    let mut session = PlacementSession::default();
    for _ in 0..2_000 {
        session.add_item(FurnitureKind::Table, Vec3::ZERO);
    }
    session.clear_items();
    assert!(session.items().is_empty());
    assert_eq!(session.selection(), Selection::None);

    let next = session.add_item(FurnitureKind::Bed, Vec3::ZERO);
    assert_eq!(next, ItemId(2_001), "ids never restart within a session");
}
