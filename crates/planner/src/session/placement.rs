use bevy::prelude::*;

use crate::furniture::FurnitureKind;
use crate::item::{ItemId, PlacedItem, TransformPatch};
use crate::settings::{ModelScales, PlannerSettings};
use crate::snap::{sanitize_quantum, snap_to_floor};

use super::state::{DragState, Selection, SelectionChanged};

/// Owned state of one planner view: placed items, selection, drag and snap.
#[derive(Resource, Debug, Clone)]
pub struct PlacementSession {
    items: Vec<PlacedItem>,
    selection: Selection,
    drag: DragState,
    preview: Vec3,
    snap: f32,
    next_id: u64,
    model_scales: ModelScales,
    /// Selection transitions not yet published as events.
    transitions: Vec<SelectionChanged>,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::from_settings(&PlannerSettings::default())
    }
}

impl PlacementSession {
    pub fn from_settings(settings: &PlannerSettings) -> Self {
        Self {
            items: Vec::new(),
            selection: Selection::None,
            drag: DragState::Idle,
            preview: Vec3::ZERO,
            snap: sanitize_quantum(settings.snap_quantum),
            next_id: 1,
            model_scales: settings.model_scales,
            transitions: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Items in insertion order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selection.id().and_then(|id| self.item(id))
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn preview(&self) -> Vec3 {
        self.preview
    }

    pub fn snap(&self) -> f32 {
        self.snap
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Append a new item and select it.
    pub fn add_item(&mut self, kind: FurnitureKind, position: Vec3) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        debug_assert!(!self.contains(id), "duplicate item id {id}");

        let mut item = PlacedItem::new(id, kind, position);
        item.model_scale = Some(self.model_scales.for_kind(kind));
        self.items.push(item);
        debug!("Placed {} {} at {:?}", kind, id, position);

        self.transition_selection(Selection::Item(id));
        id
    }

    /// Remove the selected item, if any, and clear the selection.
    pub fn remove_selected(&mut self) -> Option<PlacedItem> {
        let id = self.selection.id()?;
        self.remove_item(id)
    }

    /// Remove an item by id. Clears the selection when it referenced the item.
    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|it| it.id == id)?;
        let removed = self.items.remove(index);
        debug!("Removed {} {}", removed.kind, id);
        if self.selection.is_selected(id) {
            self.transition_selection(Selection::None);
        }
        Some(removed)
    }

    /// Remove every item and clear the selection.
    pub fn clear_items(&mut self) {
        if !self.items.is_empty() {
            debug!("Cleared {} items", self.items.len());
        }
        self.items.clear();
        self.transition_selection(Selection::None);
    }

    /// Replace one item's transform. Unknown ids are ignored.
    pub fn on_transform_change(&mut self, id: ItemId, patch: TransformPatch) -> bool {
        match self.items.iter_mut().find(|it| it.id == id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Drag axis
    // -----------------------------------------------------------------------

    /// Begin a palette drag, replacing any drag already in progress.
    pub fn start_drag(&mut self, kind: FurnitureKind) {
        self.drag = DragState::Pending(kind);
        self.preview = Vec3::ZERO;
    }

    /// Move the drag preview to the snapped floor point under `world_point`.
    pub fn update_preview(&mut self, world_point: Vec3) {
        if !self.drag.is_active() {
            return;
        }
        self.preview = snap_to_floor(world_point, self.snap);
    }

    /// Place the dragged kind at the preview position and end the drag.
    pub fn commit_drag(&mut self) -> Option<ItemId> {
        let kind = self.drag.kind()?;
        let id = self.add_item(kind, self.preview);
        self.drag = DragState::Idle;
        Some(id)
    }

    /// End the drag without placing anything.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    // -----------------------------------------------------------------------
    // Selection axis
    // -----------------------------------------------------------------------

    /// Select an item, or clear the selection. Ids that don't reference an
    /// existing item clear the selection.
    pub fn select(&mut self, id: Option<ItemId>) {
        let next = match id {
            Some(id) if self.contains(id) => Selection::Item(id),
            _ => Selection::None,
        };
        self.transition_selection(next);
    }

    pub fn set_snap(&mut self, quantum: f32) {
        self.snap = sanitize_quantum(quantum);
    }

    /// Take the selection transitions recorded since the last call.
    pub fn drain_transitions(&mut self) -> std::vec::Drain<'_, SelectionChanged> {
        self.transitions.drain(..)
    }

    /// The only writer of `selection`. Records a transition when the value
    /// actually changes.
    fn transition_selection(&mut self, next: Selection) {
        debug_assert!(
            next.id().map_or(true, |id| self.contains(id)),
            "selection must reference an existing item"
        );
        if self.selection == next {
            return;
        }
        let previous = self.selection;
        self.selection = next;
        self.transitions.push(SelectionChanged {
            previous,
            current: next,
        });
    }
}
