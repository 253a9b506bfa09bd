use bevy::prelude::*;
use serde::Serialize;

use crate::furniture::FurnitureKind;
use crate::item::ItemId;

/// Drag-from-palette axis of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    /// A palette card was pressed; the item is placed on release.
    Pending(FurnitureKind),
}

impl DragState {
    pub fn kind(self) -> Option<FurnitureKind> {
        match self {
            DragState::Idle => None,
            DragState::Pending(kind) => Some(kind),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, DragState::Pending(_))
    }
}

/// Selection axis of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Item(ItemId),
}

impl Selection {
    pub fn id(self) -> Option<ItemId> {
        match self {
            Selection::None => None,
            Selection::Item(id) => Some(id),
        }
    }

    pub fn is_selected(self, id: ItemId) -> bool {
        self == Selection::Item(id)
    }
}

impl From<Option<ItemId>> for Selection {
    fn from(id: Option<ItemId>) -> Self {
        match id {
            Some(id) => Selection::Item(id),
            None => Selection::None,
        }
    }
}

/// Emitted once per selection transition, in order.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: Selection,
    pub current: Selection,
}
