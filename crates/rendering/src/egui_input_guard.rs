//! Egui input guard: prevents click-through from UI panels to the room.
//!
//! When egui (sidebar, dock, HUD) is handling pointer input, canvas input
//! systems skip presses so clicking a button never deselects or picks an
//! item underneath it.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer, i.e. the cursor is over an
/// egui panel or egui is actively handling a drag/click. Canvas presses
/// should be ignored when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Returns `true` only when the cursor is physically over an egui area.
///
/// Unlike [`egui_wants_pointer`] this stays `false` while a drag that began
/// on a dock card is released over the canvas.
#[inline]
pub fn pointer_over_egui(contexts: &mut EguiContexts) -> bool {
    contexts.ctx_mut().is_pointer_over_area()
}

/// Returns `true` while an egui text field has keyboard focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts.ctx_mut().wants_keyboard_input()
}
