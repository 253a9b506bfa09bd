//! # TestPlanner: headless harness for planner integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins`, `StatesPlugin` and
//! [`PlannerPlugin`] so the full event → apply → react pipeline runs without
//! a window or renderer.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::WindowFocused;

use crate::events::{GizmoEvent, PlannerCommand, PointerEvent};
use crate::gizmo::TransformGizmo;
use crate::item::ItemId;
use crate::room::RoomDimensions;
use crate::session::{PlacementSession, SelectionChanged};
use crate::settings::PlannerSettings;
use crate::snapshot::PlannerSnapshot;
use crate::view::PlannerView;
use crate::PlannerPlugin;

/// Wall-clock step per frame. Longer than one fixed timestep, so event
/// buffers rotate every frame.
const FRAME_STEP: Duration = Duration::from_millis(20);

pub struct TestPlanner {
    app: App,
}

impl Default for TestPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPlanner {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An open planner view with default settings.
    pub fn new() -> Self {
        Self::with_settings(PlannerSettings::default())
    }

    pub fn with_settings(settings: PlannerSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME_STEP));
        app.init_resource::<ButtonInput<MouseButton>>();
        app.insert_resource(settings);
        app.add_plugins(PlannerPlugin);

        // Run one update so the initial OnEnter mounts the session.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    pub fn tick(&mut self) {
        self.app.update();
    }

    pub fn send(&mut self, command: PlannerCommand) -> &mut Self {
        self.app.world_mut().send_event(command);
        self
    }

    pub fn pointer(&mut self, event: PointerEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self
    }

    pub fn gizmo_event(&mut self, event: GizmoEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self
    }

    /// Send a command and run one frame.
    pub fn command(&mut self, command: PlannerCommand) {
        self.send(command);
        self.tick();
    }

    /// Release the primary mouse button for exactly one frame.
    pub fn release_mouse(&mut self) {
        let mut buttons = self.app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
        self.tick();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
    }

    /// Report that the window lost focus and run one frame.
    pub fn lose_focus(&mut self) {
        self.app.world_mut().send_event(WindowFocused {
            window: Entity::PLACEHOLDER,
            focused: false,
        });
        self.tick();
    }

    pub fn close_view(&mut self) {
        self.set_view(PlannerView::Closed);
    }

    pub fn open_view(&mut self) {
        self.set_view(PlannerView::Open);
    }

    fn set_view(&mut self, view: PlannerView) {
        self.app
            .world_mut()
            .resource_mut::<NextState<PlannerView>>()
            .set(view);
        self.tick();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn view(&self) -> PlannerView {
        *self.app.world().resource::<State<PlannerView>>().get()
    }

    pub fn session(&self) -> &PlacementSession {
        self.app.world().resource::<PlacementSession>()
    }

    pub fn has_session(&self) -> bool {
        self.app.world().contains_resource::<PlacementSession>()
    }

    pub fn gizmo(&self) -> &TransformGizmo {
        self.app.world().resource::<TransformGizmo>()
    }

    pub fn room(&self) -> &RoomDimensions {
        self.app.world().resource::<RoomDimensions>()
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot::capture(self.session(), self.room(), self.gizmo())
    }

    /// Selection transitions published during the last frame.
    pub fn selection_events(&self) -> Vec<SelectionChanged> {
        self.app
            .world()
            .resource::<Events<SelectionChanged>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    /// Id of the most recently placed item.
    pub fn last_item(&self) -> Option<ItemId> {
        self.session().items().last().map(|it| it.id)
    }
}
