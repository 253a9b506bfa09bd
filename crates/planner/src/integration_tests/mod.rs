//! Integration tests for the planner using the `TestPlanner` harness.
//!
//! These run the full plugin headlessly and drive it only through events,
//! the same way the rendering and UI crates do.

mod selection_gizmo_tests;
