//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--agent` CLI flag is passed, the planner skips all rendering and
//! UI plugins and enters this loop instead of the normal Bevy `app.run()`.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator: either
//! one of the control commands below or any [`PlannerCommand`]. Each line of
//! stdout is a JSON object with a `"type"` field.
//!
//! | Request                          | Response                     |
//! |----------------------------------|------------------------------|
//! | `{"cmd":"observe"}`              | `snapshot` (or `closed`)     |
//! | `{"cmd":"step","ticks":n}`       | `snapshot` after `n` frames  |
//! | `{"cmd":"open_view"}`            | `snapshot` of the fresh view |
//! | `{"cmd":"close_view"}`           | `closed`                     |
//! | `{"cmd":"quit"}`                 | `goodbye`                    |
//! | any planner command              | `snapshot` after one frame   |
//!
//! Malformed lines and planner commands sent while the view is closed
//! produce an `error` response and leave the state untouched.

use std::fmt;
use std::io::{BufRead, Write};
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use serde::{Deserialize, Serialize};

use planner::events::PlannerCommand;
use planner::settings::PlannerSettings;
use planner::snapshot::PlannerSnapshot;
use planner::view::PlannerView;

pub const PROTOCOL_VERSION: u32 = 1;

/// Cap on a single `step` request.
const MAX_STEP_TICKS: u32 = 10_000;

/// Simulated wall-clock time per frame. Longer than the fixed timestep so
/// event buffers rotate every frame.
const FRAME_STEP: Duration = Duration::from_millis(20);

// ---------------------------------------------------------------------------
// AgentError
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum AgentError {
    /// Reading stdin or writing stdout failed.
    Io(std::io::Error),
    /// A response could not be encoded.
    Encode(serde_json::Error),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Io(e) => write!(f, "I/O error: {e}"),
            AgentError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for AgentError {}

impl From<std::io::Error> for AgentError {
    fn from(e: std::io::Error) -> Self {
        AgentError::Io(e)
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(e: serde_json::Error) -> Self {
        AgentError::Encode(e)
    }
}

// ---------------------------------------------------------------------------
// Protocol types
// ---------------------------------------------------------------------------

fn one_tick() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum ControlCommand {
    Observe,
    Step {
        #[serde(default = "one_tick")]
        ticks: u32,
    },
    OpenView,
    CloseView,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
enum AgentRequest {
    Control(ControlCommand),
    Planner(PlannerCommand),
}

/// Control commands take precedence; anything else must be a planner
/// command, whose parse error is the one reported.
fn parse_request(line: &str) -> Result<AgentRequest, serde_json::Error> {
    if let Ok(control) = serde_json::from_str::<ControlCommand>(line) {
        return Ok(AgentRequest::Control(control));
    }
    serde_json::from_str::<PlannerCommand>(line).map(AgentRequest::Planner)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AgentResponse {
    Ready { protocol_version: u32 },
    Snapshot(PlannerSnapshot),
    Closed,
    Error { message: String },
    Goodbye,
}

// ---------------------------------------------------------------------------
// App + command dispatch
// ---------------------------------------------------------------------------

/// Minimal Bevy app with the planner core only, no rendering or UI.
fn build_agent_app(settings: PlannerSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME_STEP))
        .init_resource::<ButtonInput<MouseButton>>()
        .insert_resource(settings)
        .add_plugins(planner::PlannerPlugin);

    // Initial update so the view mounts and the session exists.
    app.update();
    app
}

fn observe(app: &App) -> AgentResponse {
    match PlannerSnapshot::from_world(app.world()) {
        Some(snapshot) => AgentResponse::Snapshot(snapshot),
        None => AgentResponse::Closed,
    }
}

fn set_view(app: &mut App, view: PlannerView) -> AgentResponse {
    app.world_mut()
        .resource_mut::<NextState<PlannerView>>()
        .set(view);
    app.update();
    observe(app)
}

fn process_request(request: AgentRequest, app: &mut App) -> AgentResponse {
    match request {
        AgentRequest::Control(ControlCommand::Observe) => observe(app),
        AgentRequest::Control(ControlCommand::Step { ticks }) => {
            for _ in 0..ticks.min(MAX_STEP_TICKS) {
                app.update();
            }
            observe(app)
        }
        AgentRequest::Control(ControlCommand::OpenView) => set_view(app, PlannerView::Open),
        AgentRequest::Control(ControlCommand::CloseView) => set_view(app, PlannerView::Closed),
        AgentRequest::Control(ControlCommand::Quit) => AgentResponse::Goodbye,
        AgentRequest::Planner(command) => {
            if PlannerSnapshot::from_world(app.world()).is_none() {
                return AgentResponse::Error {
                    message: "Planner view is closed".to_string(),
                };
            }
            app.world_mut().send_event(command);
            app.update();
            observe(app)
        }
    }
}

fn handle_line(line: &str, app: &mut App) -> AgentResponse {
    match parse_request(line) {
        Ok(request) => process_request(request, app),
        Err(e) => AgentResponse::Error {
            message: format!("Parse error: {e}"),
        },
    }
}

fn write_response(out: &mut impl Write, response: &AgentResponse) -> Result<(), AgentError> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn run_agent_mode(settings: PlannerSettings) -> Result<(), AgentError> {
    let mut app = build_agent_app(settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // Send the "ready" message so the external program knows we are live.
    write_response(
        &mut stdout,
        &AgentResponse::Ready {
            protocol_version: PROTOCOL_VERSION,
        },
    )?;

    // Log to stderr so it does not interfere with the JSON protocol on stdout.
    eprintln!("room planner agent mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&line, &mut app);
        write_response(&mut stdout, &response)?;

        if response == AgentResponse::Goodbye {
            break;
        }
    }

    eprintln!("room planner agent mode shutting down");
    Ok(())
}
