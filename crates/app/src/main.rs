use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use planner::settings::{PlannerSettings, SETTINGS_ENV_VAR};
use rendering::camera::OrbitCamera;

#[cfg(not(target_arch = "wasm32"))]
mod agent_mode;

/// Command-line options. `--config <path>` wins over the environment.
struct CliArgs {
    config: Option<PathBuf>,
    agent: bool,
}

fn parse_args() -> CliArgs {
    let mut args = std::env::args().skip(1);
    let mut config = std::env::var_os(SETTINGS_ENV_VAR).map(PathBuf::from);
    let mut agent = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--agent" => agent = true,
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => eprintln!("--config expects a path, ignoring"),
            },
            other => eprintln!("Unknown argument {other}, ignoring"),
        }
    }
    CliArgs { config, agent }
}

fn main() {
    let args = parse_args();
    let settings = PlannerSettings::load_or_default(args.config.as_deref());

    if args.agent {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Err(e) = agent_mode::run_agent_mode(settings) {
                eprintln!("agent mode failed: {e}");
                std::process::exit(1);
            }
            return;
        }
        #[cfg(target_arch = "wasm32")]
        eprintln!("--agent is not available in the browser build");
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Room Planner".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(settings)
    .add_plugins((
        planner::PlannerPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: takes preset screenshots of the empty room and exits
    if std::env::var("ROOM_PLANNER_SCREENSHOTS").is_ok() {
        let center = Vec3::ZERO;
        app.insert_resource(ScreenshotQueue {
            frame: 0,
            current: 0,
            presets: vec![
                ShotPreset { name: "01_overview", focus: center, yaw: 0.6, pitch: 45f32.to_radians(), distance: 12.0 },
                ShotPreset { name: "02_top_down", focus: center, yaw: 0.0, pitch: 85f32.to_radians(), distance: 11.0 },
                ShotPreset { name: "03_low_corner", focus: center, yaw: -0.7, pitch: 20f32.to_radians(), distance: 8.0 },
            ],
        });
        app.add_systems(Update, drive_screenshots);
    }

    app.run();
}

#[derive(Resource)]
struct ScreenshotQueue {
    frame: u32,
    current: usize,
    presets: Vec<ShotPreset>,
}

struct ShotPreset {
    name: &'static str,
    focus: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

/// Frames to wait for models to load before the first shot.
const WARMUP_FRAMES: u32 = 120;
const FRAMES_PER_SHOT: u32 = 12;

fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    mut orbit: ResMut<OrbitCamera>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;
    if queue.frame < WARMUP_FRAMES {
        return;
    }

    let idx = queue.current;
    if idx >= queue.presets.len() {
        // Give the last save a few frames before exiting
        if queue.frame > WARMUP_FRAMES + queue.presets.len() as u32 * FRAMES_PER_SHOT + 20 {
            exit.send(AppExit::Success);
        }
        return;
    }

    let phase = (queue.frame - WARMUP_FRAMES) % FRAMES_PER_SHOT;

    if phase == 0 {
        let p = &queue.presets[idx];
        orbit.focus = p.focus;
        orbit.yaw = p.yaw;
        orbit.pitch = p.pitch;
        orbit.distance = p.distance;
    } else if phase == 6 {
        let name = queue.presets[idx].name;
        let path = format!("/tmp/room_planner_{}.png", name);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        queue.current += 1;
    }
}
