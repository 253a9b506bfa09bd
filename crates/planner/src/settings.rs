//! Planner settings loaded from an optional JSON file.
//!
//! Every field has a default, so a partial file (or no file at all) is
//! valid. Settings only seed a freshly mounted view; edits made in the
//! planner are never written back.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, DEFAULT_SNAP_QUANTUM,
};
use crate::furniture::FurnitureKind;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV_VAR: &str = "ROOM_PLANNER_CONFIG";

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON or has fields of the wrong type.
    Parse(serde_json::Error),
    /// The file parsed but holds values outside their valid range.
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "Parse error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Settings types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSettings {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            depth: DEFAULT_ROOM_DEPTH,
            height: DEFAULT_ROOM_HEIGHT,
        }
    }
}

/// Model-scale multiplier stamped on newly added items, per kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelScales {
    pub chair: f32,
    pub table: f32,
    pub bed: f32,
}

impl Default for ModelScales {
    fn default() -> Self {
        Self {
            chair: 1.0,
            table: 1.0,
            bed: 1.0,
        }
    }
}

impl ModelScales {
    pub fn for_kind(&self, kind: FurnitureKind) -> f32 {
        match kind {
            FurnitureKind::Chair => self.chair,
            FurnitureKind::Table => self.table,
            FurnitureKind::Bed => self.bed,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub room: RoomSettings,
    pub snap_quantum: f32,
    pub model_scales: ModelScales,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            room: RoomSettings::default(),
            snap_quantum: DEFAULT_SNAP_QUANTUM,
            model_scales: ModelScales::default(),
        }
    }
}

impl PlannerSettings {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: PlannerSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load from `path`, logging a warning and returning defaults on failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                info!("Loaded planner settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "Planner settings {}: {}, falling back to defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let dims = [
            ("room.width", self.room.width),
            ("room.depth", self.room.depth),
            ("room.height", self.room.height),
        ];
        for (name, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.snap_quantum.is_finite() && self.snap_quantum >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "snap_quantum must be zero or positive, got {}",
                self.snap_quantum
            )));
        }
        for kind in FurnitureKind::ALL {
            let scale = self.model_scales.for_kind(kind);
            if !(scale.is_finite() && scale > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "model_scales.{} must be a positive number, got {scale}",
                    kind.key()
                )));
            }
        }
        Ok(())
    }
}
