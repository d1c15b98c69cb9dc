//! Game settings and preferences
//!
//! Persisted as JSON under the user's config directory, separately from
//! game saves. Missing or corrupt files fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLS, GRID_ROWS};

/// Grid size bounds; columns are capped so the grid fits the 800px playfield
pub const MAX_BRICK_ROWS: u32 = 8;
pub const MAX_BRICK_COLS: u32 = 10;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Brick grid rows (1..=MAX_BRICK_ROWS)
    pub brick_rows: u32,
    /// Brick grid columns (1..=MAX_BRICK_COLS)
    pub brick_cols: u32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Show the control hints line
    pub show_instructions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brick_rows: GRID_ROWS,
            brick_cols: GRID_COLS,
            show_fps: false,
            show_instructions: true,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    /// Clamp loaded values into supported ranges
    pub fn sanitize(&mut self) {
        self.brick_rows = self.brick_rows.clamp(1, MAX_BRICK_ROWS);
        self.brick_cols = self.brick_cols.clamp(1, MAX_BRICK_COLS);
    }

    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("brick-pong");
        path.push(Self::FILE_NAME);
        path
    }

    /// Load settings from the user config dir, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Save settings to the user config dir
    pub fn save(&self) {
        self.save_to(&Self::config_path());
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(mut settings) => {
                    settings.sanitize();
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {err}"),
        }
    }
}
