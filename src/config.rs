use serde::{Deserialize, Serialize};

/// Session construction parameters. Every field has a documented default;
/// a config.toml in the user's config directory can override any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window (and camera view) size in pixels.
    pub window_width: i32,
    pub window_height: i32,
    /// Play area, in 100 px backdrop tiles.
    pub world_columns: u32,
    pub world_rows: u32,
    /// Berries scattered at session start.
    pub berry_count: usize,
    /// Bear spawn point in world pixels.
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Simulation cadence; None runs uncapped.
    pub fps_cap: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 360,
            world_columns: 10,
            world_rows: 10,
            berry_count: 100,
            spawn_x: 320.0,
            spawn_y: 180.0,
            fps_cap: Some(30),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|p| p.join("berry-picker").join("config.toml"))
}

impl GameConfig {
    /// Load the config file, falling back to defaults when it is missing or
    /// malformed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
