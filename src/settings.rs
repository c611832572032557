//! Sandbox configuration
//!
//! Entity layout, speeds, colors and log level. Read-only input: on the web it
//! comes from an inline `<script type="application/json" id="sandbox-config">`,
//! natively from an optional JSON file. Missing fields take the classic defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::sim::{Circle, Obstacle, Square};

/// Extent used when there is no real canvas (headless runs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

/// Everything configurable about a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub square: Square,
    pub circle: Circle,
    pub obstacle: Obstacle,
    pub surface: SurfaceConfig,
    /// "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            square: Square::default(),
            circle: Circle::default(),
            obstacle: Obstacle::default(),
            surface: SurfaceConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SandboxConfig {
    /// DOM id of the inline JSON config
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "sandbox-config";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid sandbox config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Configured log level (Info if unparseable)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => {
                log::info!("Loaded sandbox config from page");
                Self::from_json_or_default(&json)
            }
            None => {
                log::info!("Using default sandbox config");
                Self::default()
            }
        }
    }

    /// Load config from a JSON file, if a path is given (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default sandbox config");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded sandbox config from {}", path.display());
                Self::from_json_or_default(&json)
            }
            Err(e) => {
                log::warn!("Cannot read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SandboxConfig::from_json("{}").unwrap();
        assert_eq!(config, SandboxConfig::default());
    }

    #[test]
    fn test_partial_entity_override() {
        let config = SandboxConfig::from_json(
            r#"{ "square": { "speed": 5.0, "color": "purple" }, "surface": { "width": 800.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.square.speed, 5.0);
        assert_eq!(config.square.color, "purple");
        // Untouched fields keep defaults
        assert_eq!(config.square.pos, Vec2::new(SQUARE_X, SQUARE_Y));
        assert_eq!(config.surface.width, 800.0);
        assert_eq!(config.surface.height, SURFACE_HEIGHT);
        assert_eq!(config.circle, Circle::default());
    }

    #[test]
    fn test_positions_as_arrays() {
        let config =
            SandboxConfig::from_json(r#"{ "obstacle": { "pos": [10.0, 20.0], "size": [5.0, 6.0] } }"#).unwrap();
        assert_eq!(config.obstacle.pos, Vec2::new(10.0, 20.0));
        assert_eq!(config.obstacle.size, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(SandboxConfig::from_json("not json").is_err());
        assert_eq!(SandboxConfig::from_json_or_default("not json"), SandboxConfig::default());
    }

    #[test]
    fn test_log_level() {
        let mut config = SandboxConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_defaults() {
        let config = SandboxConfig::load(Some(std::path::Path::new("/nonexistent/sandbox.json")));
        assert_eq!(config, SandboxConfig::default());
        assert_eq!(SandboxConfig::load(None), SandboxConfig::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod capture {
        use std::sync::Mutex;

        pub static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

        pub struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata) -> bool {
                true
            }

            fn log(&self, record: &log::Record) {
                if let Ok(mut lines) = LINES.lock() {
                    lines.push(format!("{} {}", record.level(), record.args()));
                }
            }

            fn flush(&self) {}
        }

        pub static LOGGER: Capture = Capture;

        pub fn install() {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Info);
        }

        pub fn contains(needle: &str) -> bool {
            LINES.lock().map(|l| l.iter().any(|line| line.contains(needle))).unwrap_or(false)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_reports_bad_file_through_logger() {
        capture::install();

        let path = std::env::temp_dir().join(format!("sandbox-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let config = SandboxConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, SandboxConfig::default());
        assert!(capture::contains(&format!("INFO Loaded sandbox config from {}", path.display())));
        assert!(capture::contains("WARN Invalid sandbox config"));

        let missing = std::env::temp_dir().join(format!("sandbox-missing-{}.json", std::process::id()));
        SandboxConfig::load(Some(&missing));
        assert!(capture::contains(&format!("WARN Cannot read {}", missing.display())));
    }
}
