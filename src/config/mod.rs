use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CLOSING_TOLERANCE_M, DEFAULT_DOUBLE_CLICK_WINDOW_MS, DEFAULT_MAP_CENTER,
    DEFAULT_MAP_ZOOM, DOUBLE_CLICK_WINDOW_RANGE_MS,
};
use crate::creation::CreationSettings;
use crate::geo::Point;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Polygon closing tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// A quick click this close (meters) to the first vertex closes the polygon
    pub closing_tolerance_m: f64,
    /// Double-click window in milliseconds
    pub double_click_window_ms: u64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            closing_tolerance_m: DEFAULT_CLOSING_TOLERANCE_M,
            double_click_window_ms: DEFAULT_DOUBLE_CLICK_WINDOW_MS,
        }
    }
}

impl DrawingConfig {
    /// Hand-edited files may carry values the settings bar would never produce
    pub fn to_settings(&self) -> CreationSettings {
        let window_ms = self.double_click_window_ms.clamp(
            *DOUBLE_CLICK_WINDOW_RANGE_MS.start(),
            *DOUBLE_CLICK_WINDOW_RANGE_MS.end(),
        );
        CreationSettings {
            closing_tolerance_m: self.closing_tolerance_m.max(0.0),
            debounce_window: Duration::from_millis(window_ms),
        }
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    pub center: Point,
    /// Slippy-map zoom level
    pub zoom: u8,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: Point::new(DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1),
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    #[serde(default)]
    pub drawing: DrawingConfig,

    #[serde(default)]
    pub map: MapViewConfig,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults
fn load_config(path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mapshapes-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.drawing.closing_tolerance_m, DEFAULT_CLOSING_TOLERANCE_M);
        assert_eq!(data.drawing.double_click_window_ms, DEFAULT_DOUBLE_CLICK_WINDOW_MS);
        assert_eq!(data.map.zoom, DEFAULT_MAP_ZOOM);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "drawing": { "closing_tolerance_m": 35.0 } }"#;
        let data: AppConfigData = serde_json::from_str(json).unwrap();

        assert_eq!(data.drawing.closing_tolerance_m, 35.0);
        assert_eq!(data.drawing.double_click_window_ms, DEFAULT_DOUBLE_CLICK_WINDOW_MS);
        assert_eq!(data.map, MapViewConfig::default());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            drawing: DrawingConfig {
                closing_tolerance_m: 12.5,
                double_click_window_ms: 450,
            },
            map: MapViewConfig {
                center: Point::new(40.7, -74.0),
                zoom: 10,
            },
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_drawing_config_to_settings() {
        let drawing = DrawingConfig {
            closing_tolerance_m: -3.0,
            double_click_window_ms: 250,
        };
        let settings = drawing.to_settings();
        assert_eq!(settings.closing_tolerance_m, 0.0);
        assert_eq!(settings.debounce_window, Duration::from_millis(250));
    }

    #[test]
    fn test_double_click_window_is_clamped() {
        let zero = DrawingConfig {
            double_click_window_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero.to_settings().debounce_window, Duration::from_millis(100));

        let huge = DrawingConfig {
            double_click_window_ms: 60_000,
            ..Default::default()
        };
        assert_eq!(huge.to_settings().debounce_window, Duration::from_millis(1000));
    }

    #[test]
    fn test_zero_window_from_file_still_allows_closing() {
        let json = r#"{ "drawing": { "double_click_window_ms": 0 } }"#;
        let data: AppConfigData = serde_json::from_str(json).unwrap();
        let settings = data.drawing.to_settings();
        assert!(settings.debounce_window > Duration::ZERO);
    }

    #[test]
    fn test_load_missing_file_uses_defaults_without_notice() {
        let result = load_config(&temp_config_path("missing"));
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_load_corrupt_file_reports_reset() {
        let path = temp_config_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(result.data, AppConfigData::default());
        let reason = result.reset_reason.unwrap();
        assert!(reason.starts_with("Configuration file was corrupted"));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut config = AppConfig {
            data: AppConfigData::default(),
            config_path: path.clone(),
            dirty: true,
        };
        config.data.drawing.closing_tolerance_m = 42.0;

        save_config(&config);
        let result = load_config(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(result.data.drawing.closing_tolerance_m, 42.0);
        assert!(result.reset_reason.is_none());
    }
}
