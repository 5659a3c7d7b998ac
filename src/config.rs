//! Startup configuration
//!
//! Read once before the first frame and validated there. Persisted as JSON in
//! LocalStorage on the web; native builds always start from defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::FanConfig;

/// Ball movement rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// World units per tick
    pub move_speed: f32,
    /// Degrees per tick
    pub turn_speed_deg: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed_deg: TURN_SPEED_DEG,
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Border wall thickness
    pub wall_thickness: f32,

    // === Rays ===
    pub fan: FanConfig,
    /// Corrected distance at which a column shrinks to nothing
    pub max_render_distance: f32,

    // === Input ===
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            fan: FanConfig::default(),
            max_render_distance: MAX_RENDER_DISTANCE,
            motion: MotionConfig::default(),
        }
    }
}

fn positive(value: f32, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be finite and > 0"))
    }
}

impl DemoConfig {
    /// Reject values that would break projection or scene construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive(self.screen_width, "screen_width")?;
        positive(self.screen_height, "screen_height")?;
        positive(self.wall_thickness, "wall_thickness")?;
        // Column heights divide by this every frame
        positive(self.max_render_distance, "max_render_distance")?;
        if !self.motion.move_speed.is_finite() || !self.motion.turn_speed_deg.is_finite() {
            return Err(ConfigError::invalid("motion", "speeds must be finite"));
        }
        self.fan.validate()
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "raycast_demo_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native builds have no storage; always the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_render_distance, config.screen_width / 2.0);
    }

    #[test]
    fn test_rejects_zero_render_distance() {
        let config = DemoConfig {
            max_render_distance: 0.0,
            ..DemoConfig::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "max_render_distance"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_fan() {
        let mut config = DemoConfig::default();
        config.fan.step_length = -2.0;
        assert!(config.validate().is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(DemoConfig::load(), DemoConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = DemoConfig::default();
        config.fan.ray_count = 120;
        let json = config.to_json().unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_missing_motion_uses_default() {
        let json = r#"{
            "screen_width": 800.0,
            "screen_height": 600.0,
            "wall_thickness": 10.0,
            "fan": { "spread_deg": 20.0, "ray_count": 40, "step_length": 1.0, "max_probes": 300 },
            "max_render_distance": 400.0
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.motion, MotionConfig::default());
        assert_eq!(config.fan.ray_count, 40);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            DemoConfig::from_json("not json"),
            Err(ConfigError::Serde(_))
        ));

        let mut config = DemoConfig::default();
        config.screen_height = 0.0;
        let json = serde_json::to_string(&config).unwrap();
        assert!(matches!(
            DemoConfig::from_json(&json),
            Err(ConfigError::InvalidValue { field: "screen_height", .. })
        ));
    }
}
