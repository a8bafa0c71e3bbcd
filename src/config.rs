//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperview_core::{ThemePreference, VisualizerSettings};
use hyperview_math::Projection;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Visualizer configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        let config: Self = figment.extract()?;
        config.view.validate()?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: u32,
    /// Initial inner height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    ///
    /// Momentum decays once per presented frame, so turning this off makes
    /// coasting stop sooner on fast GPUs.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hypercube".to_string(),
            width: 1200,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Visualizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Logical canvas width
    pub canvas_width: f64,
    /// Logical canvas height
    pub canvas_height: f64,
    /// Radians of rotation per canvas unit of drag
    pub sensitivity: f64,
    /// Share of (dx + dy) applied to the ZW plane
    pub zw_blend: f64,
    /// Fraction of momentum kept each frame
    pub friction: f64,
    /// Camera distance along W (4D → 3D)
    pub w_distance: f64,
    /// Camera distance along Z (3D → 2D)
    pub z_distance: f64,
    /// Canvas units per projected unit
    pub scale: f64,
    /// Edge stroke width
    pub edge_width: f64,
    /// Vertex dot radius
    pub vertex_radius: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let settings = VisualizerSettings::default();
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            sensitivity: settings.sensitivity,
            zw_blend: settings.zw_blend,
            friction: settings.friction,
            w_distance: settings.projection.w_distance,
            z_distance: settings.projection.z_distance,
            scale: settings.projection.scale,
            edge_width: settings.edge_width,
            vertex_radius: settings.vertex_radius,
        }
    }
}

impl ViewConfig {
    /// Convert to the visualizer's settings
    pub fn to_visualizer_settings(&self) -> VisualizerSettings {
        VisualizerSettings {
            sensitivity: self.sensitivity,
            zw_blend: self.zw_blend,
            friction: self.friction,
            projection: Projection {
                w_distance: self.w_distance,
                z_distance: self.z_distance,
                scale: self.scale,
            },
            edge_width: self.edge_width,
            vertex_radius: self.vertex_radius,
        }
    }

    /// Logical canvas (width, height)
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Check the values keep the view drawable and momentum decaying
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("view.canvas_width", self.canvas_width),
            ("view.canvas_height", self.canvas_height),
            ("view.scale", self.scale),
            ("view.w_distance", self.w_distance),
            ("view.z_distance", self.z_distance),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(format!("{} must be positive, got {}", key, value)));
            }
        }

        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::invalid(format!(
                "view.friction must be in [0, 1), got {}",
                self.friction
            )));
        }

        let finite = [
            ("view.sensitivity", self.sensitivity),
            ("view.zw_blend", self.zw_blend),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(format!("{} must be finite, got {}", key, value)));
            }
        }

        let non_negative = [
            ("view.edge_width", self.edge_width),
            ("view.vertex_radius", self.vertex_radius),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(format!("{} must not be negative, got {}", key, value)));
            }
        }

        Ok(())
    }
}

/// Theme configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Follow the system theme or force light/dark
    pub preference: ThemePreference,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show the W-plane angles in the window title
    pub show_angles: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_angles: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// A value that parsed but is out of range
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.view.canvas_size(), (1200.0, 800.0));
        assert_eq!(config.view.friction, 0.995);
        assert_eq!(config.theme.preference, ThemePreference::System);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("sensitivity"));
        assert!(toml.contains("preference = \"system\""));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [view]
            friction = 0.9

            [theme]
            preference = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.view.friction, 0.9);
        assert_eq!(config.view.sensitivity, 0.002);
        assert_eq!(config.theme.preference, ThemePreference::Dark);
        assert_eq!(config.window.title, "Hypercube");
    }

    #[test]
    fn test_to_visualizer_settings() {
        let default_view = ViewConfig::default();
        assert_eq!(default_view.to_visualizer_settings(), VisualizerSettings::default());

        let view = ViewConfig { scale: 100.0, edge_width: 1.0, ..ViewConfig::default() };
        let settings = view.to_visualizer_settings();
        assert_eq!(settings.projection.scale, 100.0);
        assert_eq!(settings.edge_width, 1.0);
        assert_eq!(settings.projection.w_distance, 2.0);
    }

    #[test]
    fn test_default_view_is_valid() {
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn test_friction_must_decay() {
        for friction in [1.0, 1.5, -0.1, f64::NAN] {
            let view = ViewConfig { friction, ..ViewConfig::default() };
            assert!(view.validate().is_err(), "friction {} accepted", friction);
        }
        let stopped = ViewConfig { friction: 0.0, ..ViewConfig::default() };
        assert!(stopped.validate().is_ok());
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        let cases = [
            ViewConfig { canvas_width: 0.0, ..ViewConfig::default() },
            ViewConfig { canvas_height: -800.0, ..ViewConfig::default() },
            ViewConfig { scale: 0.0, ..ViewConfig::default() },
            ViewConfig { w_distance: -2.0, ..ViewConfig::default() },
            ViewConfig { z_distance: f64::INFINITY, ..ViewConfig::default() },
        ];
        for view in cases {
            assert!(view.validate().is_err(), "{:?} accepted", view);
        }
    }

    #[test]
    fn test_non_finite_drag_factors_rejected() {
        let view = ViewConfig { sensitivity: f64::NAN, ..ViewConfig::default() };
        let err = view.validate().unwrap_err();
        assert!(err.to_string().contains("view.sensitivity"));

        let view = ViewConfig { zw_blend: f64::INFINITY, ..ViewConfig::default() };
        assert!(view.validate().is_err());
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let result: Result<AppConfig, _> = toml::from_str("[theme]\npreference = \"sepia\"\n");
        assert!(result.is_err());
    }
}
