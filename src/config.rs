//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TOUCH_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use touchstone_scene::{ShadowQuality, StereoMode};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Display/stereo configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Lighting configuration
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Haptic device configuration
    #[serde(default)]
    pub haptics: HapticsConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            display: DisplayConfig::default(),
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            haptics: HapticsConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TOUCH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TOUCH_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("TOUCH_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Fallback width in pixels (used when no monitor can be queried)
    pub width: u32,
    /// Fallback height in pixels (used when no monitor can be queried)
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync (swap interval 1)
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Touchstone".to_string(),
            width: 1024,
            height: 640,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Display/stereo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Stereo display mode
    pub stereo_mode: StereoMode,
    /// Flip the rendered image vertically (mirrored displays)
    pub mirrored: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            stereo_mode: StereoMode::Disabled,
            mirrored: false,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub eye: [f32; 3],
    /// Look-at target [x, y, z]
    pub target: [f32; 3],
    /// Up direction [x, y, z]
    pub up: [f32; 3],
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Stereo eye separation in meters
    pub eye_separation: f32,
    /// Stereo focal length in meters
    pub focal_length: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [3.0, 0.0, 0.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            near: 1.0,
            far: 10.0,
            eye_separation: 0.03,
            focal_length: 3.0,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Light position relative to the camera [x, y, z]
    pub position: [f32; 3],
    /// Beam direction [x, y, z]
    pub direction: [f32; 3],
    /// Beam half-angle in degrees
    pub cutoff_deg: f32,
    /// Whether the light casts shadows
    pub shadows: bool,
    /// Shadow map resolution tier
    pub shadow_quality: ShadowQuality,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.5, 0.0],
            direction: [-3.0, -0.5, 0.0],
            cutoff_deg: 20.0,
            shadows: true,
            shadow_quality: ShadowQuality::Low,
        }
    }
}

/// Haptic device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// Device preset name (falcon, omega3, delta3, touch)
    pub device: String,
    /// Virtual workspace radius in meters
    pub workspace_radius: f32,
    /// Fraction of the maximum renderable stiffness applied to the object
    pub stiffness_ratio: f32,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            device: "falcon".to_string(),
            workspace_radius: 1.0,
            stiffness_ratio: 1.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
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
        assert_eq!(config.camera.eye, [3.0, 0.0, 0.0]);
        assert_eq!(config.camera.near, 1.0);
        assert_eq!(config.lighting.cutoff_deg, 20.0);
        assert_eq!(config.haptics.device, "falcon");
        assert!(config.window.vsync);
    }

    #[test]
    fn test_default_background_is_black() {
        let config = AppConfig::default();
        assert_eq!(config.rendering.background_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("stereo_mode"));
        assert!(toml.contains("workspace_radius"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back.camera.eye, config.camera.eye);
        assert_eq!(back.haptics.stiffness_ratio, config.haptics.stiffness_ratio);
    }
}
