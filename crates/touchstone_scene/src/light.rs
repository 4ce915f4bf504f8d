//! Spot light

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Shadow map resolution tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowQuality {
    #[default]
    Low,
    Medium,
    High,
}

impl ShadowQuality {
    /// Shadow map side length in texels
    pub fn map_resolution(&self) -> u32 {
        match self {
            ShadowQuality::Low => 512,
            ShadowQuality::Medium => 1024,
            ShadowQuality::High => 2048,
        }
    }
}

/// A spot light
///
/// Position comes from the scene node carrying the light; when the node is
/// parented to the camera the light follows the viewpoint, headlamp style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// Whether the light contributes to the scene
    pub enabled: bool,
    direction: Vec3,
    cutoff_angle_deg: f32,
    /// Whether this light casts shadows
    pub shadow_enabled: bool,
    /// Shadow map resolution tier
    pub shadow_quality: ShadowQuality,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotLight {
    /// Create an enabled spot light pointing down the negative Z axis
    pub fn new() -> Self {
        Self {
            enabled: true,
            direction: Vec3::NEG_Z,
            cutoff_angle_deg: 45.0,
            shadow_enabled: false,
            shadow_quality: ShadowQuality::Low,
        }
    }

    /// Aim the light; the direction does not have to be normalized
    ///
    /// A zero-length direction is ignored.
    pub fn set_direction(&mut self, direction: Vec3) {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            log::warn!("Ignoring zero-length spot light direction");
            return;
        }
        self.direction = dir;
    }

    /// Normalized beam direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Set the beam half-angle in degrees, clamped to [0, 90]
    pub fn set_cutoff_angle_deg(&mut self, degrees: f32) {
        self.cutoff_angle_deg = degrees.clamp(0.0, 90.0);
    }

    /// Beam half-angle in degrees
    pub fn cutoff_angle_deg(&self) -> f32 {
        self.cutoff_angle_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light() {
        let light = SpotLight::new();
        assert!(light.enabled);
        assert!(!light.shadow_enabled);
        assert_eq!(light.shadow_quality, ShadowQuality::Low);
        assert_eq!(light.cutoff_angle_deg(), 45.0);
    }

    #[test]
    fn test_set_direction_normalizes() {
        let mut light = SpotLight::new();
        light.set_direction(Vec3::new(-3.0, -0.5, 0.0));
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
        assert!(light.direction().x < 0.0);
    }

    #[test]
    fn test_zero_direction_ignored() {
        let mut light = SpotLight::new();
        let before = light.direction();
        light.set_direction(Vec3::ZERO);
        assert_eq!(light.direction(), before);
    }

    #[test]
    fn test_cutoff_angle_clamped() {
        let mut light = SpotLight::new();
        light.set_cutoff_angle_deg(20.0);
        assert_eq!(light.cutoff_angle_deg(), 20.0);
        light.set_cutoff_angle_deg(120.0);
        assert_eq!(light.cutoff_angle_deg(), 90.0);
        light.set_cutoff_angle_deg(-10.0);
        assert_eq!(light.cutoff_angle_deg(), 0.0);
    }

    #[test]
    fn test_shadow_quality_resolutions() {
        assert_eq!(ShadowQuality::Low.map_resolution(), 512);
        assert_eq!(ShadowQuality::Medium.map_resolution(), 1024);
        assert_eq!(ShadowQuality::High.map_resolution(), 2048);
    }
}
