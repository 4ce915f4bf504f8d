//! Look-at camera with clipping planes and stereo settings

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Display stereo configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StereoMode {
    /// Plain mono rendering
    #[default]
    Disabled,
    /// Quad-buffered active stereo (shutter glasses)
    Active,
    /// Side-by-side passive stereo
    PassiveLeftRight,
    /// Over-under passive stereo
    PassiveTopBottom,
}

/// A look-at camera
///
/// The camera's eye position is the position of the scene node that carries
/// it; target and up complete the view. Stereo parameters only take effect
/// when `stereo_mode` is not [`StereoMode::Disabled`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    near: f32,
    far: f32,
    /// Stereo display mode
    pub stereo_mode: StereoMode,
    eye_separation: f32,
    focal_length: f32,
    /// Flip the rendered image vertically (mirrored displays)
    pub mirror_vertical: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera at the default orientation (looking at the origin, Z up)
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            up: Vec3::Z,
            near: 0.1,
            far: 100.0,
            stereo_mode: StereoMode::Disabled,
            eye_separation: 0.01,
            focal_length: 0.5,
            mirror_vertical: false,
        }
    }

    /// Point the camera: target point and up direction
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up.normalize_or_zero();
        if self.up == Vec3::ZERO {
            log::warn!("Zero-length up vector, falling back to +Z");
            self.up = Vec3::Z;
        }
    }

    /// Set the near/far clipping planes
    ///
    /// Rejected (returns false, planes unchanged) unless 0 < near < far.
    pub fn set_clipping_planes(&mut self, near: f32, far: f32) -> bool {
        if near <= 0.0 || far <= near {
            log::warn!("Rejecting clipping planes near={} far={}", near, far);
            return false;
        }
        self.near = near;
        self.far = far;
        true
    }

    /// Near clipping plane distance
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Set the inter-eye distance for stereo rendering, clamped non-negative
    pub fn set_stereo_eye_separation(&mut self, separation: f32) {
        self.eye_separation = separation.max(0.0);
    }

    /// Inter-eye distance for stereo rendering
    pub fn stereo_eye_separation(&self) -> f32 {
        self.eye_separation
    }

    /// Set the stereo focal length
    ///
    /// Rejected (returns false) unless strictly positive.
    pub fn set_stereo_focal_length(&mut self, focal_length: f32) -> bool {
        if focal_length <= 0.0 {
            log::warn!("Rejecting stereo focal length {}", focal_length);
            return false;
        }
        self.focal_length = focal_length;
        true
    }

    /// Stereo focal length
    pub fn stereo_focal_length(&self) -> f32 {
        self.focal_length
    }
}
