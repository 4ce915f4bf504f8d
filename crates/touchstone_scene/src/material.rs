//! Surface material: visual colors plus haptic contact stiffness

use serde::{Deserialize, Serialize};

/// Visual and haptic surface properties of a scene object
///
/// The color triplet follows the classic ambient/diffuse/specular model.
/// `stiffness` is the contact stiffness in N/m consumed by a surface haptic
/// effect; it must be at or below what the device can render through the
/// active workspace mapping or the device goes unstable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient color as RGBA (each component 0.0-1.0)
    pub ambient: [f32; 4],
    /// Diffuse color as RGBA
    pub diffuse: [f32; 4],
    /// Specular color as RGBA
    pub specular: [f32; 4],
    /// Haptic contact stiffness in N/m (0.0 = not touchable)
    pub stiffness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.3, 0.3, 0.3, 1.0],
            diffuse: [0.7, 0.7, 0.7, 1.0],
            specular: [0.4, 0.4, 0.4, 1.0],
            stiffness: 0.0,
        }
    }
}

impl Material {
    /// Bright white with full specular highlight, the demo object's finish
    pub const POLISHED_WHITE: Self = Self {
        ambient: [0.9, 0.9, 0.9, 1.0],
        diffuse: [0.9, 0.9, 0.9, 1.0],
        specular: [1.0, 1.0, 1.0, 1.0],
        stiffness: 0.0,
    };

    /// Dull mid-gray with almost no highlight
    pub const MATTE_GRAY: Self = Self {
        ambient: [0.2, 0.2, 0.2, 1.0],
        diffuse: [0.5, 0.5, 0.5, 1.0],
        specular: [0.05, 0.05, 0.05, 1.0],
        stiffness: 0.0,
    };

    /// Near-black with a soft sheen
    pub const RUBBER_BLACK: Self = Self {
        ambient: [0.02, 0.02, 0.02, 1.0],
        diffuse: [0.1, 0.1, 0.1, 1.0],
        specular: [0.3, 0.3, 0.3, 1.0],
        stiffness: 0.0,
    };

    /// Create a material from explicit color components
    pub fn new(ambient: [f32; 4], diffuse: [f32; 4], specular: [f32; 4]) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            stiffness: 0.0,
        }
    }

    /// Create an opaque material from a single base color
    ///
    /// Ambient is a dimmed copy of the base color; specular is a neutral
    /// low-intensity highlight.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            ambient: [r * 0.4, g * 0.4, b * 0.4, 1.0],
            diffuse: [r, g, b, 1.0],
            specular: [0.2, 0.2, 0.2, 1.0],
            stiffness: 0.0,
        }
    }

    /// Set the contact stiffness, clamped non-negative
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness.max(0.0);
        self
    }

    /// Whether a surface effect on this material produces any force
    pub fn is_touchable(&self) -> bool {
        self.stiffness > 0.0
    }
}
