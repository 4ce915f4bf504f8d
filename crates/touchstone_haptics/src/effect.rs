//! Haptic effect descriptors
//!
//! An effect describes how a scene object should feel when the device tool
//! touches it. Effects are pure configuration here; the force computation
//! happens in the device servo loop outside this repository.

use serde::{Deserialize, Serialize};

/// A haptic effect attached to a scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Stiff contact with the object surface
    ///
    /// Renders the contact stiffness stored in the object's material.
    Surface,
    /// Drag proportional to tool velocity while inside the object
    Viscosity {
        /// Damping gain in N*s/m
        gain: f32,
    },
    /// Periodic vibration while in contact
    Vibration {
        /// Oscillation frequency in Hz
        frequency_hz: f32,
        /// Peak force amplitude in newtons
        amplitude: f32,
    },
}

impl Effect {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Surface => "surface",
            Effect::Viscosity { .. } => "viscosity",
            Effect::Vibration { .. } => "vibration",
        }
    }

    /// Whether this effect renders the material's contact stiffness
    pub fn uses_material_stiffness(&self) -> bool {
        matches!(self, Effect::Surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_names() {
        assert_eq!(Effect::Surface.name(), "surface");
        assert_eq!(Effect::Viscosity { gain: 2.0 }.name(), "viscosity");
        assert_eq!(
            Effect::Vibration {
                frequency_hz: 200.0,
                amplitude: 1.5
            }
            .name(),
            "vibration"
        );
    }

    #[test]
    fn test_surface_uses_material_stiffness() {
        assert!(Effect::Surface.uses_material_stiffness());
        assert!(!Effect::Viscosity { gain: 1.0 }.uses_material_stiffness());
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::Vibration {
            frequency_hz: 150.0,
            amplitude: 0.8,
        };
        let serialized = toml::to_string(&effect).unwrap();
        let deserialized: Effect = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, effect);
    }

    #[test]
    fn test_surface_serialization() {
        let serialized = toml::to_string(&Effect::Surface).unwrap();
        assert!(serialized.contains("Surface"));
        let deserialized: Effect = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Effect::Surface);
    }
}
