//! Haptic device capability records

use crate::HapticError;

/// Capability limits of a haptic device
///
/// These are the datasheet numbers a virtual scene has to respect: rendering
/// a stiffness above `max_linear_stiffness` makes the device buzz or go
/// unstable, and the workspace radius bounds how far the physical handle can
/// travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceCapabilities {
    /// Maximum continuous output force in newtons
    pub max_linear_force: f32,
    /// Maximum closed-loop stiffness in N/m
    pub max_linear_stiffness: f32,
    /// Maximum linear damping in N*s/m
    pub max_linear_damping: f32,
    /// Radius of the reachable workspace in meters
    pub workspace_radius: f32,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self::FALCON
    }
}

impl DeviceCapabilities {
    /// Novint Falcon: consumer 3-DoF device
    pub const FALCON: Self = Self {
        max_linear_force: 8.9,
        max_linear_stiffness: 3000.0,
        max_linear_damping: 20.0,
        workspace_radius: 0.04,
    };

    /// Force Dimension omega.3: desktop parallel device
    pub const OMEGA_3: Self = Self {
        max_linear_force: 12.0,
        max_linear_stiffness: 14500.0,
        max_linear_damping: 40.0,
        workspace_radius: 0.075,
    };

    /// Force Dimension delta.3: larger workspace, higher force
    pub const DELTA_3: Self = Self {
        max_linear_force: 20.0,
        max_linear_stiffness: 14500.0,
        max_linear_damping: 40.0,
        workspace_radius: 0.15,
    };

    /// 3D Systems Touch (Phantom Omni): entry-level stylus device
    pub const TOUCH: Self = Self {
        max_linear_force: 3.3,
        max_linear_stiffness: 1700.0,
        max_linear_damping: 5.0,
        workspace_radius: 0.055,
    };

    /// Create a capability record with custom limits
    ///
    /// Negative values are clamped to zero.
    pub fn new(
        max_linear_force: f32,
        max_linear_stiffness: f32,
        max_linear_damping: f32,
        workspace_radius: f32,
    ) -> Self {
        Self {
            max_linear_force: max_linear_force.max(0.0),
            max_linear_stiffness: max_linear_stiffness.max(0.0),
            max_linear_damping: max_linear_damping.max(0.0),
            workspace_radius: workspace_radius.max(0.0),
        }
    }

    /// Look up a preset by its configuration name
    ///
    /// Accepts the spellings used in config files: `falcon`, `omega3`,
    /// `delta3`, `touch` (dotted vendor spellings are tolerated).
    pub fn from_name(name: &str) -> Result<Self, HapticError> {
        match name.to_ascii_lowercase().as_str() {
            "falcon" => Ok(Self::FALCON),
            "omega3" | "omega.3" => Ok(Self::OMEGA_3),
            "delta3" | "delta.3" => Ok(Self::DELTA_3),
            "touch" | "phantom" => Ok(Self::TOUCH),
            _ => Err(HapticError::UnknownDevice(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_falcon() {
        assert_eq!(DeviceCapabilities::default(), DeviceCapabilities::FALCON);
    }

    #[test]
    fn test_new_clamps_negatives() {
        let caps = DeviceCapabilities::new(-1.0, 500.0, -0.5, 0.1);
        assert_eq!(caps.max_linear_force, 0.0);
        assert_eq!(caps.max_linear_stiffness, 500.0);
        assert_eq!(caps.max_linear_damping, 0.0);
        assert_eq!(caps.workspace_radius, 0.1);
    }

    #[test]
    fn test_preset_sanity() {
        // Larger devices render more force over a bigger workspace
        assert!(DeviceCapabilities::DELTA_3.max_linear_force > DeviceCapabilities::OMEGA_3.max_linear_force);
        assert!(DeviceCapabilities::DELTA_3.workspace_radius > DeviceCapabilities::OMEGA_3.workspace_radius);
        // The stylus device is the weakest of the set
        assert!(DeviceCapabilities::TOUCH.max_linear_force < DeviceCapabilities::FALCON.max_linear_force);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            DeviceCapabilities::from_name("falcon").unwrap(),
            DeviceCapabilities::FALCON
        );
        assert_eq!(
            DeviceCapabilities::from_name("Omega3").unwrap(),
            DeviceCapabilities::OMEGA_3
        );
        assert_eq!(
            DeviceCapabilities::from_name("delta.3").unwrap(),
            DeviceCapabilities::DELTA_3
        );
        assert_eq!(
            DeviceCapabilities::from_name("touch").unwrap(),
            DeviceCapabilities::TOUCH
        );
    }

    #[test]
    fn test_from_name_unknown() {
        let err = DeviceCapabilities::from_name("exoskeleton").unwrap_err();
        match err {
            HapticError::UnknownDevice(name) => assert_eq!(name, "exoskeleton"),
            other => panic!("Expected UnknownDevice, got {:?}", other),
        }
    }
}
