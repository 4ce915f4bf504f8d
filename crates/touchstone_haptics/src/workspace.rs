//! Device-to-virtual workspace scaling
//!
//! A haptic device covers a few centimeters of physical travel; the virtual
//! scene it probes is usually much larger. The workspace mapping captures
//! that ratio and derives the stiffness the device can still render once its
//! motion is scaled up.

use glam::Vec3;

use crate::{DeviceCapabilities, HapticError};

/// Mapping between the device workspace and the virtual workspace
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkspaceMapping {
    device_radius: f32,
    virtual_radius: f32,
}

impl WorkspaceMapping {
    /// Create a mapping from explicit radii (both in meters, both > 0)
    pub fn new(device_radius: f32, virtual_radius: f32) -> Result<Self, HapticError> {
        if device_radius <= 0.0 || virtual_radius <= 0.0 {
            return Err(HapticError::InvalidWorkspace {
                device_radius,
                virtual_radius,
            });
        }
        Ok(Self {
            device_radius,
            virtual_radius,
        })
    }

    /// Create a mapping from a device's workspace onto a virtual radius
    pub fn for_device(
        caps: &DeviceCapabilities,
        virtual_radius: f32,
    ) -> Result<Self, HapticError> {
        Self::new(caps.workspace_radius, virtual_radius)
    }

    /// Device radius in meters
    pub fn device_radius(&self) -> f32 {
        self.device_radius
    }

    /// Virtual radius in meters
    pub fn virtual_radius(&self) -> f32 {
        self.virtual_radius
    }

    /// How much device motion is magnified in the virtual scene
    ///
    /// A Falcon (4 cm radius) mapped onto a 1 m virtual workspace has a
    /// scale factor of 25.
    pub fn scale_factor(&self) -> f32 {
        self.virtual_radius / self.device_radius
    }

    /// The stiffest contact the device can render through this mapping
    ///
    /// Scaling motion up by `k` divides renderable stiffness by `k`: a 1 mm
    /// virtual penetration corresponds to only 1/k mm of physical travel, so
    /// the force-per-virtual-meter the device can oppose drops by the same
    /// factor.
    pub fn max_renderable_stiffness(&self, caps: &DeviceCapabilities) -> f32 {
        caps.max_linear_stiffness / self.scale_factor()
    }

    /// Map a device-space position into the virtual scene
    pub fn device_to_virtual(&self, p: Vec3) -> Vec3 {
        p * self.scale_factor()
    }

    /// Map a virtual-scene position back into device space
    pub fn virtual_to_device(&self, p: Vec3) -> Vec3 {
        p / self.scale_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radii_rejected() {
        assert!(WorkspaceMapping::new(0.0, 1.0).is_err());
        assert!(WorkspaceMapping::new(0.04, 0.0).is_err());
        assert!(WorkspaceMapping::new(-0.04, 1.0).is_err());
    }

    #[test]
    fn test_scale_factor() {
        let mapping = WorkspaceMapping::new(0.04, 1.0).unwrap();
        assert!((mapping.scale_factor() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_identity_mapping() {
        let mapping = WorkspaceMapping::new(0.5, 0.5).unwrap();
        assert!((mapping.scale_factor() - 1.0).abs() < 1e-6);

        let caps = DeviceCapabilities::OMEGA_3;
        let k = mapping.max_renderable_stiffness(&caps);
        assert!((k - caps.max_linear_stiffness).abs() < 1e-3);
    }

    #[test]
    fn test_falcon_stiffness_derivation() {
        // Falcon over a 1 m virtual workspace: 3000 / 25 = 120 N/m
        let caps = DeviceCapabilities::FALCON;
        let mapping = WorkspaceMapping::for_device(&caps, 1.0).unwrap();
        let k = mapping.max_renderable_stiffness(&caps);
        assert!((k - 120.0).abs() < 1e-3, "got {}", k);
    }

    #[test]
    fn test_position_round_trip() {
        let mapping = WorkspaceMapping::new(0.075, 1.5).unwrap();
        let p = Vec3::new(0.01, -0.02, 0.03);
        let back = mapping.virtual_to_device(mapping.device_to_virtual(p));
        assert!((back - p).length() < 1e-6);
    }

    #[test]
    fn test_device_to_virtual_scales() {
        let mapping = WorkspaceMapping::new(0.1, 1.0).unwrap();
        let p = mapping.device_to_virtual(Vec3::new(0.1, 0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-6);
    }
}
