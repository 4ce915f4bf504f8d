//! Error types for the haptics crate

/// Errors from capability lookup and workspace mapping
#[derive(Debug, Clone, PartialEq)]
pub enum HapticError {
    /// No preset matches the requested device name
    UnknownDevice(String),
    /// Workspace radii must both be strictly positive
    InvalidWorkspace {
        device_radius: f32,
        virtual_radius: f32,
    },
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticError::UnknownDevice(name) => {
                write!(f, "Unknown haptic device preset: {}", name)
            }
            HapticError::InvalidWorkspace {
                device_radius,
                virtual_radius,
            } => write!(
                f,
                "Invalid workspace mapping: device radius {} / virtual radius {}",
                device_radius, virtual_radius
            ),
        }
    }
}

impl std::error::Error for HapticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HapticError::UnknownDevice("gizmo".to_string());
        assert_eq!(format!("{}", err), "Unknown haptic device preset: gizmo");

        let err = HapticError::InvalidWorkspace {
            device_radius: 0.0,
            virtual_radius: 1.0,
        };
        assert!(format!("{}", err).contains("Invalid workspace mapping"));
    }
}
