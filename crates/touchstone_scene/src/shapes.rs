//! Serializable shape descriptors
//!
//! Shapes are described by their construction parameters, in local space,
//! centered at the origin. The node transform positions them in the world.

use serde::{Deserialize, Serialize};

/// Serializable shape descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    /// A torus in the local XY plane
    ///
    /// `inner_radius` is the radius of the hole, `outer_radius` the radius
    /// of the outer rim; the tube radius is half their difference.
    Torus {
        inner_radius: f32,
        outer_radius: f32,
    },
    /// A sphere centered at the origin
    Sphere { radius: f32 },
    /// An axis-aligned box with the given half extents
    Cuboid { half_extents: [f32; 3] },
}

impl ShapeKind {
    /// Create a torus descriptor
    pub fn torus(inner_radius: f32, outer_radius: f32) -> Self {
        ShapeKind::Torus {
            inner_radius,
            outer_radius,
        }
    }

    /// Create a sphere descriptor
    pub fn sphere(radius: f32) -> Self {
        ShapeKind::Sphere { radius }
    }

    /// Create a cuboid descriptor
    pub fn cuboid(half_extents: [f32; 3]) -> Self {
        ShapeKind::Cuboid { half_extents }
    }

    /// Radius of the smallest origin-centered sphere containing the shape
    pub fn bounding_radius(&self) -> f32 {
        match self {
            ShapeKind::Torus { outer_radius, .. } => *outer_radius,
            ShapeKind::Sphere { radius } => *radius,
            ShapeKind::Cuboid { half_extents } => {
                let [x, y, z] = *half_extents;
                (x * x + y * y + z * z).sqrt()
            }
        }
    }

    /// Whether any dimension is zero or negative (nothing to display or touch)
    pub fn is_degenerate(&self) -> bool {
        match self {
            ShapeKind::Torus {
                inner_radius,
                outer_radius,
            } => *inner_radius <= 0.0 || *outer_radius <= *inner_radius,
            ShapeKind::Sphere { radius } => *radius <= 0.0,
            ShapeKind::Cuboid { half_extents } => half_extents.iter().any(|e| *e <= 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_bounding_radius() {
        let shape = ShapeKind::torus(0.24, 0.50);
        assert_eq!(shape.bounding_radius(), 0.50);
    }

    #[test]
    fn test_sphere_bounding_radius() {
        assert_eq!(ShapeKind::sphere(1.5).bounding_radius(), 1.5);
    }

    #[test]
    fn test_cuboid_bounding_radius() {
        let shape = ShapeKind::cuboid([1.0, 2.0, 2.0]);
        assert_eq!(shape.bounding_radius(), 3.0);
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(ShapeKind::torus(0.5, 0.24).is_degenerate());
        assert!(ShapeKind::torus(0.0, 0.5).is_degenerate());
        assert!(!ShapeKind::torus(0.24, 0.5).is_degenerate());
        assert!(ShapeKind::sphere(0.0).is_degenerate());
        assert!(ShapeKind::cuboid([1.0, -1.0, 1.0]).is_degenerate());
        assert!(!ShapeKind::cuboid([1.0, 1.0, 1.0]).is_degenerate());
    }

    #[test]
    fn test_torus_serialization() {
        let shape = ShapeKind::torus(0.24, 0.50);
        let serialized = toml::to_string(&shape).unwrap();
        let deserialized: ShapeKind = toml::from_str(&serialized).unwrap();

        match deserialized {
            ShapeKind::Torus {
                inner_radius,
                outer_radius,
            } => {
                assert_eq!(inner_radius, 0.24);
                assert_eq!(outer_radius, 0.50);
            }
            _ => panic!("Expected Torus variant"),
        }
    }

    #[test]
    fn test_cuboid_serialization() {
        let shape = ShapeKind::cuboid([0.5, 1.0, 1.5]);
        let serialized = toml::to_string(&shape).unwrap();
        let deserialized: ShapeKind = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, shape);
    }
}
