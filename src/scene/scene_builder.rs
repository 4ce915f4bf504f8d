//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building the demo scene: camera, headlamp spot
//! light, and touchable shapes.

use glam::Vec3;
use touchstone_haptics::Effect;
use touchstone_scene::{
    Camera, Material, NodeKey, NodeKind, SceneNode, ShadowQuality, ShapeInstance, ShapeKind,
    SpotLight, StereoMode, Transform, World,
};

/// The built scene plus keys to the objects the application mutates later
pub struct DemoScene {
    pub world: World,
    /// Camera node, if one was added
    pub camera: Option<NodeKey>,
    /// Spot light node, if one was added
    pub light: Option<NodeKey>,
    /// The interactive object, if one was added
    pub object: Option<NodeKey>,
}

/// Builder for constructing the demo scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_background([0.0, 0.0, 0.0, 1.0])
///     .add_camera(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, Vec3::Z, 1.0, 10.0)
///     .add_headlamp(Vec3::new(0.0, 0.5, 0.0), Vec3::new(-3.0, -0.5, 0.0), 20.0)
///     .add_torus("torus", 0.24, 0.50, material, transform)
///     .with_surface_effect()
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
    camera: Option<NodeKey>,
    light: Option<NodeKey>,
    object: Option<NodeKey>,
}

impl SceneBuilder {
    /// Create a new scene builder with an empty world
    pub fn new() -> Self {
        Self {
            world: World::new(),
            camera: None,
            light: None,
            object: None,
        }
    }

    /// Set the world background color
    pub fn with_background(mut self, color: [f32; 4]) -> Self {
        self.world.set_background(color);
        self
    }

    /// Add a look-at camera under the root
    ///
    /// The eye position becomes the camera node's transform.
    pub fn add_camera(mut self, eye: Vec3, target: Vec3, up: Vec3, near: f32, far: f32) -> Self {
        let mut camera = Camera::new();
        camera.look_at(target, up);
        camera.set_clipping_planes(near, far);

        let root = self.world.root();
        let key = self.world.add_child(
            root,
            SceneNode::new(NodeKind::Camera(camera))
                .with_name("camera")
                .with_position(eye),
        );
        self.camera = Some(key);
        self
    }

    /// Configure stereo rendering on the camera added last
    pub fn with_stereo(
        mut self,
        mode: StereoMode,
        eye_separation: f32,
        focal_length: f32,
        mirrored: bool,
    ) -> Self {
        if let Some(camera) = self.camera.and_then(|key| self.world.camera_mut(key)) {
            camera.stereo_mode = mode;
            camera.set_stereo_eye_separation(eye_separation);
            camera.set_stereo_focal_length(focal_length);
            camera.mirror_vertical = mirrored;
        } else {
            log::warn!("with_stereo called before add_camera; ignoring");
        }
        self
    }

    /// Add a spot light parented to the camera, headlamp style
    ///
    /// `local_position` is relative to the camera; the light follows the
    /// viewpoint. Requires a camera; falls back to the root otherwise.
    pub fn add_headlamp(
        mut self,
        local_position: Vec3,
        direction: Vec3,
        cutoff_deg: f32,
        shadows: bool,
        shadow_quality: ShadowQuality,
    ) -> Self {
        let mut light = SpotLight::new();
        light.set_direction(direction);
        light.set_cutoff_angle_deg(cutoff_deg);
        light.shadow_enabled = shadows;
        light.shadow_quality = shadow_quality;

        let parent = match self.camera {
            Some(camera) => camera,
            None => {
                log::warn!("add_headlamp called before add_camera; attaching to the root");
                self.world.root()
            }
        };
        let key = self.world.add_child(
            parent,
            SceneNode::new(NodeKind::SpotLight(light))
                .with_name("headlamp")
                .with_position(local_position),
        );
        self.light = Some(key);
        self
    }

    /// Add a torus under the root as the interactive object
    pub fn add_torus(
        mut self,
        name: &str,
        inner_radius: f32,
        outer_radius: f32,
        material: Material,
        transform: Transform,
    ) -> Self {
        let shape = ShapeKind::torus(inner_radius, outer_radius);
        if shape.is_degenerate() {
            log::warn!(
                "Torus '{}' has degenerate radii {}/{}",
                name,
                inner_radius,
                outer_radius
            );
        }

        let root = self.world.root();
        let key = self.world.add_child(
            root,
            SceneNode::new(NodeKind::Shape(
                ShapeInstance::new(shape).with_material(material),
            ))
            .with_name(name)
            .with_transform(transform),
        );
        self.object = Some(key);
        self
    }

    /// Attach a surface haptic effect to the object added last
    pub fn with_surface_effect(mut self) -> Self {
        match self.object.and_then(|key| self.world.get_mut(key)) {
            Some(node) => {
                node.add_effect(Effect::Surface);
            }
            None => log::warn!("with_surface_effect called before adding an object; ignoring"),
        }
        self
    }

    /// Build the scene
    pub fn build(self) -> DemoScene {
        DemoScene {
            world: self.world,
            camera: self.camera,
            light: self.light,
            object: self.object,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
