//! Scene nodes
//!
//! A node couples a local transform with one of the object kinds the demo
//! uses (group, camera, spot light, shape). Parent/child links live on the
//! node but are managed by [`World`](crate::World).

use bitflags::bitflags;
use glam::Vec3;
use touchstone_haptics::Effect;

use crate::world::NodeKey;
use crate::{Camera, Material, ShapeKind, SpotLight, Transform};

bitflags! {
    /// Flags indicating which parts of a node have changed since the last
    /// time a consumer synced from the scene
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Local transform has changed
        const TRANSFORM = 1 << 0;
        /// Material, camera, or light parameters have changed
        const APPEARANCE = 1 << 1;
        /// Attached haptic effects have changed
        const EFFECTS = 1 << 2;
        /// All flags set - node needs a full resync
        const ALL = Self::TRANSFORM.bits() | Self::APPEARANCE.bits() | Self::EFFECTS.bits();
    }
}

/// A displayable, touchable shape: geometry, material, attached effects
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    /// Geometry descriptor
    pub shape: ShapeKind,
    /// Visual and haptic surface properties
    pub material: Material,
    /// Haptic effects attached to this shape
    pub effects: Vec<Effect>,
}

impl ShapeInstance {
    /// Create a shape instance with the default material and no effects
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            material: Material::default(),
            effects: Vec::new(),
        }
    }

    /// Set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

/// What a scene node is
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure grouping node (the world root is one)
    Group,
    Camera(Camera),
    SpotLight(SpotLight),
    Shape(ShapeInstance),
}

/// A node in the scene tree
pub struct SceneNode {
    /// Optional name for this node (for lookup)
    pub name: Option<String>,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    /// Local transform, relative to the parent node
    pub transform: Transform,
    kind: NodeKind,
    dirty: DirtyFlags,
}

impl SceneNode {
    /// Create a new node of the given kind
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            parent: None,
            children: Vec::new(),
            transform: Transform::identity(),
            kind,
            dirty: DirtyFlags::ALL, // New nodes are dirty
        }
    }

    /// Set the name of this node (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the local position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// The node's kind
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Key of the parent node, if attached
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Keys of the child nodes
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Set the local position and mark the transform dirty
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Set the local transform and mark it dirty
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Set the material of a shape node; false for non-shape nodes
    pub fn set_material(&mut self, material: Material) -> bool {
        match &mut self.kind {
            NodeKind::Shape(instance) => {
                instance.material = material;
                self.dirty |= DirtyFlags::APPEARANCE;
                true
            }
            _ => false,
        }
    }

    /// Attach a haptic effect to a shape node; false for non-shape nodes
    pub fn add_effect(&mut self, effect: Effect) -> bool {
        match &mut self.kind {
            NodeKind::Shape(instance) => {
                instance.effects.push(effect);
                self.dirty |= DirtyFlags::EFFECTS;
                true
            }
            _ => false,
        }
    }

    /// Camera payload, if this is a camera node
    pub fn camera(&self) -> Option<&Camera> {
        match &self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Mutable camera payload; marks the node's appearance dirty
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.kind {
            NodeKind::Camera(camera) => {
                self.dirty |= DirtyFlags::APPEARANCE;
                Some(camera)
            }
            _ => None,
        }
    }

    /// Spot light payload, if this is a light node
    pub fn spot_light(&self) -> Option<&SpotLight> {
        match &self.kind {
            NodeKind::SpotLight(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable spot light payload; marks the node's appearance dirty
    pub fn spot_light_mut(&mut self) -> Option<&mut SpotLight> {
        match &mut self.kind {
            NodeKind::SpotLight(light) => {
                self.dirty |= DirtyFlags::APPEARANCE;
                Some(light)
            }
            _ => None,
        }
    }

    /// Shape payload, if this is a shape node
    pub fn shape(&self) -> Option<&ShapeInstance> {
        match &self.kind {
            NodeKind::Shape(instance) => Some(instance),
            _ => None,
        }
    }

    // --- Dirty tracking ---

    /// Check if this node has any dirty flags set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Get the current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this node as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}
