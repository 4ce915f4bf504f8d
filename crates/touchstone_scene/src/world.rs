//! World container for scene nodes
//!
//! The World owns every node in the scene tree and the parent/child links
//! between them. A fresh world holds a single root group node.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};

use crate::{Camera, DirtyFlags, NodeKind, SceneNode, ShapeInstance, SpotLight, Transform};

new_key_type! {
    /// Generational key to a node in the world
    pub struct NodeKey;
}

/// The scene world containing all nodes
pub struct World {
    /// Background color as RGBA
    background: [f32; 4],
    nodes: SlotMap<NodeKey, SceneNode>,
    root: NodeKey,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new world with a black background and an empty root group
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new(NodeKind::Group).with_name("root"));
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            nodes,
            root,
        }
    }

    /// Key of the root group node
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Background color as RGBA
    pub fn background(&self) -> [f32; 4] {
        self.background
    }

    /// Set the background color; marks the root dirty so consumers resync
    pub fn set_background(&mut self, color: [f32; 4]) {
        self.background = color;
        if let Some(root) = self.nodes.get_mut(self.root) {
            root.mark_dirty(DirtyFlags::APPEARANCE);
        }
    }

    /// Add a node as a child of `parent`, returning its key
    ///
    /// If the parent has been removed in the meantime the node is attached
    /// to the root instead.
    pub fn add_child(&mut self, parent: NodeKey, mut node: SceneNode) -> NodeKey {
        let parent = if self.nodes.contains_key(parent) {
            parent
        } else {
            log::warn!("Parent node no longer exists; attaching to the root");
            self.root
        };
        node.parent = Some(parent);
        let key = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        }
        key
    }

    /// Get a reference to a node by key
    pub fn get(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Get a mutable reference to a node by key
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Find a node by name
    pub fn get_by_name(&self, name: &str) -> Option<(NodeKey, &SceneNode)> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name.as_deref() == Some(name))
    }

    /// Number of nodes in the world, including the root
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over keys and nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// Compose the transform chain from the root down to `key`
    ///
    /// This is what makes a light parented to the camera follow the
    /// camera's position.
    pub fn world_transform(&self, key: NodeKey) -> Option<Transform> {
        let mut chain = Vec::new();
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            let node = self.nodes.get(k)?;
            chain.push(k);
            cursor = node.parent;
        }

        let mut acc = Transform::identity();
        for k in chain.iter().rev() {
            acc = acc.compose(&self.nodes[*k].transform);
        }
        Some(acc)
    }

    /// World-space position of a node
    pub fn world_position(&self, key: NodeKey) -> Option<Vec3> {
        self.world_transform(key).map(|t| t.position)
    }

    /// Remove a node and its whole subtree; false for the root or a stale key
    pub fn remove(&mut self, key: NodeKey) -> bool {
        if key == self.root || !self.nodes.contains_key(key) {
            return false;
        }

        if let Some(parent) = self.nodes.get(key).and_then(|n| n.parent) {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|c| *c != key);
            }
        }

        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            if let Some(node) = self.nodes.remove(k) {
                stack.extend(node.children);
            }
        }
        true
    }

    /// Remove every node and start over with a fresh root
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self
            .nodes
            .insert(SceneNode::new(NodeKind::Group).with_name("root"));
    }

    // --- Typed accessors ---

    /// Camera payload of a node
    pub fn camera(&self, key: NodeKey) -> Option<&Camera> {
        self.get(key)?.camera()
    }

    /// Mutable camera payload of a node
    pub fn camera_mut(&mut self, key: NodeKey) -> Option<&mut Camera> {
        self.get_mut(key)?.camera_mut()
    }

    /// Spot light payload of a node
    pub fn spot_light(&self, key: NodeKey) -> Option<&SpotLight> {
        self.get(key)?.spot_light()
    }

    /// Mutable spot light payload of a node
    pub fn spot_light_mut(&mut self, key: NodeKey) -> Option<&mut SpotLight> {
        self.get_mut(key)?.spot_light_mut()
    }

    /// Shape payload of a node
    pub fn shape(&self, key: NodeKey) -> Option<&ShapeInstance> {
        self.get(key)?.shape()
    }

    // --- Dirty tracking ---

    /// Whether any node has pending changes
    pub fn has_dirty_nodes(&self) -> bool {
        self.nodes.values().any(|node| node.is_dirty())
    }

    /// Clear dirty flags on every node
    pub fn clear_all_dirty(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_dirty();
        }
    }
}
