//! Scene node data

use std::fmt;

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

use super::{Renderable, Updatable};

slotmap::new_key_type! {
    /// Stable handle to a node stored in a [`SceneGraph`](super::SceneGraph)
    pub struct NodeHandle;
}

/// A positioned, rotated entity in the scene hierarchy.
///
/// Nodes are created and mutated through [`SceneGraph`](super::SceneGraph);
/// this type only exposes read access. The offsets from the parent are
/// captured when the node is attached and stay fixed afterwards.
pub struct Node {
    pub(super) name: String,
    pub(super) position: Vec3,
    pub(super) rotation: Vec3,
    pub(super) position_offset: Vec3,
    pub(super) rotation_offset: Vec3,
    pub(super) parent: Option<NodeHandle>,
    pub(super) children: Vec<NodeHandle>,
    pub(super) registered: bool,
    pub(super) renderable: Option<Box<dyn Renderable>>,
    pub(super) updater: Option<Box<dyn Updatable>>,
}

impl Node {
    pub(super) fn new(
        name: String,
        position: Vec3,
        rotation: Vec3,
        renderable: Option<Box<dyn Renderable>>,
    ) -> Self {
        Self {
            name,
            position,
            rotation,
            position_offset: Vec3::zeros(),
            rotation_offset: Vec3::zeros(),
            parent: None,
            children: Vec::new(),
            registered: false,
            renderable,
            updater: None,
        }
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space Euler rotation in radians
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Position relative to the parent at attach time
    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    /// Rotation relative to the parent at attach time
    pub fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    /// Parent node, if attached
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Children in attach order
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Whether this node owns its name in the registry
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Whether this node has a render hook
    pub fn has_renderable(&self) -> bool {
        self.renderable.is_some()
    }

    /// Whether this node has an update hook
    pub fn has_updater(&self) -> bool {
        self.updater.is_some()
    }

    /// Local rotation matrix `Rz * Ry * Rx` built from the current rotation
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::euler_xyz(&self.rotation)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("position_offset", &self.position_offset)
            .field("rotation_offset", &self.rotation_offset)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("registered", &self.registered)
            .field("renderable", &self.renderable.is_some())
            .field("updater", &self.updater.is_some())
            .finish()
    }
}
