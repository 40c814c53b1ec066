//! Scene graph arena and transform propagation

use slotmap::SlotMap;

use crate::foundation::math::{orbit_point, Mat4, Mat4Ext, Vec3};

use super::{NameRegistry, Node, NodeHandle, RenderContext, Renderable, SceneError, Updatable};

/// Owning store for scene nodes plus their name registry.
///
/// Parent and child links are handles into the same arena. Every public
/// mutator validates the handle it is given; the recursive fan-out into
/// descendants relies on [`SceneGraph::destroy`] keeping links consistent.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, Node>,
    registry: NameRegistry,
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node without a render hook.
    ///
    /// If `name` is already taken the collision is logged and the node is
    /// still created, but left unregistered: it cannot be found by name and
    /// the existing owner keeps the entry.
    pub fn spawn(&mut self, name: impl Into<String>, position: Vec3, rotation: Vec3) -> NodeHandle {
        self.insert(Node::new(name.into(), position, rotation, None))
    }

    /// Create a node that draws itself through `renderable`
    pub fn spawn_renderable(
        &mut self,
        name: impl Into<String>,
        position: Vec3,
        rotation: Vec3,
        renderable: impl Renderable + 'static,
    ) -> NodeHandle {
        self.insert(Node::new(name.into(), position, rotation, Some(Box::new(renderable))))
    }

    /// Give a node a per-frame update hook, replacing any previous one
    pub fn set_updater(
        &mut self,
        handle: NodeHandle,
        updater: impl Updatable + 'static,
    ) -> Result<(), SceneError> {
        self.node_mut(handle)?.updater = Some(Box::new(updater));
        Ok(())
    }

    /// Closure form of [`set_updater`](Self::set_updater)
    pub fn on_update<F>(&mut self, handle: NodeHandle, hook: F) -> Result<(), SceneError>
    where
        F: FnMut(&mut Self, NodeHandle, f32) -> Result<(), SceneError> + 'static,
    {
        self.set_updater(handle, hook)
    }

    fn insert(&mut self, node: Node) -> NodeHandle {
        let name = node.name.clone();
        let handle = self.nodes.insert(node);

        match self.registry.register(&name, handle) {
            Ok(()) => {
                self.nodes[handle].registered = true;
                log::debug!("Spawned node \"{}\" ({:?})", name, handle);
            }
            Err(err) => {
                log::error!("Failed to register node {:?}: {}", handle, err);
            }
        }

        handle
    }

    /// Remove a node.
    ///
    /// The name is released only if this node still owns it. The node is
    /// removed from its parent's child list and its children become roots,
    /// keeping their positions, rotations and offsets.
    pub fn destroy(&mut self, handle: NodeHandle) -> Result<(), SceneError> {
        let node = self.nodes.remove(handle).ok_or(SceneError::NodeNotFound(handle))?;

        self.registry.unregister(&node.name, handle);

        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|c| *c != handle);
        }
        for child in &node.children {
            if let Some(child) = self.nodes.get_mut(*child) {
                child.parent = None;
            }
        }

        log::debug!(
            "Destroyed node \"{}\" ({:?}), orphaned {} children",
            node.name,
            handle,
            node.children.len()
        );
        Ok(())
    }

    /// Make `child` a child of `parent`.
    ///
    /// Captures `child.position - parent.position` and
    /// `child.rotation - parent.rotation` as the child's offsets, removes the
    /// child from any previous parent and appends it to `parent`'s children.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) -> Result<(), SceneError> {
        if child == parent {
            return Err(SceneError::SelfParent);
        }
        let parent_node = self.node(parent)?;
        let (parent_position, parent_rotation) = (parent_node.position, parent_node.rotation);
        self.node(child)?;
        if self.is_ancestor(child, parent) {
            return Err(SceneError::CycleDetected);
        }

        self.unlink_from_parent(child);

        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.position_offset = node.position - parent_position;
        node.rotation_offset = node.rotation - parent_rotation;
        self.nodes[parent].children.push(child);

        log::trace!("Attached {:?} to {:?}", child, parent);
        Ok(())
    }

    /// Clear `child`'s parent link. Offsets are left as they were.
    pub fn detach(&mut self, child: NodeHandle) -> Result<(), SceneError> {
        self.node(child)?;
        self.unlink_from_parent(child);
        Ok(())
    }

    fn unlink_from_parent(&mut self, child: NodeHandle) {
        let Some(previous) = self.nodes.get_mut(child).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(previous) = self.nodes.get_mut(previous) {
            previous.children.retain(|c| *c != child);
        }
    }

    /// Whether `ancestor` appears on the parent chain of `node`
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    /// Set the node's position; descendants follow through their offsets.
    pub fn set_position(&mut self, handle: NodeHandle, position: Vec3) -> Result<(), SceneError> {
        self.node_mut(handle)?.position = position;
        for child in self.children_of(handle) {
            self.follow_parent(child, position);
        }
        Ok(())
    }

    /// Place the node at `parent_position + position_offset` and cascade.
    ///
    /// Rotation plays no part here; this is pure offset tracking.
    pub fn set_child_position(
        &mut self,
        handle: NodeHandle,
        parent_position: Vec3,
    ) -> Result<(), SceneError> {
        self.node(handle)?;
        self.follow_parent(handle, parent_position);
        Ok(())
    }

    fn follow_parent(&mut self, handle: NodeHandle, parent_position: Vec3) {
        let Some(node) = self.nodes.get_mut(handle) else {
            return;
        };
        node.position = parent_position + node.position_offset;
        let position = node.position;
        for child in self.children_of(handle) {
            self.follow_parent(child, position);
        }
    }

    /// Translate the node and all its descendants by `delta`
    pub fn move_by(&mut self, handle: NodeHandle, delta: Vec3) -> Result<(), SceneError> {
        self.node(handle)?;
        self.translate(handle, delta);
        Ok(())
    }

    fn translate(&mut self, handle: NodeHandle, delta: Vec3) {
        let Some(node) = self.nodes.get_mut(handle) else {
            return;
        };
        node.position += delta;
        for child in self.children_of(handle) {
            self.translate(child, delta);
        }
    }

    /// Set the node's rotation; children orbit the node's position by the change.
    pub fn set_rotation(&mut self, handle: NodeHandle, rotation: Vec3) -> Result<(), SceneError> {
        let node = self.node_mut(handle)?;
        let delta = rotation - node.rotation;
        node.rotation = rotation;
        let pivot = node.position;
        for child in self.children_of(handle) {
            self.orbit(child, delta, pivot);
        }
        Ok(())
    }

    /// Set the node's rotation by orbiting it, and its subtree, about `origin`.
    ///
    /// After the subtree has orbited, each immediate child is additionally
    /// spun by the same change through [`SceneGraph::rotate`], so immediate
    /// children receive the rotation twice.
    pub fn set_rotation_about(
        &mut self,
        handle: NodeHandle,
        rotation: Vec3,
        origin: Vec3,
    ) -> Result<(), SceneError> {
        let delta = rotation - self.node(handle)?.rotation;
        self.orbit(handle, delta, origin);
        for child in self.children_of(handle) {
            self.spin(child, delta);
        }
        Ok(())
    }

    /// Add `delta` to the node's rotation; children orbit its position.
    pub fn rotate(&mut self, handle: NodeHandle, delta: Vec3) -> Result<(), SceneError> {
        self.node(handle)?;
        self.spin(handle, delta);
        Ok(())
    }

    fn spin(&mut self, handle: NodeHandle, delta: Vec3) {
        let Some(node) = self.nodes.get_mut(handle) else {
            return;
        };
        node.rotation += delta;
        let pivot = node.position;
        for child in self.children_of(handle) {
            self.orbit(child, delta, pivot);
        }
    }

    /// Orbit the node and all its descendants about `origin` by `delta`.
    ///
    /// Each affected node's rotation is assigned `delta + rotation_offset`,
    /// which replaces whatever rotation it had accumulated before.
    pub fn rotate_about(
        &mut self,
        handle: NodeHandle,
        delta: Vec3,
        origin: Vec3,
    ) -> Result<(), SceneError> {
        self.node(handle)?;
        self.orbit(handle, delta, origin);
        Ok(())
    }

    fn orbit(&mut self, handle: NodeHandle, delta: Vec3, origin: Vec3) {
        let Some(node) = self.nodes.get_mut(handle) else {
            return;
        };
        node.position = orbit_point(&node.position, &delta, &origin);
        // FIXME: assigning drops rotation accumulated outside the parent offset.
        node.rotation = delta + node.rotation_offset;
        for child in self.children_of(handle) {
            self.orbit(child, delta, origin);
        }
    }

    /// Local rotation matrix of a node, for rendering
    pub fn rotation_matrix(&self, handle: NodeHandle) -> Result<Mat4, SceneError> {
        Ok(self.node(handle)?.rotation_matrix())
    }

    /// Run every node's update hook with `delta_time` seconds.
    ///
    /// Visits nodes in the same order as [`render_all`](Self::render_all).
    /// The order is fixed before the first hook runs: nodes spawned during
    /// the pass wait for the next one, nodes destroyed by an earlier hook are
    /// skipped. The first hook error stops the pass. Returns the number of
    /// update hooks invoked.
    pub fn update_all(&mut self, delta_time: f32) -> Result<usize, SceneError> {
        let mut updated = 0;
        for handle in self.depth_first() {
            let Some(mut updater) = self.nodes.get_mut(handle).and_then(|n| n.updater.take()) else {
                continue;
            };
            let result = updater.update(self, handle, delta_time);
            // Put the hook back unless the node is gone or installed a new one.
            if let Some(node) = self.nodes.get_mut(handle) {
                node.updater.get_or_insert(updater);
            }
            result?;
            updated += 1;
        }
        Ok(updated)
    }

    /// Draw every node that has a render hook.
    ///
    /// Walks depth-first from each root, visiting children in attach order.
    /// Returns the number of render hooks invoked.
    pub fn render_all(&mut self) -> usize {
        let mut rendered = 0;
        for handle in self.depth_first() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };
            if let Some(renderable) = node.renderable.as_mut() {
                let ctx = RenderContext {
                    name: &node.name,
                    position: node.position,
                    rotation: node.rotation,
                    rotation_matrix: Mat4::euler_xyz(&node.rotation),
                };
                renderable.render(&ctx);
                rendered += 1;
            }
        }
        rendered
    }

    /// Every node, depth-first from each root, children in attach order
    fn depth_first(&self) -> Vec<NodeHandle> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeHandle> = self.roots().into_iter().rev().collect();
        while let Some(handle) = stack.pop() {
            if let Some(node) = self.nodes.get(handle) {
                order.push(handle);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    /// Look up a node by name
    pub fn find(&self, name: &str) -> Option<NodeHandle> {
        self.registry.lookup(name)
    }

    /// The name registry
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Borrow a node
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    /// World-space position of a node
    pub fn position(&self, handle: NodeHandle) -> Result<Vec3, SceneError> {
        Ok(self.node(handle)?.position)
    }

    /// World-space rotation of a node
    pub fn rotation(&self, handle: NodeHandle) -> Result<Vec3, SceneError> {
        Ok(self.node(handle)?.rotation)
    }

    /// Parent of a node
    pub fn parent(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, SceneError> {
        Ok(self.node(handle)?.parent)
    }

    /// Children of a node in attach order
    pub fn children(&self, handle: NodeHandle) -> Result<&[NodeHandle], SceneError> {
        Ok(&self.node(handle)?.children)
    }

    /// Whether the node owns its name
    pub fn is_registered(&self, handle: NodeHandle) -> bool {
        self.nodes.get(handle).is_some_and(|n| n.registered)
    }

    /// Nodes without a parent
    pub fn roots(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, handle: NodeHandle) -> Result<&Node, SceneError> {
        self.nodes.get(handle).ok_or(SceneError::NodeNotFound(handle))
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(handle).ok_or(SceneError::NodeNotFound(handle))
    }

    fn children_of(&self, handle: NodeHandle) -> Vec<NodeHandle> {
        self.nodes
            .get(handle)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spawn_registers_name() {
        let mut scene = SceneGraph::new();
        let ship = scene.spawn("ship", Vec3::new(1.0, 2.0, 3.0), Vec3::zeros());

        assert_eq!(scene.find("ship"), Some(ship));
        assert!(scene.is_registered(ship));
        assert_eq!(scene.get(ship).unwrap().name(), "ship");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_attach_captures_offsets() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.5, 0.0));
        let child = scene.spawn("child", Vec3::new(3.0, 1.0, -2.0), Vec3::new(0.1, 0.5, 0.0));

        scene.attach(child, parent).unwrap();

        let node = scene.get(child).unwrap();
        assert_eq!(node.parent(), Some(parent));
        assert_relative_eq!(node.position_offset(), Vec3::new(2.0, 0.0, -2.0));
        assert_relative_eq!(node.rotation_offset(), Vec3::new(0.1, 0.0, 0.0));
        assert_eq!(scene.children(parent).unwrap(), &[child]);
    }

    #[test]
    fn test_offsets_stay_frozen_after_attach() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());
        scene.attach(child, parent).unwrap();

        scene.move_by(child, Vec3::new(0.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(scene.get(child).unwrap().position_offset(), Vec3::new(1.0, 0.0, 0.0));

        scene.set_position(parent, Vec3::new(2.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_reattach_moves_child_between_parents() {
        let mut scene = SceneGraph::new();
        let a = scene.spawn("a", Vec3::zeros(), Vec3::zeros());
        let b = scene.spawn("b", Vec3::new(5.0, 0.0, 0.0), Vec3::zeros());
        let c = scene.spawn("c", Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());

        scene.attach(c, a).unwrap();
        scene.attach(c, b).unwrap();

        assert!(scene.children(a).unwrap().is_empty());
        assert_eq!(scene.children(b).unwrap(), &[c]);
        assert_relative_eq!(scene.get(c).unwrap().position_offset(), Vec3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let mut scene = SceneGraph::new();
        let a = scene.spawn("a", Vec3::zeros(), Vec3::zeros());
        let b = scene.spawn("b", Vec3::zeros(), Vec3::zeros());
        let c = scene.spawn("c", Vec3::zeros(), Vec3::zeros());
        scene.attach(b, a).unwrap();
        scene.attach(c, b).unwrap();

        assert_eq!(scene.attach(a, a), Err(SceneError::SelfParent));
        assert_eq!(scene.attach(a, c), Err(SceneError::CycleDetected));
        assert_eq!(scene.parent(a).unwrap(), None);
    }

    #[test]
    fn test_detach_keeps_offsets() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(0.0, 2.0, 0.0), Vec3::zeros());
        scene.attach(child, parent).unwrap();

        scene.detach(child).unwrap();
        assert_eq!(scene.parent(child).unwrap(), None);
        assert!(scene.children(parent).unwrap().is_empty());
        assert_relative_eq!(scene.get(child).unwrap().position_offset(), Vec3::new(0.0, 2.0, 0.0));

        scene.set_position(parent, Vec3::new(9.0, 9.0, 9.0)).unwrap();
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_set_child_position_uses_offset() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(0.0, 0.0, 3.0), Vec3::zeros());
        let grandchild = scene.spawn("grandchild", Vec3::new(1.0, 0.0, 3.0), Vec3::zeros());
        scene.attach(child, parent).unwrap();
        scene.attach(grandchild, child).unwrap();

        scene.set_child_position(child, Vec3::new(10.0, 0.0, 0.0)).unwrap();

        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(10.0, 0.0, 3.0));
        assert_relative_eq!(scene.position(grandchild).unwrap(), Vec3::new(11.0, 0.0, 3.0));
        // The parent itself is untouched.
        assert_relative_eq!(scene.position(parent).unwrap(), Vec3::zeros());
    }

    #[test]
    fn test_set_rotation_orbits_children_about_parent() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(2.0, 0.0, 0.0), Vec3::zeros());
        scene.attach(child, parent).unwrap();

        let quarter = Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        scene.set_rotation(parent, quarter).unwrap();

        assert_relative_eq!(scene.rotation(parent).unwrap(), quarter);
        assert_relative_eq!(scene.position(parent).unwrap(), Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(scene.rotation(child).unwrap(), quarter);
    }

    #[test]
    fn test_rotate_accumulates_on_self() {
        let mut scene = SceneGraph::new();
        let node = scene.spawn("spinner", Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.1, 0.0, 0.0));

        scene.rotate(node, Vec3::new(0.2, 0.3, 0.0)).unwrap();
        scene.rotate(node, Vec3::new(0.0, 0.3, 0.4)).unwrap();

        assert_relative_eq!(scene.rotation(node).unwrap(), Vec3::new(0.3, 0.6, 0.4), epsilon = 1e-6);
        assert_relative_eq!(scene.position(node).unwrap(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_orbits_children_about_new_parent_position() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 0.25));
        scene.attach(child, parent).unwrap();

        // Half turn about X sends +Y to -Y.
        scene.rotate(parent, Vec3::new(std::f32::consts::PI, 0.0, 0.0)).unwrap();

        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(
            scene.rotation(child).unwrap(),
            Vec3::new(std::f32::consts::PI, 0.0, 0.25),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rotation_matrix_matches_euler_composition() {
        let mut scene = SceneGraph::new();
        let angles = Vec3::new(0.3, -0.7, 1.1);
        let node = scene.spawn("node", Vec3::zeros(), angles);

        let expected = Mat4::rotation_z(angles.z) * Mat4::rotation_y(angles.y) * Mat4::rotation_x(angles.x);
        assert_relative_eq!(scene.rotation_matrix(node).unwrap(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_unknown_handle_is_reported() {
        let mut scene = SceneGraph::new();
        let node = scene.spawn("gone", Vec3::zeros(), Vec3::zeros());
        scene.destroy(node).unwrap();

        assert_eq!(scene.move_by(node, Vec3::zeros()), Err(SceneError::NodeNotFound(node)));
        assert_eq!(scene.destroy(node), Err(SceneError::NodeNotFound(node)));
        assert!(scene.position(node).is_err());
        assert!(!scene.contains(node));
    }
}
