//! Per-node update hook

use super::{NodeHandle, SceneError, SceneGraph};

/// Behaviour of a node, advanced once per frame by
/// [`SceneGraph::update_all`](super::SceneGraph::update_all).
///
/// The hook is taken out of its node while it runs, so it can move, rotate,
/// spawn or destroy nodes through `scene`, including its own.
pub trait Updatable {
    /// Advance `node` by `delta_time` seconds
    fn update(&mut self, scene: &mut SceneGraph, node: NodeHandle, delta_time: f32) -> Result<(), SceneError>;
}

impl<F> Updatable for F
where
    F: FnMut(&mut SceneGraph, NodeHandle, f32) -> Result<(), SceneError>,
{
    fn update(&mut self, scene: &mut SceneGraph, node: NodeHandle, delta_time: f32) -> Result<(), SceneError> {
        self(scene, node, delta_time)
    }
}
