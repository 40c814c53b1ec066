//! Per-node render hook

use crate::foundation::math::{Mat4, Vec3};

/// Snapshot of a node handed to its [`Renderable`] during the render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Node name
    pub name: &'a str,
    /// World-space position
    pub position: Vec3,
    /// World-space Euler rotation in radians
    pub rotation: Vec3,
    /// `Rz * Ry * Rx` built from `rotation`
    pub rotation_matrix: Mat4,
}

impl RenderContext<'_> {
    /// Model matrix: translation then rotation
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * self.rotation_matrix
    }
}

/// Visual kind of a node.
///
/// Implementors draw themselves once per frame when
/// [`SceneGraph::render_all`](super::SceneGraph::render_all) walks the tree.
pub trait Renderable {
    /// Draw this node
    fn render(&mut self, ctx: &RenderContext<'_>);
}

impl<F> Renderable for F
where
    F: FnMut(&RenderContext<'_>),
{
    fn render(&mut self, ctx: &RenderContext<'_>) {
        self(ctx);
    }
}
