//! Scene hierarchy
//!
//! A tree of named nodes, each holding a world-space position and Euler
//! rotation. Moving or rotating a node propagates to its descendants:
//!
//! ```text
//! set_position ──► set_child_position (frozen offsets, recursive)
//! move_by      ──► move_by            (uniform translation, recursive)
//! set_rotation ──► rotate_about(child, delta, own position)
//! rotate       ──► rotate_about(child, delta, own position)
//! rotate_about ──► rotate_about(child, delta, same origin)
//! ```
//!
//! Nodes live in a [`SceneGraph`] arena and are addressed by [`NodeHandle`].
//! Names are unique per graph through its [`NameRegistry`]; the first node to
//! claim a name keeps it.
//!
//! Each frame [`SceneGraph::update_all`] runs every node's [`Updatable`] hook
//! and [`SceneGraph::render_all`] every node's [`Renderable`], both
//! depth-first from the roots.

mod error;
mod graph;
mod node;
mod registry;
mod renderable;
mod updatable;

#[cfg(test)]
mod tests;

pub use error::SceneError;
pub use graph::SceneGraph;
pub use node::{Node, NodeHandle};
pub use registry::NameRegistry;
pub use renderable::{RenderContext, Renderable};
pub use updatable::Updatable;
