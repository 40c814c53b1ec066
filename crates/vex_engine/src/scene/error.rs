//! Scene errors

use thiserror::Error;

use super::NodeHandle;

/// Errors raised by scene hierarchy operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The handle does not refer to a live node
    #[error("Node {0:?} does not exist")]
    NodeNotFound(NodeHandle),

    /// Another live node already owns this name
    #[error("Node \"{0}\" already exists")]
    DuplicateName(String),

    /// Attaching would make a node its own ancestor
    #[error("Attaching would create a cycle in the hierarchy")]
    CycleDetected,

    /// A node cannot be its own parent
    #[error("A node cannot be attached to itself")]
    SelfParent,
}
