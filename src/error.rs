//! Errors raised by [`ListArena`](crate::collections::ListArena) operations.

use thiserror::Error;

use crate::collections::NodeId;

/// Failure of a list operation that cannot be expressed as an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle refers to a node that has been released.
    #[error("node {0} has been released")]
    StaleNode(NodeId),
    /// The operation requires an acyclic list but the links loop.
    #[error("list contains a cycle")]
    Cyclic,
    /// A position past the end of the list was requested.
    #[error("position {pos} is out of range for a list of {len} nodes")]
    PositionOutOfRange {
        /// Requested position.
        pos: usize,
        /// Number of nodes in the list.
        len: usize,
    },
}
