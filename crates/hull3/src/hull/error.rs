//! Error type for hull construction.
//!
//! Two classes share one enum:
//! - input rejected at the boundary before any face exists;
//! - adjacency invariant violations found mid-step. These abort the step and
//!   leave the hull as it was at the failure point; there is no rollback.

use thiserror::Error;

use super::node::NodeId;

/// Errors raised by `Hull::new`, `Hull::expand` and friends.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer than four input points.
    #[error("need at least 4 points, got {0}")]
    TooFewPoints(usize),

    /// NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// No bootstrap tetrahedron: all points coincide, are collinear or coplanar.
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),

    /// A face already has three neighbors.
    #[error("face {node} has no free neighbor slot")]
    NeighborSlotsFull { node: NodeId },

    /// A face does not list the neighbor it is asked to drop.
    #[error("face {node} does not list {neighbor} as a neighbor")]
    NeighborMissing { node: NodeId, neighbor: NodeId },

    /// Two faces expected to be adjacent share no edge.
    #[error("faces {node} and {pair} share no edge")]
    NoCommonEdge { node: NodeId, pair: NodeId },

    /// Two new faces were about to be linked a second time.
    #[error("faces {node} and {pair} are already linked")]
    AlreadyLinked { node: NodeId, pair: NodeId },

    /// A handle points at a removed face.
    #[error("face {0} is not part of the hull")]
    DeadNode(NodeId),

    /// Closure check: a face has an empty or one-sided neighbor slot.
    #[error("face {0} has an open edge")]
    OpenFace(NodeId),
}

/// Result alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_faces() {
        let e = HullError::NeighborMissing {
            node: NodeId(3),
            neighbor: NodeId(7),
        };
        let s = e.to_string();
        assert!(s.contains("#3"));
        assert!(s.contains("#7"));
        assert!(HullError::TooFewPoints(2).to_string().contains("got 2"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
