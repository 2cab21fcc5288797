//! Curated surface for callers that just want a hull.
//!
//! Prefer these re-exports over reaching into submodules; the submodules keep
//! the step-by-step machinery (`Hull::expand`, scratch lists) visible for
//! inspection and tests.

// Primitives
pub use crate::geom3::{signed_volume6, Segment, Triangle};
// Hull aggregate
pub use crate::hull::{FaceNode, Hull, HullError, HullResult, NodeId, TriangleSink};
// Samplers
pub use crate::rand3::{sample_in_ball, sample_in_box, sample_on_sphere, ReplayToken};

use nalgebra::Vector3;

/// Pre: at least four points, not all coplanar.
/// Post: the triangles of the converged hull, outward wound, in node order.
pub fn convex_hull(points: &[Vector3<f64>]) -> HullResult<Vec<Triangle>> {
    let hull = Hull::build(points)?;
    Ok(hull.nodes().map(|n| n.outward_triangle()).collect())
}
