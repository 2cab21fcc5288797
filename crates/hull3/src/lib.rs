//! Incremental convex hulls in 3D.
//!
//! The hull starts from a bootstrap tetrahedron and admits one exterior point
//! per step: faces the point can see are deleted and the hole is patched with
//! a fan of triangles anchored at the point.
//!
//! Layout
//! - `geom3`: points, triangles, segments, tolerances.
//! - `hull`: face nodes, the hull aggregate and its driver loop.
//! - `rand3`: seeded point clouds for tests, benches and the CLI.

pub mod api;
pub mod geom3;
pub mod hull;
pub mod rand3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{Segment, Triangle};
pub use hull::{FaceNode, Hull, HullError, HullResult, NodeId, TriangleSink};
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{Segment, Triangle};
    pub use crate::hull::{Hull, HullError, HullResult, TriangleSink};
    pub use crate::rand3::{sample_in_ball, sample_in_box, sample_on_sphere, ReplayToken};
    pub use nalgebra::Vector3 as Vec3;
}
