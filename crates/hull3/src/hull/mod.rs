//! Incremental 3D hull: face nodes linked in a triangle adjacency graph.
//!
//! Purpose
//! - Grow a closed triangulated surface around a point set, one exterior point
//!   (the apex) per `Hull::expand` step.
//!
//! Why this design
//! - Faces live in an arena (`Vec<Option<FaceNode>>` plus a free list) and
//!   refer to each other by `NodeId`. Removing and relinking faces during a
//!   step never leaves dangling references.
//! - Each face keeps exactly three optional neighbor slots; a step empties
//!   slots while deleting visible faces and refills them while patching.
//! - Normals are oriented against a running centroid (mean of face centers),
//!   so every step ends by recomputing all normals.
//!
//! Step outline (`expand`)
//! - prune contained points; pick the first face that sees an outside point
//!   (root) and its farthest point (apex);
//! - flood from root over faces that see the apex (tagged), collecting the
//!   horizon edges (contour) on the faces that don't;
//! - unlink and drop tagged faces; fan new faces from the apex over the
//!   contour and link them to the kept faces and to each other.
//!
//! Numerics
//! - Visibility uses `geom3::cfg::VISIBILITY_EPS`; no exact predicates.
//!   Coplanar or duplicate points beyond the tolerance are not handled.

mod aggregate;
mod build;
mod error;
mod expand;
mod node;
mod render;

pub use aggregate::{ContourEntry, Hull};
pub use error::{HullError, HullResult};
pub use node::{FaceNode, NodeId};
pub use render::TriangleSink;
