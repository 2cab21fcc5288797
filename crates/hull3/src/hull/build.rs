//! Bootstrap tetrahedron from four extremal points.

use nalgebra::Vector3;

use crate::geom3::cfg::DEGENERACY_EPS;

use super::aggregate::Hull;
use super::error::{HullError, HullResult};
use super::node::{FaceNode, NodeId};

impl Hull {
    /// Bootstrap a hull on `points`.
    ///
    /// Picks p0 = first min-x, p1 = last max-x, p2 = farthest from line
    /// (p0,p1), p3 = farthest from plane (p0,p1,p2) (first on ties), builds the
    /// four faces with complete mutual adjacency and orients them against the
    /// mean of p0..p3. All other points start in the outside set.
    ///
    /// Errors
    /// - `TooFewPoints`, `NonFinite`, `Degenerate` (no tetrahedron exists).
    pub fn new(points: &[Vector3<f64>]) -> HullResult<Self> {
        if points.len() < 4 {
            return Err(HullError::TooFewPoints(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(HullError::NonFinite { index });
        }

        let mut p0 = points[0];
        let mut p1 = points[0];
        for p in points {
            if p.x < p0.x {
                p0 = *p;
            }
            if p.x >= p1.x {
                p1 = *p;
            }
        }
        if p0.x == p1.x {
            return Err(HullError::Degenerate("all points share one x coordinate"));
        }

        let axis = p1 - p0;
        let p2 = first_max_by(points, |p| (p - p0).cross(&axis).norm_squared());
        let axis2 = axis.norm_squared();
        let normal = (p2 - p0).cross(&axis);
        if normal.norm_squared() <= DEGENERACY_EPS * axis2 * (p2 - p0).norm_squared() {
            return Err(HullError::Degenerate("all points are collinear"));
        }

        let base = FaceNode::new(NodeId(0), p0, p1, p2);
        let p3 = first_max_by(points, |p| base.dist_factor(p));
        if base.dist_factor(&p3) <= DEGENERACY_EPS * normal.norm_squared() * axis2 {
            return Err(HullError::Degenerate("all points are coplanar"));
        }

        let mut hull = Hull {
            arena: Vec::with_capacity(8),
            free: Vec::new(),
            order: Vec::with_capacity(8),
            centroid: (p0 + p1 + p2 + p3) * 0.25,
            outside: points
                .iter()
                .filter(|p| **p != p0 && **p != p1 && **p != p2 && **p != p3)
                .copied()
                .collect(),
            tagged: Vec::new(),
            contour: Vec::new(),
        };
        let n0 = hull.alloc(p0, p1, p2);
        let n1 = hull.alloc(p1, p2, p3);
        let n2 = hull.alloc(p2, p3, p0);
        let n3 = hull.alloc(p3, p0, p1);
        hull.node_mut(n0)?.init_neighbors([n1, n2, n3]);
        hull.node_mut(n1)?.init_neighbors([n2, n3, n0]);
        hull.node_mut(n2)?.init_neighbors([n3, n0, n1]);
        hull.node_mut(n3)?.init_neighbors([n0, n1, n2]);
        hull.refresh_normals();

        tracing::debug!(
            points = points.len(),
            outside = hull.outside.len(),
            "bootstrap tetrahedron"
        );
        Ok(hull)
    }
}

/// First point with the largest key (ties keep the earliest).
fn first_max_by<F>(points: &[Vector3<f64>], key: F) -> Vector3<f64>
where
    F: Fn(&Vector3<f64>) -> f64,
{
    let mut best = points[0];
    let mut best_key = key(&best);
    for p in &points[1..] {
        let k = key(p);
        if k > best_key {
            best = *p;
            best_key = k;
        }
    }
    best
}
