//! Face node: one triangle, its cached center/normal and three neighbor slots.

use std::fmt;

use nalgebra::Vector3;

use crate::geom3::{Segment, Triangle};

use super::error::{HullError, HullResult};

/// Arena handle of a face node.
///
/// Handles are unique among live faces; a removed face's handle may be reused
/// by a later face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hull face with its adjacency.
///
/// Invariants:
/// - `center` is fixed at construction; `normal` is unit length (or zero for a
///   zero-area triangle) and outward only relative to the centroid last passed
///   to `set_normal`.
/// - Between steps all three `neighbors` slots are `Some`; inside a step some
///   may be `None`.
#[derive(Clone, Debug)]
pub struct FaceNode {
    id: NodeId,
    tri: Triangle,
    center: Vector3<f64>,
    normal: Vector3<f64>,
    neighbors: [Option<NodeId>; 3],
}

impl FaceNode {
    /// New face with empty slots and no normal yet.
    pub fn new(id: NodeId, a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        let tri = Triangle::new(a, b, c);
        Self {
            id,
            tri,
            center: tri.gravity_center(),
            normal: Vector3::zeros(),
            neighbors: [None; 3],
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.tri
    }
    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        self.center
    }
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }
    #[inline]
    pub fn neighbors(&self) -> &[Option<NodeId>; 3] {
        &self.neighbors
    }

    /// Present neighbor handles in slot order.
    pub fn present_neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    /// Orient the unit plane normal away from `centroid`.
    pub fn set_normal(&mut self, centroid: Vector3<f64>) {
        let v = self.tri.plane_normal();
        let s = if v.dot(&(centroid - self.tri.a)) > 0.0 {
            -1.0
        } else {
            1.0
        };
        self.normal = v.try_normalize(0.0).unwrap_or_else(Vector3::zeros) * s;
    }

    /// Bootstrap only: fill all three slots.
    pub fn init_neighbors(&mut self, n: [NodeId; 3]) {
        self.neighbors = n.map(Some);
    }

    pub fn has_neighbor(&self, n: NodeId) -> bool {
        self.neighbors.contains(&Some(n))
    }

    /// Fill the first empty slot.
    pub fn add_neighbor(&mut self, n: NodeId) -> HullResult<()> {
        let slot = self
            .neighbors
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or(HullError::NeighborSlotsFull { node: self.id })?;
        *slot = Some(n);
        Ok(())
    }

    /// Clear the slot holding `n`.
    pub fn remove_neighbor(&mut self, n: NodeId) -> HullResult<()> {
        let slot = self
            .neighbors
            .iter_mut()
            .find(|s| **s == Some(n))
            .ok_or(HullError::NeighborMissing {
                node: self.id,
                neighbor: n,
            })?;
        *slot = None;
        Ok(())
    }

    /// Edge shared with `pair`, tested on `pair`'s edges (a,b), (b,c), (c,a).
    pub fn common_edge(&self, pair: &FaceNode) -> HullResult<Segment> {
        pair.tri
            .edges()
            .into_iter()
            .find(|e| self.tri.has_vert(&e.a) && self.tri.has_vert(&e.b))
            .ok_or(HullError::NoCommonEdge {
                node: self.id,
                pair: pair.id,
            })
    }

    /// Ranking scalar for candidate apexes: squared triple product
    /// `((p - a) · ((b - a) × (c - a)))²`.
    ///
    /// Proportional to the squared distance from the face plane; only
    /// comparable between points ranked against the same face.
    #[inline]
    pub fn dist_factor(&self, p: &Vector3<f64>) -> f64 {
        let d = (p - self.tri.a).dot(&self.tri.plane_normal());
        d * d
    }

    /// `(p - center) · normal`.
    #[inline]
    pub fn signed_distance(&self, p: &Vector3<f64>) -> f64 {
        (p - self.center).dot(&self.normal)
    }

    pub fn is_complete(&self) -> bool {
        self.neighbors.iter().all(Option::is_some)
    }

    /// Triangle reordered so its right-hand normal points along `normal`.
    pub fn outward_triangle(&self) -> Triangle {
        if self.tri.plane_normal().dot(&self.normal) < 0.0 {
            self.tri.flipped()
        } else {
            self.tri
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn face(id: usize) -> FaceNode {
        FaceNode::new(
            NodeId(id),
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
        )
    }

    #[test]
    fn normal_points_away_from_centroid() {
        let mut f = face(0);
        f.set_normal(vector![0.2, 0.2, 1.0]);
        assert!((f.normal() - vector![0.0, 0.0, -1.0]).norm() < 1e-12);
        f.set_normal(vector![0.2, 0.2, -1.0]);
        assert!((f.normal() - vector![0.0, 0.0, 1.0]).norm() < 1e-12);
        assert!(f.signed_distance(&vector![5.0, 5.0, 2.0]) > 0.0);
        // outward winding agrees with the normal either way
        let t = f.outward_triangle();
        assert!(t.plane_normal().dot(&f.normal()) > 0.0);
    }

    #[test]
    fn zero_area_face_gets_zero_normal() {
        let p = vector![1.0, 1.0, 1.0];
        let mut f = FaceNode::new(NodeId(0), p, p, vector![2.0, 2.0, 2.0]);
        f.set_normal(Vector3::zeros());
        assert_eq!(f.normal(), Vector3::zeros());
        assert_eq!(f.signed_distance(&vector![9.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn slots_fill_in_order_and_reject_overflow() {
        let mut f = face(0);
        f.add_neighbor(NodeId(1)).unwrap();
        f.add_neighbor(NodeId(2)).unwrap();
        f.add_neighbor(NodeId(3)).unwrap();
        assert!(f.is_complete());
        assert_eq!(
            f.add_neighbor(NodeId(4)),
            Err(HullError::NeighborSlotsFull { node: NodeId(0) })
        );
        f.remove_neighbor(NodeId(2)).unwrap();
        assert!(!f.has_neighbor(NodeId(2)));
        assert_eq!(f.neighbors()[1], None);
        // refills the hole first
        f.add_neighbor(NodeId(5)).unwrap();
        assert_eq!(f.neighbors()[1], Some(NodeId(5)));
    }

    #[test]
    fn removing_absent_neighbor_fails() {
        let mut f = face(0);
        f.init_neighbors([NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(
            f.remove_neighbor(NodeId(9)),
            Err(HullError::NeighborMissing {
                node: NodeId(0),
                neighbor: NodeId(9)
            })
        );
        assert_eq!(f.present_neighbors().count(), 3);
    }

    #[test]
    fn common_edge_uses_pair_order() {
        let f = face(0);
        let g = FaceNode::new(
            NodeId(1),
            vector![0.0, 1.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![1.0, 1.0, 0.0],
        );
        let e = f.common_edge(&g).unwrap();
        // first edge of g: (a,b)
        assert_eq!(e.a, vector![0.0, 1.0, 0.0]);
        assert_eq!(e.b, vector![1.0, 0.0, 0.0]);

        let far = FaceNode::new(
            NodeId(2),
            vector![5.0, 5.0, 5.0],
            vector![6.0, 5.0, 5.0],
            vector![5.0, 6.0, 5.0],
        );
        assert_eq!(
            f.common_edge(&far),
            Err(HullError::NoCommonEdge {
                node: NodeId(0),
                pair: NodeId(2)
            })
        );
    }

    #[test]
    fn dist_factor_ranks_by_plane_distance() {
        let f = face(0);
        let near = vector![0.3, 0.3, 0.5];
        let far = vector![-4.0, 7.0, 2.0];
        assert!(f.dist_factor(&far) > f.dist_factor(&near));
        assert_eq!(f.dist_factor(&vector![3.0, -2.0, 0.0]), 0.0);
    }
}
