//! Hull aggregate: node arena, running centroid, outside set, step scratch.

use nalgebra::Vector3;

use crate::geom3::{cfg::VISIBILITY_EPS, Segment};

use super::error::{HullError, HullResult};
use super::node::{FaceNode, NodeId};

/// Horizon entry: a kept face and the edge it shares with a removed face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContourEntry {
    pub node: NodeId,
    pub edge: Segment,
}

/// Hull under construction.
///
/// Invariants (between steps):
/// - live faces form a closed surface; every slot of every live face is
///   present and reciprocal;
/// - `centroid` is the arithmetic mean of live face centers (a cheap interior
///   proxy, not the volumetric centroid);
/// - normals are outward with respect to `centroid`;
/// - `outside` holds the input points not yet known to be contained.
#[derive(Clone, Debug)]
pub struct Hull {
    pub(super) arena: Vec<Option<FaceNode>>,
    pub(super) free: Vec<NodeId>,
    /// Live faces in iteration order (survivors keep their order, new faces
    /// are appended).
    pub(super) order: Vec<NodeId>,
    pub(super) centroid: Vector3<f64>,
    pub(super) outside: Vec<Vector3<f64>>,
    pub(super) tagged: Vec<NodeId>,
    pub(super) contour: Vec<ContourEntry>,
}

impl Hull {
    /// Running centroid estimate (mean of face centers).
    #[inline]
    pub fn centroid(&self) -> Vector3<f64> {
        self.centroid
    }

    /// Number of input points not yet known to be inside.
    #[inline]
    pub fn outside_len(&self) -> usize {
        self.outside.len()
    }

    /// Points not yet known to be inside.
    #[inline]
    pub fn outside(&self) -> &[Vector3<f64>] {
        &self.outside
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.order.len()
    }

    /// True once no outside points remain; further `expand` calls are no-ops.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.outside.is_empty()
    }

    /// Faces removed by the last step. Their handles may already have been
    /// reused by the faces that replaced them.
    #[inline]
    pub fn tagged(&self) -> &[NodeId] {
        &self.tagged
    }

    /// Horizon recorded by the last step.
    #[inline]
    pub fn contour(&self) -> &[ContourEntry] {
        &self.contour
    }

    /// Live faces in iteration order.
    pub fn nodes(&self) -> impl Iterator<Item = &FaceNode> + '_ {
        self.order.iter().filter_map(|id| self.arena[id.0].as_ref())
    }

    /// Live face by handle.
    pub fn node(&self, id: NodeId) -> HullResult<&FaceNode> {
        self.arena
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(HullError::DeadNode(id))
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> HullResult<&mut FaceNode> {
        self.arena
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(HullError::DeadNode(id))
    }

    /// Membership: `p` is on the inner side (within `h`) of every face.
    pub fn contains(&self, p: &Vector3<f64>) -> bool {
        self.nodes()
            .all(|n| n.signed_distance(p) <= VISIBILITY_EPS)
    }

    /// Insert a face into a free slot (or a new one) and append it to the
    /// iteration order. Does not touch the centroid.
    pub(super) fn alloc(
        &mut self,
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
    ) -> NodeId {
        let id = self.free.pop().unwrap_or(NodeId(self.arena.len()));
        let node = FaceNode::new(id, a, b, c);
        if id.0 == self.arena.len() {
            self.arena.push(Some(node));
        } else {
            self.arena[id.0] = Some(node);
        }
        self.order.push(id);
        id
    }

    /// Drop a face from the arena. Its handle stays in `order` (skipped by
    /// `nodes`) until the caller prunes the order once for the whole batch.
    pub(super) fn release(&mut self, id: NodeId) -> HullResult<FaceNode> {
        let node = self
            .arena
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(HullError::DeadNode(id))?;
        self.free.push(id);
        Ok(node)
    }

    /// Incremental mean after a face was added; `count` includes it.
    pub(super) fn update_centroid(&mut self, center: Vector3<f64>, count: usize) {
        self.centroid += (center - self.centroid) / count as f64;
    }

    /// Inverse of `update_centroid`; `count` is the face count before removal.
    pub(super) fn rollback_centroid(&mut self, center: Vector3<f64>, count: usize) {
        if count <= 1 {
            self.centroid = Vector3::zeros();
            return;
        }
        let c = count as f64;
        self.centroid = (self.centroid * c - center) / (c - 1.0);
    }

    /// Link two live faces both ways.
    pub(super) fn link(&mut self, a: NodeId, b: NodeId) -> HullResult<()> {
        self.node_mut(a)?.add_neighbor(b)?;
        self.node_mut(b)?.add_neighbor(a)
    }

    /// Re-orient every live normal against the current centroid.
    pub(super) fn refresh_normals(&mut self) {
        let centroid = self.centroid;
        for node in self.arena.iter_mut().flatten() {
            node.set_normal(centroid);
        }
    }
}
