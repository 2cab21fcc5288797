//! One incremental step (`expand`) and the driver loop around it.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::geom3::{cfg::VISIBILITY_EPS, Segment};

use super::aggregate::{ContourEntry, Hull};
use super::error::{HullError, HullResult};
use super::node::NodeId;

impl Hull {
    /// Bootstrap and drain to convergence.
    pub fn build(points: &[Vector3<f64>]) -> HullResult<Self> {
        let mut hull = Self::new(points)?;
        hull.expand_loop(usize::MAX)?;
        Ok(hull)
    }

    /// Call `expand` until it returns false or `max_iterations` calls ran.
    ///
    /// Returns the number of steps that made progress. The cap is a safety
    /// valve only; a capped hull simply has points left outside.
    pub fn expand_loop(&mut self, max_iterations: usize) -> HullResult<usize> {
        let mut steps = 0;
        for itr in 0..max_iterations {
            tracing::trace!(itr, outside = self.outside.len(), "expand");
            if !self.expand()? {
                break;
            }
            steps += 1;
        }
        Ok(steps)
    }

    /// Admit one exterior point.
    ///
    /// Returns `Ok(false)` when no point is left outside (calling again is
    /// fine and changes nothing), `Ok(true)` after a face fan was built.
    ///
    /// Errors are adjacency invariant violations; the hull is left mid-step.
    pub fn expand(&mut self) -> HullResult<bool> {
        self.tagged.clear();
        self.contour.clear();
        let outside = std::mem::take(&mut self.outside);
        let remaining: Vec<Vector3<f64>> =
            outside.into_iter().filter(|p| !self.contains(p)).collect();
        self.outside = remaining;
        if self.outside.is_empty() {
            return Ok(false);
        }
        let Some((root, apex)) = self.find_apex() else {
            return Ok(false);
        };

        self.tag_visible(root, &apex)?;
        tracing::debug!(
            tagged = self.tagged.len(),
            contour = self.contour.len(),
            faces = self.order.len(),
            "visible region"
        );

        self.remove_tagged()?;
        self.patch(&apex)?;
        self.refresh_normals();

        if let Some(i) = self.outside.iter().position(|p| *p == apex) {
            self.outside.swap_remove(i);
        }
        Ok(true)
    }

    /// First face (iteration order) seeing some outside point, and the point
    /// it ranks farthest.
    fn find_apex(&self) -> Option<(NodeId, Vector3<f64>)> {
        for node in self.nodes() {
            let mut best: Option<(Vector3<f64>, f64)> = None;
            for p in &self.outside {
                if node.signed_distance(p) <= 0.0 {
                    continue;
                }
                let k = node.dist_factor(p);
                if best.map_or(true, |(_, bk)| k > bk) {
                    best = Some((*p, k));
                }
            }
            if let Some((apex, _)) = best {
                return Some((node.id(), apex));
            }
        }
        None
    }

    /// Flood from `root` over faces that see `apex`; faces that don't see it
    /// contribute the edge they share with the face that reached them.
    fn tag_visible(&mut self, root: NodeId, apex: &Vector3<f64>) -> HullResult<()> {
        let mut seen: HashSet<NodeId> = HashSet::new();
        seen.insert(root);
        self.tagged.push(root);
        let mut stack: Vec<(NodeId, NodeId)> = self
            .node(root)?
            .present_neighbors()
            .map(|n| (n, root))
            .collect();
        stack.reverse();

        while let Some((curr, from)) = stack.pop() {
            if seen.contains(&curr) {
                continue;
            }
            let node = self.node(curr)?;
            if node.signed_distance(apex) > VISIBILITY_EPS {
                let next: Vec<(NodeId, NodeId)> = node
                    .present_neighbors()
                    .filter(|n| !seen.contains(n))
                    .map(|n| (n, curr))
                    .collect();
                seen.insert(curr);
                self.tagged.push(curr);
                stack.extend(next.into_iter().rev());
            } else {
                let edge = node.common_edge(self.node(from)?)?;
                let entry = ContourEntry { node: curr, edge };
                if !self.contour.contains(&entry) {
                    self.contour.push(entry);
                }
            }
        }
        Ok(())
    }

    /// Unlink every tagged face from its neighbors and drop it.
    fn remove_tagged(&mut self) -> HullResult<()> {
        let tagged = std::mem::take(&mut self.tagged);
        let mut live = self.order.len();
        for &t in &tagged {
            let neighbors: Vec<NodeId> = self.node(t)?.present_neighbors().collect();
            for n in neighbors {
                self.node_mut(n)?.remove_neighbor(t)?;
            }
            let node = self.release(t)?;
            self.rollback_centroid(node.center(), live);
            live -= 1;
        }
        let gone: HashSet<NodeId> = tagged.iter().copied().collect();
        self.order.retain(|id| !gone.contains(id));
        self.tagged = tagged;
        Ok(())
    }

    /// Fan new faces from `apex` over the contour and stitch them in.
    fn patch(&mut self, apex: &Vector3<f64>) -> HullResult<()> {
        let contour = self.contour.clone();
        let mut cone: Vec<(NodeId, Segment)> = Vec::with_capacity(contour.len());
        for ContourEntry { node: kept, edge } in contour {
            let curr = self.alloc(*apex, edge.a, edge.b);
            self.link(curr, kept)?;
            for &(sibling, sib_edge) in &cone {
                if !edge.shares_endpoint(&sib_edge) {
                    continue;
                }
                if self.node(sibling)?.has_neighbor(curr) || self.node(curr)?.has_neighbor(sibling)
                {
                    return Err(HullError::AlreadyLinked {
                        node: sibling,
                        pair: curr,
                    });
                }
                self.link(sibling, curr)?;
            }
            cone.push((curr, edge));
            let center = self.node(curr)?.center();
            let count = self.order.len();
            self.update_centroid(center, count);
        }
        Ok(())
    }
}
