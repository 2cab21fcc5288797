//! Read-only views of a hull: triangle lists for renderers, indexed meshes,
//! closure check and simple measures.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::geom3::{signed_volume6, Triangle};

use super::aggregate::Hull;
use super::error::{HullError, HullResult};

/// Receiver for the ordered triangle list (a renderer, an exporter, ...).
pub trait TriangleSink {
    fn triangle(&mut self, tri: &Triangle);
}

impl TriangleSink for Vec<Triangle> {
    fn triangle(&mut self, tri: &Triangle) {
        self.push(*tri);
    }
}

impl Hull {
    /// Hand every live face's triangle to `sink`, in node order.
    pub fn draw<S: TriangleSink + ?Sized>(&self, sink: &mut S) {
        for node in self.nodes() {
            sink.triangle(node.triangle());
        }
    }

    /// Triangles in node order (vertex order as built, not normalized).
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut out = Vec::with_capacity(self.face_count());
        self.draw(&mut out);
        out
    }

    /// Deduplicated vertices (first-seen order) and outward-wound index
    /// triples, one per face in node order.
    pub fn to_indexed_mesh(&self) -> (Vec<Vector3<f64>>, Vec<[usize; 3]>) {
        let mut verts: Vec<Vector3<f64>> = Vec::new();
        let mut index: HashMap<[u64; 3], usize> = HashMap::new();
        let mut faces = Vec::with_capacity(self.face_count());
        for node in self.nodes() {
            let tri = node.outward_triangle();
            let ids = tri.vertices().map(|v| {
                let key = [key_bits(v.x), key_bits(v.y), key_bits(v.z)];
                *index.entry(key).or_insert_with(|| {
                    verts.push(v);
                    verts.len() - 1
                })
            });
            faces.push(ids);
        }
        (verts, faces)
    }

    /// Every live face has three present, reciprocal slots whose faces share
    /// an edge with it.
    pub fn check_closed(&self) -> HullResult<()> {
        for node in self.nodes() {
            if !node.is_complete() {
                return Err(HullError::OpenFace(node.id()));
            }
            for n in node.present_neighbors() {
                let other = self.node(n)?;
                if !other.has_neighbor(node.id()) {
                    return Err(HullError::OpenFace(node.id()));
                }
                node.common_edge(other)?;
            }
        }
        Ok(())
    }

    /// Enclosed volume, summing tetrahedra against the centroid.
    pub fn volume(&self) -> f64 {
        let c = self.centroid();
        self.nodes()
            .map(|n| {
                let t = n.outward_triangle();
                signed_volume6(c, t.a, t.b, t.c) / 6.0
            })
            .sum()
    }

    pub fn surface_area(&self) -> f64 {
        self.nodes().map(|n| n.triangle().area()).sum()
    }
}

/// Bit pattern with `-0.0` folded onto `0.0`, matching `==` on coordinates.
#[inline]
fn key_bits(x: f64) -> u64 {
    (x + 0.0).to_bits()
}
