//! Triangle and segment records over `Vector3<f64>` points.

use nalgebra::Vector3;

/// Ordered triple of points `(a, b, c)`.
///
/// The order fixes the sign of `plane_normal` and the edge order used by
/// `edges`; it carries no outward/inward meaning on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Vector3<f64>; 3] {
        [self.a, self.b, self.c]
    }

    /// Mean of the three vertices.
    #[inline]
    pub fn gravity_center(&self) -> Vector3<f64> {
        (self.a + self.b + self.c) / 3.0
    }

    /// Unnormalized `(b - a) × (c - a)`; length is twice the area.
    #[inline]
    pub fn plane_normal(&self) -> Vector3<f64> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.plane_normal().norm()
    }

    /// Exact vertex membership.
    #[inline]
    pub fn has_vert(&self, p: &Vector3<f64>) -> bool {
        self.a == *p || self.b == *p || self.c == *p
    }

    /// Edges in the fixed order (a,b), (b,c), (c,a).
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Same vertex set, any order.
    pub fn same_vertices(&self, other: &Triangle) -> bool {
        other.vertices().iter().all(|v| self.has_vert(v))
            && self.vertices().iter().all(|v| other.has_vert(v))
    }

    /// Same vertices with `b` and `c` swapped (flips `plane_normal`).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }
}

/// Unordered pair of points bounding a triangle.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn has_endpoint(&self, p: &Vector3<f64>) -> bool {
        self.a == *p || self.b == *p
    }

    /// True when at least one endpoint coincides (exact).
    #[inline]
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        self.has_endpoint(&other.a) || self.has_endpoint(&other.b)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Six times the signed volume of the tetrahedron `(p, a, b, c)`:
/// `(a - p) · ((b - p) × (c - p))`.
///
/// Positive when `p` lies behind the plane of `(a, b, c)` with respect to its
/// right-hand normal.
#[inline]
pub fn signed_volume6(
    p: Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> f64 {
    (a - p).dot(&(b - p).cross(&(c - p)))
}
