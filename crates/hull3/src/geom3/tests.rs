use super::*;
use nalgebra::vector;

fn unit_tri() -> Triangle {
    Triangle::new(
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
    )
}

#[test]
fn gravity_center_and_normal() {
    let t = unit_tri();
    let g = t.gravity_center();
    assert!((g - vector![1.0 / 3.0, 1.0 / 3.0, 0.0]).norm() < 1e-12);
    // (b-a) x (c-a) = e_x x e_y = e_z
    assert_eq!(t.plane_normal(), vector![0.0, 0.0, 1.0]);
    assert!((t.area() - 0.5).abs() < 1e-12);
    assert_eq!(t.flipped().plane_normal(), vector![0.0, 0.0, -1.0]);
}

#[test]
fn has_vert_is_exact() {
    let t = unit_tri();
    assert!(t.has_vert(&vector![1.0, 0.0, 0.0]));
    assert!(!t.has_vert(&vector![1.0 + 1e-15, 0.0, 0.0]));
}

#[test]
fn edges_follow_vertex_order() {
    let t = unit_tri();
    let [ab, bc, ca] = t.edges();
    assert_eq!(ab, Segment::new(t.a, t.b));
    assert_eq!(bc, Segment::new(t.b, t.c));
    assert_eq!(ca, Segment::new(t.c, t.a));
}

#[test]
fn segment_equality_is_unordered() {
    let p = vector![0.0, 0.0, 1.0];
    let q = vector![2.0, 0.0, 0.0];
    let r = vector![0.0, 3.0, 0.0];
    assert_eq!(Segment::new(p, q), Segment::new(q, p));
    assert_ne!(Segment::new(p, q), Segment::new(p, r));
    assert!(Segment::new(p, q).shares_endpoint(&Segment::new(r, q)));
    assert!(!Segment::new(p, q).shares_endpoint(&Segment::new(r, r)));
}

#[test]
fn same_vertices_ignores_order() {
    let t = unit_tri();
    let u = Triangle::new(t.c, t.a, t.b);
    assert!(t.same_vertices(&u));
    assert!(t.same_vertices(&t.flipped()));
    let w = Triangle::new(t.a, t.b, vector![0.0, 0.0, 1.0]);
    assert!(!t.same_vertices(&w));
}

#[test]
fn signed_volume_sign_convention() {
    let t = unit_tri();
    // right-hand normal is +z; a point below is "behind"
    assert!((signed_volume6(vector![0.0, 0.0, -1.0], t.a, t.b, t.c) - 1.0).abs() < 1e-12);
    assert!(signed_volume6(vector![0.0, 0.0, 1.0], t.a, t.b, t.c) < 0.0);
}
