//! Print face/vertex counts of hulls over a few seeded point clouds.
//!
//! Usage:
//!   cargo run -p hull3 --example sphere_hull -- ball
//!   cargo run -p hull3 --example sphere_hull -- sphere
//!
//! - ball mode: most points end up inside, hull stays small
//! - sphere mode: every point is a hull vertex (F = 2V - 4)

use hull3::rand3::{sample_in_ball, sample_on_sphere, ReplayToken};
use hull3::{Hull, Vec3};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ball".to_string());
    let sampler: fn(usize, f64, ReplayToken) -> Vec<Vec3<f64>> = match mode.as_str() {
        "ball" => sample_in_ball,
        "sphere" => sample_on_sphere,
        _ => {
            eprintln!("usage: sphere_hull [ball|sphere]");
            return;
        }
    };
    for i in 0..5 {
        let pts = sampler(200, 1.0, ReplayToken::new(2025, i));
        let mut hull = Hull::new(&pts).unwrap();
        let steps = hull.expand_loop(usize::MAX).unwrap();
        let (verts, faces) = hull.to_indexed_mesh();
        println!(
            "{mode} sample {i}: steps={steps}, V={}, F={}, volume={:.4}",
            verts.len(),
            faces.len(),
            hull.volume()
        );
    }
}
