//! 3D primitives for hull construction.
//!
//! Purpose
//! - Points are plain `Vector3<f64>`; triangles and segments are small `Copy`
//!   records over them.
//!
//! Conventions
//! - Point equality is exact. It is used for topology bookkeeping only (which
//!   edge two faces share, which fan faces touch), never as a geometric
//!   predicate.
//! - `Segment` is unordered: `(a,b) == (b,a)`.
//! - Tolerances live in `cfg` and are fixed constants.

pub mod cfg;
mod types;

pub use types::{signed_volume6, Segment, Triangle};

#[cfg(test)]
mod tests;
