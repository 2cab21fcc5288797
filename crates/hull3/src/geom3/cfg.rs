//! Tolerance defaults for 3D hull construction (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the crate: no tolerance juggling at
//!   call sites. `VISIBILITY_EPS` is absolute and assumes O(1) inputs;
//!   `DEGENERACY_EPS` is relative and holds at any scale.

/// Visibility/membership tolerance `h`: a point is outside a face when its
/// signed distance along the outward normal exceeds this.
pub const VISIBILITY_EPS: f64 = 1e-10;
/// Bootstrap rejects inputs whose extremal triangle or tetrahedron is flatter
/// than this, measured scale-free: squared sine of the angle at p0, and squared
/// plane distance of p3 over the squared x-extent.
pub(crate) const DEGENERACY_EPS: f64 = 1e-20;
