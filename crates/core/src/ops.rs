//! Non-mutating counterparts of the [`Vector`] operations
//!
//! Each transforming operation comes in two forms:
//! - `op(v, ..)` copies `v` (keeping its angle binding), applies the
//!   operation to the copy, and returns it. Inputs are never modified.
//! - `op_into(v, .., target)` writes `v`'s components into an existing
//!   `target`, applies the operation there, and returns `target`. Useful in
//!   hot loops that want to avoid allocating; `target` keeps its own binding.
//!
//! ```
//! use vector_core::{ops, Vector};
//!
//! let a = Vector::new(1.0, 2.0, 3.0);
//! let b = Vector::new(1.0, 1.0, 1.0);
//! let sum = ops::add(&a, &b);
//! assert_eq!(sum.array(), [2.0, 3.0, 4.0]);
//! assert_eq!(a.array(), [1.0, 2.0, 3.0]);
//!
//! let mut out = Vector::zero();
//! ops::sub_into(&a, &b, &mut out);
//! assert_eq!(out.array(), [0.0, 1.0, 2.0]);
//! ```
//!
//! Queries (`mag`, `dot`, `heading`, ...) simply forward to the instance
//! method; they exist so call sites can stay in one style.

use crate::core_types::args::VectorArg;
use crate::core_types::vector::Vector;

#[inline]
fn apply(v: &Vector, op: impl FnOnce(&mut Vector)) -> Vector {
    let mut out = v.copy();
    op(&mut out);
    out
}

#[inline]
fn apply_into<'t>(v: &Vector, target: &'t mut Vector, op: impl FnOnce(&mut Vector)) -> &'t mut Vector {
    target.assign(v.array_raw());
    op(&mut *target);
    target
}

/// Static copy.
pub fn copy(v: &Vector) -> Vector {
    v.copy()
}

// ============================================================================
// COMPONENT-WISE ARITHMETIC
// ============================================================================

/// `v + other`
pub fn add(v: &Vector, other: impl Into<VectorArg>) -> Vector {
    apply(v, |out| {
        out.add(other);
    })
}

/// `v + other` into `target`
pub fn add_into<'t>(v: &Vector, other: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.add(other);
    })
}

/// `v - other`
pub fn sub(v: &Vector, other: impl Into<VectorArg>) -> Vector {
    apply(v, |out| {
        out.sub(other);
    })
}

/// `v - other` into `target`
pub fn sub_into<'t>(v: &Vector, other: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.sub(other);
    })
}

/// Component-wise product, see [`Vector::mult`].
pub fn mult(v: &Vector, factor: impl Into<VectorArg>) -> Vector {
    apply(v, |out| {
        out.mult(factor);
    })
}

/// Component-wise product into `target`
pub fn mult_into<'t>(v: &Vector, factor: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.mult(factor);
    })
}

/// Component-wise quotient, see [`Vector::div`]. A rejected division returns
/// an unchanged copy and logs a warning.
pub fn div(v: &Vector, divisor: impl Into<VectorArg>) -> Vector {
    apply(v, |out| {
        out.div(divisor);
    })
}

/// Component-wise quotient into `target`
pub fn div_into<'t>(v: &Vector, divisor: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.div(divisor);
    })
}

/// Component-wise remainder, see [`Vector::rem`].
pub fn rem(v: &Vector, divisor: impl Into<VectorArg>) -> Vector {
    apply(v, |out| {
        out.rem(divisor);
    })
}

/// Component-wise remainder into `target`
pub fn rem_into<'t>(v: &Vector, divisor: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.rem(divisor);
    })
}

/// Exact component equality.
pub fn equals(v: &Vector, other: impl Into<VectorArg>) -> bool {
    v.equals(other)
}

/// Components as `[x, y, z]`.
pub fn array(v: &Vector) -> [f64; 3] {
    v.array()
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Magnitude
pub fn mag(v: &Vector) -> f64 {
    v.mag()
}

/// Squared magnitude
pub fn mag_sq(v: &Vector) -> f64 {
    v.mag_sq()
}

/// Dot product
pub fn dot(v: &Vector, other: impl Into<VectorArg>) -> f64 {
    v.dot(other)
}

/// Cross product, bound like `v`.
pub fn cross(v: &Vector, other: impl Into<VectorArg>) -> Vector {
    v.cross(other)
}

/// Cross product into `target`
pub fn cross_into<'t>(v: &Vector, other: impl Into<VectorArg>, target: &'t mut Vector) -> &'t mut Vector {
    target.assign(v.cross(other).array_raw())
}

/// Euclidean distance
pub fn dist(v: &Vector, other: impl Into<VectorArg>) -> f64 {
    v.dist(other)
}

/// Heading in `v`'s angle unit
pub fn heading(v: &Vector) -> f64 {
    v.heading()
}

/// Signed angle from `v` to `other` in `v`'s angle unit
pub fn angle_between(v: &Vector, other: impl Into<VectorArg>) -> f64 {
    v.angle_between(other)
}

/// `v` rotated by `angle` (in `v`'s angle unit)
pub fn rotate(v: &Vector, angle: f64) -> Vector {
    apply(v, |out| {
        out.rotate(angle);
    })
}

/// `v` rotated into `target`. `angle` is read in `target`'s angle unit.
pub fn rotate_into<'t>(v: &Vector, angle: f64, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.rotate(angle);
    })
}

/// Unit-length copy of `v` (zero stays zero)
pub fn normalize(v: &Vector) -> Vector {
    apply(v, |out| {
        out.normalize();
    })
}

/// Unit-length `v` into `target`
pub fn normalize_into<'t>(v: &Vector, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.normalize();
    })
}

/// Copy of `v` with magnitude capped at `max`
pub fn limit(v: &Vector, max: f64) -> Vector {
    apply(v, |out| {
        out.limit(max);
    })
}

/// `v` capped at `max` into `target`
pub fn limit_into<'t>(v: &Vector, max: f64, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.limit(max);
    })
}

/// Copy of `v` scaled to magnitude `len`
pub fn set_mag(v: &Vector, len: f64) -> Vector {
    apply(v, |out| {
        out.set_mag(len);
    })
}

/// `v` scaled to `len` into `target`
pub fn set_mag_into<'t>(v: &Vector, len: f64, target: &'t mut Vector) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.set_mag(len);
    })
}

/// Linear interpolation from `v` toward `target_value`
pub fn lerp(v: &Vector, target_value: impl Into<VectorArg>, amt: f64) -> Vector {
    apply(v, |out| {
        out.lerp(target_value, amt);
    })
}

/// Linear interpolation into `target`
pub fn lerp_into<'t>(
    v: &Vector,
    target_value: impl Into<VectorArg>,
    amt: f64,
    target: &'t mut Vector,
) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.lerp(target_value, amt);
    })
}

/// Spherical interpolation from `v` toward `target_value`
pub fn slerp(v: &Vector, target_value: impl Into<VectorArg>, amt: f64) -> Vector {
    apply(v, |out| {
        out.slerp(target_value, amt);
    })
}

/// Spherical interpolation into `target`
pub fn slerp_into<'t>(
    v: &Vector,
    target_value: impl Into<VectorArg>,
    amt: f64,
    target: &'t mut Vector,
) -> &'t mut Vector {
    apply_into(v, target, |out| {
        out.slerp(target_value, amt);
    })
}

/// `incident` reflected about `normal`
pub fn reflect(incident: &Vector, normal: impl Into<VectorArg>) -> Vector {
    apply(incident, |out| {
        out.reflect(normal);
    })
}

/// `incident` reflected about `normal` into `target`
pub fn reflect_into<'t>(
    incident: &Vector,
    normal: impl Into<VectorArg>,
    target: &'t mut Vector,
) -> &'t mut Vector {
    apply_into(incident, target, |out| {
        out.reflect(normal);
    })
}
