//! Vector value type for positions, directions, and velocities.
//!
//! [`Vector`] owns three `f64` components and an optional [`AngleAdapter`].
//! Component-wise operations mutate in place and return `&mut Self` so calls
//! can be chained:
//!
//! ```
//! use vector_core::Vector;
//!
//! let mut v = Vector::new(1.0, 2.0, 3.0);
//! v.add((1.0, 1.0, 1.0)).mult(2.0).sub([4.0]);
//! assert_eq!(v.array(), [0.0, 6.0, 8.0]);
//! ```
//!
//! Non-mutating counterparts live in [`crate::ops`].

use super::angle::{AngleAdapter, AngleMode};
use super::args::VectorArg;
use super::error::VectorError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// 2D/3D vector with optional angle-unit binding.
///
/// Components are plain public fields and may be written directly. The angle
/// binding is fixed at construction; [`Vector::copy`], `clone`, and every
/// operation that manufactures a new vector from this one keep it.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component (0 for 2D use)
    pub z: f64,
    #[serde(skip)]
    adapter: Option<AngleAdapter>,
}

impl Vector {
    /// Create a plain vector.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            adapter: None,
        }
    }

    /// Plain zero vector.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a vector bound to an angle adapter.
    #[must_use]
    pub fn adapted(adapter: AngleAdapter, x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            adapter: Some(adapter),
        }
    }

    /// Create a vector following a host angle mode (plain for radians).
    #[must_use]
    pub fn with_mode(mode: AngleMode, x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            adapter: mode.adapter(),
        }
    }

    /// Create a plain vector from any accepted call shape, missing
    /// components becoming 0.
    #[must_use]
    pub fn from_arg(arg: impl Into<VectorArg>) -> Self {
        let [x, y, z] = arg.into().zero_filled();
        Self::new(x, y, z)
    }

    /// New vector sharing this vector's angle binding.
    #[must_use]
    pub fn derived(&self, x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            adapter: self.adapter.clone(),
        }
    }

    /// Bound angle adapter, if any.
    #[inline]
    pub fn adapter(&self) -> Option<&AngleAdapter> {
        self.adapter.as_ref()
    }

    /// True for vectors bound to an angle adapter.
    #[inline]
    pub fn is_adapted(&self) -> bool {
        self.adapter.is_some()
    }

    #[inline]
    fn components_mut(&mut self) -> [&mut f64; 3] {
        [&mut self.x, &mut self.y, &mut self.z]
    }

    /// Overwrite components as given, bypassing the argument fill rules.
    #[inline]
    pub(crate) fn assign(&mut self, [x, y, z]: [f64; 3]) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Store `next` as the new components, refusing the whole update when
    /// any of them is not finite.
    pub(crate) fn commit(&mut self, op: &'static str, next: [f64; 3]) -> Result<(), VectorError> {
        if next.iter().any(|c| !c.is_finite()) {
            return Err(VectorError::NonFinite { op });
        }
        self.assign(next);
        Ok(())
    }

    /// Log a rejected update and hand `self` back for chaining.
    pub(crate) fn warn_rejected(&mut self, result: Result<(), VectorError>) -> &mut Self {
        if let Err(err) = result {
            warn!(op = err.op(), "{err}");
        }
        self
    }

    /// Assign all components; missing ones become 0.
    pub fn set(&mut self, source: impl Into<VectorArg>) -> &mut Self {
        self.assign(source.into().zero_filled())
    }

    /// Copy with identical components and angle binding.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Component-wise addition; missing components add 0. A sum that
    /// overflows is rejected with a warning.
    pub fn add(&mut self, other: impl Into<VectorArg>) -> &mut Self {
        let [x, y, z] = other.into().zero_filled();
        let result = self.commit("add", [self.x + x, self.y + y, self.z + z]);
        self.warn_rejected(result)
    }

    /// Component-wise subtraction; missing components subtract 0. A
    /// difference that overflows is rejected with a warning.
    pub fn sub(&mut self, other: impl Into<VectorArg>) -> &mut Self {
        let [x, y, z] = other.into().zero_filled();
        let result = self.commit("sub", [self.x - x, self.y - y, self.z - z]);
        self.warn_rejected(result)
    }

    /// Multiply component-wise, logging a warning and leaving the vector
    /// unchanged when the factor or the product is not finite.
    ///
    /// A single scalar (or one-element sequence) scales all three axes, two
    /// values scale x and y, and a vector multiplies component by component.
    pub fn mult(&mut self, factor: impl Into<VectorArg>) -> &mut Self {
        let result = self.apply_mult(factor.into());
        self.warn_rejected(result)
    }

    /// Checked [`Vector::mult`].
    pub fn try_mult(&mut self, factor: impl Into<VectorArg>) -> Result<&mut Self, VectorError> {
        self.apply_mult(factor.into())?;
        Ok(self)
    }

    fn apply_mult(&mut self, factor: VectorArg) -> Result<(), VectorError> {
        if !factor.is_finite() {
            return Err(VectorError::NonFinite { op: "mult" });
        }
        let mut next = self.array_raw();
        for (c, f) in next.iter_mut().zip(factor.axis_operands()) {
            if let Some(f) = f {
                *c *= f;
            }
        }
        self.commit("mult", next)
    }

    /// Divide component-wise, logging a warning and leaving the vector
    /// unchanged on a zero or non-finite divisor.
    ///
    /// Shapes follow [`Vector::mult`]. When dividing by a vector whose z is 0
    /// while this vector's z is also 0, the pair is treated as 2D and z is
    /// left alone instead of being rejected.
    pub fn div(&mut self, divisor: impl Into<VectorArg>) -> &mut Self {
        let result = self.apply_div(divisor.into());
        self.warn_rejected(result)
    }

    /// Checked [`Vector::div`].
    pub fn try_div(&mut self, divisor: impl Into<VectorArg>) -> Result<&mut Self, VectorError> {
        self.apply_div(divisor.into())?;
        Ok(self)
    }

    fn apply_div(&mut self, divisor: VectorArg) -> Result<(), VectorError> {
        if !divisor.is_finite() {
            return Err(VectorError::NonFinite { op: "div" });
        }
        let mut operands = divisor.axis_operands();
        // TODO: replace the zero-z inference with an explicit 2D vector type
        if let VectorArg::Vector([_, _, dz]) = divisor {
            if dz == 0.0 && self.z == 0.0 {
                operands[2] = None;
            }
        }
        if operands.iter().flatten().any(|d| *d == 0.0) {
            return Err(VectorError::DivideByZero { op: "div" });
        }
        let mut next = self.array_raw();
        for (c, d) in next.iter_mut().zip(operands) {
            if let Some(d) = d {
                *c /= d;
            }
        }
        self.commit("div", next)
    }

    /// Component-wise remainder. Axes whose divisor is exactly 0 are left
    /// unchanged; a non-finite divisor logs a warning and changes nothing.
    pub fn rem(&mut self, divisor: impl Into<VectorArg>) -> &mut Self {
        let result = self.apply_rem(divisor.into());
        self.warn_rejected(result)
    }

    /// Checked [`Vector::rem`].
    pub fn try_rem(&mut self, divisor: impl Into<VectorArg>) -> Result<&mut Self, VectorError> {
        self.apply_rem(divisor.into())?;
        Ok(self)
    }

    fn apply_rem(&mut self, divisor: VectorArg) -> Result<(), VectorError> {
        if !divisor.is_finite() {
            return Err(VectorError::NonFinite { op: "rem" });
        }
        let mut next = self.array_raw();
        for (c, d) in next.iter_mut().zip(divisor.axis_operands()) {
            match d {
                Some(d) if d != 0.0 => *c %= d,
                _ => {}
            }
        }
        self.commit("rem", next)
    }

    /// Exact component equality, missing components of `other` read as 0.
    pub fn equals(&self, other: impl Into<VectorArg>) -> bool {
        let [x, y, z] = other.into().zero_filled();
        self.x == x && self.y == y && self.z == z
    }

    /// Components as `[x, y, z]`, non-finite ones reported as 0.
    pub fn array(&self) -> [f64; 3] {
        self.array_raw().map(|v| if v.is_finite() { v } else { 0.0 })
    }

    #[inline]
    pub(crate) fn array_raw(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Snap components within machine epsilon of zero to exactly 0.
    pub fn clamp_to_zero(&mut self) -> &mut Self {
        for c in self.components_mut() {
            if c.is_nan() || c.abs() <= f64::EPSILON {
                *c = 0.0;
            }
        }
        self
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("adapted", &self.is_adapted())
            .finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<&Vector> for Vector3<f64> {
    fn from(v: &Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        Vector3::from(&v)
    }
}

// ============================================================================
// OPERATORS (allocate a new vector that keeps the left operand's binding)
//
// Written with full paths so the operator traits never shadow the inherent
// `add`/`sub` methods in method-call position.
// ============================================================================

impl std::ops::Add<&Vector> for &Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Vector {
        self.derived(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl std::ops::Sub<&Vector> for &Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Vector {
        self.derived(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl std::ops::Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.derived(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        &self * rhs
    }
}

impl std::ops::Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.derived(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}
