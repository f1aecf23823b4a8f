//! Geometric operations on [`Vector`]
//!
//! Magnitudes, products, normalization, headings and rotation, and linear,
//! spherical, and reflective transforms. Angle inputs and outputs pass through
//! the vector's [`AngleAdapter`](crate::AngleAdapter) when one is bound; all
//! internal trigonometry is in radians.
//!
//! Mutating operations compute the new components first and store them only
//! when all three are finite. Otherwise the vector is left as it was and the
//! rejection is logged (or returned by the `try_*` form).

use crate::core_types::args::VectorArg;
use crate::core_types::error::VectorError;
use crate::core_types::units::Radians;
use crate::core_types::vector::Vector;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

impl Vector {
    // ========================================================================
    // CONSTRUCTION FROM ANGLES
    // ========================================================================

    /// Plain 2D vector pointing at `angle` with the given length.
    ///
    /// Accepts raw radians or any unit convertible to [`Radians`]:
    ///
    /// ```
    /// use vector_core::{core_types::Degrees, Vector};
    ///
    /// let v = Vector::from_angle(Degrees::new(90.0), 2.0);
    /// assert!(v.x.abs() < 1e-12);
    /// assert!((v.y - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_angle(angle: impl Into<Radians>, length: f64) -> Self {
        let angle = angle.into();
        Self::new(length * angle.cos(), length * angle.sin(), 0.0)
    }

    /// Plain 3D vector from spherical angles.
    ///
    /// `theta` is the polar angle measured from -y and `phi` the azimuth
    /// around y measured from +z.
    #[must_use]
    pub fn from_angles(theta: impl Into<Radians>, phi: impl Into<Radians>, length: f64) -> Self {
        let (theta, phi) = (theta.into(), phi.into());
        let (sin_theta, cos_theta) = (theta.sin(), theta.cos());
        let (sin_phi, cos_phi) = (phi.sin(), phi.cos());
        Self::new(
            length * sin_theta * sin_phi,
            -length * cos_theta,
            length * sin_theta * cos_phi,
        )
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Squared magnitude
    #[inline]
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude
    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Dot product; missing components of `other` read as 0.
    pub fn dot(&self, other: impl Into<VectorArg>) -> f64 {
        let [x, y, z] = other.into().zero_filled();
        self.x * x + self.y * y + self.z * z
    }

    /// Cross product as a new vector with this vector's angle binding.
    #[must_use]
    pub fn cross(&self, other: impl Into<VectorArg>) -> Vector {
        let [x, y, z] = other.into().zero_filled();
        self.derived(
            self.y * z - self.z * y,
            self.z * x - self.x * z,
            self.x * y - self.y * x,
        )
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: impl Into<VectorArg>) -> f64 {
        let [x, y, z] = other.into().zero_filled();
        Vector::new(x - self.x, y - self.y, z - self.z).mag()
    }

    // ========================================================================
    // ANGLE ADAPTER BOUNDARY
    // ========================================================================

    #[inline]
    fn external_angle(&self, radians: f64) -> f64 {
        match self.adapter() {
            Some(adapter) => adapter.to_external(radians),
            None => radians,
        }
    }

    #[inline]
    fn native_angle(&self, angle: f64) -> f64 {
        match self.adapter() {
            Some(adapter) => adapter.to_native(angle),
            None => angle,
        }
    }

    /// Angle of the vector in the xy-plane, in the bound angle unit.
    pub fn heading(&self) -> f64 {
        self.external_angle(self.y.atan2(self.x))
    }

    /// Point the vector at `angle` (bound angle unit) keeping its magnitude.
    /// z is unaffected, so only the xy-plane length is redistributed.
    pub fn set_heading(&mut self, angle: f64) -> &mut Self {
        let result = self.point_at("set_heading", self.native_angle(angle));
        self.warn_rejected(result)
    }

    /// Checked [`Vector::set_heading`].
    pub fn try_set_heading(&mut self, angle: f64) -> Result<&mut Self, VectorError> {
        self.point_at("set_heading", self.native_angle(angle))?;
        Ok(self)
    }

    /// Rotate in the xy-plane by `angle` (bound angle unit), keeping the
    /// magnitude. z is unaffected.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let result = self.point_at("rotate", self.native_angle(self.heading() + angle));
        self.warn_rejected(result)
    }

    /// Checked [`Vector::rotate`].
    pub fn try_rotate(&mut self, angle: f64) -> Result<&mut Self, VectorError> {
        self.point_at("rotate", self.native_angle(self.heading() + angle))?;
        Ok(self)
    }

    /// Redistribute the planar length along `radians`.
    fn point_at(&mut self, op: &'static str, radians: f64) -> Result<(), VectorError> {
        let m = self.x.hypot(self.y);
        self.commit(op, [m * radians.cos(), m * radians.sin(), self.z])
    }

    /// Signed angle to `other`, in the bound angle unit.
    ///
    /// The sign follows the z-component of the cross product (positive when
    /// it is 0). Returns NaN when either vector has zero magnitude.
    pub fn angle_between(&self, other: impl Into<VectorArg>) -> f64 {
        let other = Vector::from_arg(other);
        if self.mag_sq() * other.mag_sq() == 0.0 {
            return f64::NAN;
        }
        let u = self.cross(&other);
        let sign = if u.z == 0.0 { 1.0 } else { u.z.signum() };
        let angle = u.mag().atan2(self.dot(&other)) * sign;
        self.external_angle(angle)
    }

    // ========================================================================
    // MAGNITUDE
    // ========================================================================

    /// Scale to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.mag();
        if len == 0.0 {
            return self;
        }
        let result = self.commit("normalize", self.array_raw().map(|c| c / len));
        self.warn_rejected(result)
    }

    /// Rescale to exactly `max` when the magnitude exceeds it.
    pub fn limit(&mut self, max: f64) -> &mut Self {
        let m_sq = self.mag_sq();
        if m_sq <= max * max {
            return self;
        }
        let scale = max / m_sq.sqrt();
        let result = self.commit("limit", self.array_raw().map(|c| c * scale));
        self.warn_rejected(result)
    }

    /// Normalize, then scale to `len`. A zero vector stays zero.
    pub fn set_mag(&mut self, len: f64) -> &mut Self {
        let result = self.apply_set_mag(len);
        self.warn_rejected(result)
    }

    /// Checked [`Vector::set_mag`].
    pub fn try_set_mag(&mut self, len: f64) -> Result<&mut Self, VectorError> {
        self.apply_set_mag(len)?;
        Ok(self)
    }

    fn apply_set_mag(&mut self, len: f64) -> Result<(), VectorError> {
        if !len.is_finite() {
            return Err(VectorError::NonFinite { op: "set_mag" });
        }
        let m = self.mag();
        if m == 0.0 {
            return Ok(());
        }
        self.commit("set_mag", self.array_raw().map(|c| c / m * len))
    }

    // ========================================================================
    // INTERPOLATION & REFLECTION
    // ========================================================================

    /// Linear interpolation toward `target`: `self += (target - self) * amt`.
    pub fn lerp(&mut self, target: impl Into<VectorArg>, amt: f64) -> &mut Self {
        let result = self.apply_lerp(target.into(), amt);
        self.warn_rejected(result)
    }

    /// Checked [`Vector::lerp`].
    pub fn try_lerp(
        &mut self,
        target: impl Into<VectorArg>,
        amt: f64,
    ) -> Result<&mut Self, VectorError> {
        self.apply_lerp(target.into(), amt)?;
        Ok(self)
    }

    fn apply_lerp(&mut self, target: VectorArg, amt: f64) -> Result<(), VectorError> {
        let [x, y, z] = target.zero_filled();
        self.commit(
            "lerp",
            [
                self.x + (x - self.x) * amt,
                self.y + (y - self.y) * amt,
                self.z + (z - self.z) * amt,
            ],
        )
    }

    fn blend(&mut self, target: &Vector, amt: f64) -> Result<(), VectorError> {
        let keep = 1.0 - amt;
        self.commit(
            "slerp",
            [
                self.x * keep + target.x * amt,
                self.y * keep + target.y * amt,
                self.z * keep + target.z * amt,
            ],
        )
    }

    /// Spherical interpolation toward `target`, blending both heading and
    /// magnitude.
    ///
    /// Falls back to a linear blend when either vector is zero or when they
    /// are parallel. For opposite vectors the rotation axis is any vector
    /// orthogonal to `self`, preferring +z when both are planar.
    pub fn slerp(&mut self, target: impl Into<VectorArg>, amt: f64) -> &mut Self {
        let result = self.apply_slerp(target.into(), amt);
        self.warn_rejected(result)
    }

    /// Checked [`Vector::slerp`].
    pub fn try_slerp(
        &mut self,
        target: impl Into<VectorArg>,
        amt: f64,
    ) -> Result<&mut Self, VectorError> {
        self.apply_slerp(target.into(), amt)?;
        Ok(self)
    }

    fn apply_slerp(&mut self, target: VectorArg, amt: f64) -> Result<(), VectorError> {
        let target = Vector::from_arg(target);
        if amt == 0.0 {
            return Ok(());
        }
        if amt == 1.0 {
            self.set(&target);
            return Ok(());
        }

        let self_mag = self.mag();
        let target_mag = target.mag();
        if self_mag * target_mag == 0.0 {
            return self.blend(&target, amt);
        }

        let mut axis = self.cross(&target);
        let axis_mag = axis.mag();
        let theta = axis_mag.atan2(self.dot(&target));

        if axis_mag > 0.0 {
            axis.x /= axis_mag;
            axis.y /= axis_mag;
            axis.z /= axis_mag;
        } else if theta < FRAC_PI_2 {
            debug!("slerp: parallel vectors, blending linearly");
            return self.blend(&target, amt);
        } else if self.z == 0.0 && target.z == 0.0 {
            debug!("slerp: opposite planar vectors, rotating about +z");
            axis.set((0.0, 0.0, 1.0));
        } else if self.x != 0.0 {
            debug!("slerp: opposite vectors, rotating about (y, -x, 0)");
            axis.set((self.y, -self.x, 0.0)).normalize();
        } else {
            debug!("slerp: opposite vectors, rotating about +x");
            axis.set((1.0, 0.0, 0.0));
        }

        // axis is unit length, so ey has the same magnitude as self
        let ey = axis.cross(&*self);
        let mag_factor = (1.0 - amt) + amt * target_mag / self_mag;
        let cos_mult = mag_factor * (amt * theta).cos();
        let sin_mult = mag_factor * (amt * theta).sin();

        self.commit(
            "slerp",
            [
                self.x * cos_mult + ey.x * sin_mult,
                self.y * cos_mult + ey.y * sin_mult,
                self.z * cos_mult + ey.z * sin_mult,
            ],
        )
    }

    /// Reflect about the surface with the given normal (need not be unit
    /// length): `self -= 2 (self · n̂) n̂`.
    pub fn reflect(&mut self, normal: impl Into<VectorArg>) -> &mut Self {
        let result = self.apply_reflect(normal.into());
        self.warn_rejected(result)
    }

    /// Checked [`Vector::reflect`].
    pub fn try_reflect(&mut self, normal: impl Into<VectorArg>) -> Result<&mut Self, VectorError> {
        self.apply_reflect(normal.into())?;
        Ok(self)
    }

    fn apply_reflect(&mut self, normal: VectorArg) -> Result<(), VectorError> {
        let mut n = Vector::from_arg(normal);
        n.normalize();
        let d = 2.0 * self.dot(&n);
        self.commit(
            "reflect",
            [self.x - n.x * d, self.y - n.y * d, self.z - n.z * d],
        )
    }
}
