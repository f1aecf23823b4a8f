//! Typed angles for constructors that take an explicit unit
//!
//! `Vector::from_angle` and `Vector::from_angles` accept anything that
//! converts into [`Radians`], so a caller holding degrees states the unit
//! instead of converting by hand. The degree adapter uses the same
//! conversions.
//!
//! ```
//! use vector_core::core_types::units::{Degrees, Radians};
//!
//! let r: Radians = Degrees::new(90.0).into();
//! assert!((r.value() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

/// Angle in radians, the unit all vector trigonometry runs in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Radians(f64);

impl Radians {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

/// Bare numbers are taken as radians.
impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}
