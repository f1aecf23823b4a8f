//! Angle-unit adapter binding vectors to a host angle convention
//!
//! All trigonometry inside the crate runs in radians. A host that reports
//! angles in another unit binds an [`AngleAdapter`] to the vectors it creates;
//! `heading`/`angle_between` then convert their results outward and
//! `set_heading`/`rotate` convert their inputs inward. Vectors without an
//! adapter ("plain" vectors) pass angles through unchanged.
//!
//! The crate never stores a global angle mode. [`AngleMode`] is only a
//! convenient way for a host to pick one of the built-in conversions.

use super::units::{Degrees, Radians};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Conversion between the native unit (radians) and a host unit.
pub type AngleFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Pair of angle conversions bound to a vector at construction.
///
/// Cloning an adapter shares the same conversion closures, so copies of an
/// adapted vector stay on the same binding (see [`AngleAdapter::shares_binding`]).
#[derive(Clone)]
pub struct AngleAdapter {
    to_external: AngleFn,
    to_native: AngleFn,
}

impl AngleAdapter {
    /// Bind a custom conversion pair.
    ///
    /// # Arguments
    /// * `to_external` - Radians → host unit
    /// * `to_native` - Host unit → radians
    pub fn new<E, N>(to_external: E, to_native: N) -> Self
    where
        E: Fn(f64) -> f64 + Send + Sync + 'static,
        N: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            to_external: Arc::new(to_external),
            to_native: Arc::new(to_native),
        }
    }

    /// Adapter reporting and accepting angles in degrees.
    pub fn degrees() -> Self {
        Self::new(
            |rad| Radians::new(rad).to_degrees().value(),
            |deg| Degrees::new(deg).to_radians().value(),
        )
    }

    /// Adapter for a configured mode, `None` when the mode is already native.
    pub fn for_mode(mode: AngleMode) -> Option<Self> {
        match mode {
            AngleMode::Radians => None,
            AngleMode::Degrees => Some(Self::degrees()),
        }
    }

    /// Convert a native (radian) angle to the host unit.
    #[inline]
    pub fn to_external(&self, angle: f64) -> f64 {
        (self.to_external)(angle)
    }

    /// Convert a host-unit angle to radians.
    #[inline]
    pub fn to_native(&self, angle: f64) -> f64 {
        (self.to_native)(angle)
    }

    /// True when both adapters carry the very same conversion closures.
    pub fn shares_binding(&self, other: &AngleAdapter) -> bool {
        Arc::ptr_eq(&self.to_external, &other.to_external)
            && Arc::ptr_eq(&self.to_native, &other.to_native)
    }
}

impl fmt::Debug for AngleAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AngleAdapter")
            .field("half_turn", &self.to_external(std::f64::consts::PI))
            .finish()
    }
}

/// Host angle convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Native unit, no conversion
    #[default]
    Radians,
    /// Degrees, converted at the adapter boundary
    Degrees,
}

impl AngleMode {
    /// Adapter implementing this mode (`None` for radians).
    pub fn adapter(self) -> Option<AngleAdapter> {
        AngleAdapter::for_mode(self)
    }

    /// Lowercase mode name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Radians => "radians",
            Self::Degrees => "degrees",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`AngleMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown angle mode '{0}', expected 'radians' or 'degrees'")]
pub struct ParseAngleModeError(String);

impl FromStr for AngleMode {
    type Err = ParseAngleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radians" | "rad" => Ok(Self::Radians),
            "degrees" | "deg" => Ok(Self::Degrees),
            _ => Err(ParseAngleModeError(s.to_string())),
        }
    }
}
