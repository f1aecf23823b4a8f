//! Argument normalization for vector operations
//!
//! Every operation accepts another vector, a sequence of up to three numbers,
//! or up to three positional scalars. [`VectorArg`] captures which of those
//! shapes the caller used so each operation can apply its own fill rule:
//!
//! | Rule | Missing positions | Used by |
//! |------|-------------------|---------|
//! | [`VectorArg::zero_filled`] | 0 | `set`, `add`, `sub`, `equals`, `dot`, `lerp`, `cross`, `dist`, `reflect`, `slerp` |
//! | [`VectorArg::axis_operands`] | untouched; one value broadcasts | `mult`, `div`, `rem` |

use super::vector::Vector;
use nalgebra::Vector3;

/// A value-like argument in one of the accepted call shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorArg {
    /// Components of another vector
    Vector([f64; 3]),
    /// A sequence or positional scalars; only the first `len` values were given
    Values {
        /// Given values, unused positions hold 0
        values: [f64; 3],
        /// Number of values given (0..=3)
        len: usize,
    },
}

impl VectorArg {
    /// No argument at all
    pub const EMPTY: VectorArg = VectorArg::Values {
        values: [0.0; 3],
        len: 0,
    };

    /// Build from a slice, keeping at most the first three values.
    pub fn from_slice(values: &[f64]) -> Self {
        let len = values.len().min(3);
        let mut out = [0.0; 3];
        out[..len].copy_from_slice(&values[..len]);
        VectorArg::Values { values: out, len }
    }

    /// True when the argument came from a vector.
    pub fn is_vector(&self) -> bool {
        matches!(self, VectorArg::Vector(_))
    }

    /// Number of components the caller supplied (3 for vectors).
    pub fn len(&self) -> usize {
        match self {
            VectorArg::Vector(_) => 3,
            VectorArg::Values { len, .. } => (*len).min(3),
        }
    }

    /// True when no component was supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Components with missing or non-finite positions read as 0.
    pub fn zero_filled(&self) -> [f64; 3] {
        let raw = match *self {
            VectorArg::Vector(c) => c,
            VectorArg::Values { values, len } => {
                let len = len.min(3);
                let mut out = [0.0; 3];
                out[..len].copy_from_slice(&values[..len]);
                out
            }
        };
        raw.map(|v| if v.is_finite() { v } else { 0.0 })
    }

    /// Per-axis operands for scaling-style operations.
    ///
    /// A single value broadcasts to all three axes, two values touch x and y
    /// only, and `None` marks an axis the operation must leave alone.
    pub fn axis_operands(&self) -> [Option<f64>; 3] {
        match *self {
            VectorArg::Vector(c) => c.map(Some),
            VectorArg::Values { values, len } => match len {
                0 => [None; 3],
                1 => [Some(values[0]); 3],
                2 => [Some(values[0]), Some(values[1]), None],
                _ => values.map(Some),
            },
        }
    }

    /// True when every supplied component is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            VectorArg::Vector(c) => c.iter().all(|v| v.is_finite()),
            VectorArg::Values { values, len } => {
                values[..(*len).min(3)].iter().all(|v| v.is_finite())
            }
        }
    }
}

impl Default for VectorArg {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<()> for VectorArg {
    fn from((): ()) -> Self {
        Self::EMPTY
    }
}

impl From<f64> for VectorArg {
    fn from(v: f64) -> Self {
        VectorArg::Values {
            values: [v, 0.0, 0.0],
            len: 1,
        }
    }
}

impl From<(f64, f64)> for VectorArg {
    fn from((x, y): (f64, f64)) -> Self {
        VectorArg::Values {
            values: [x, y, 0.0],
            len: 2,
        }
    }
}

impl From<(f64, f64, f64)> for VectorArg {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        VectorArg::Values {
            values: [x, y, z],
            len: 3,
        }
    }
}

impl From<[f64; 1]> for VectorArg {
    fn from(v: [f64; 1]) -> Self {
        Self::from_slice(&v)
    }
}

impl From<[f64; 2]> for VectorArg {
    fn from(v: [f64; 2]) -> Self {
        Self::from_slice(&v)
    }
}

impl From<[f64; 3]> for VectorArg {
    fn from(v: [f64; 3]) -> Self {
        Self::from_slice(&v)
    }
}

impl From<&[f64]> for VectorArg {
    fn from(v: &[f64]) -> Self {
        Self::from_slice(v)
    }
}

impl From<&Vector> for VectorArg {
    fn from(v: &Vector) -> Self {
        VectorArg::Vector([v.x, v.y, v.z])
    }
}

impl From<&mut Vector> for VectorArg {
    fn from(v: &mut Vector) -> Self {
        VectorArg::Vector([v.x, v.y, v.z])
    }
}

impl From<Vector> for VectorArg {
    fn from(v: Vector) -> Self {
        VectorArg::from(&v)
    }
}

impl From<Vector3<f64>> for VectorArg {
    fn from(v: Vector3<f64>) -> Self {
        VectorArg::Vector([v.x, v.y, v.z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(VectorArg::from(()).len(), 0);
        assert!(VectorArg::from(()).is_empty());
        assert_eq!(VectorArg::from(2.0).len(), 1);
        assert_eq!(VectorArg::from((1.0, 2.0)).len(), 2);
        assert_eq!(VectorArg::from([1.0, 2.0, 3.0]).len(), 3);
        assert!(VectorArg::from(&Vector::new(1.0, 2.0, 3.0)).is_vector());
    }

    #[test]
    fn test_long_sequence_truncates() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let arg = VectorArg::from(values.as_slice());
        assert_eq!(arg.len(), 3);
        assert_eq!(arg.zero_filled(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zero_fill() {
        assert_eq!(VectorArg::from(5.0).zero_filled(), [5.0, 0.0, 0.0]);
        assert_eq!(VectorArg::from([1.0, 2.0]).zero_filled(), [1.0, 2.0, 0.0]);
        assert_eq!(VectorArg::EMPTY.zero_filled(), [0.0; 3]);
        assert_eq!(
            VectorArg::from((f64::NAN, f64::INFINITY, 3.0)).zero_filled(),
            [0.0, 0.0, 3.0]
        );
    }

    #[test]
    fn test_axis_operands() {
        assert_eq!(VectorArg::EMPTY.axis_operands(), [None; 3]);
        assert_eq!(VectorArg::from(2.0).axis_operands(), [Some(2.0); 3]);
        assert_eq!(VectorArg::from([2.0]).axis_operands(), [Some(2.0); 3]);
        assert_eq!(
            VectorArg::from((2.0, 3.0)).axis_operands(),
            [Some(2.0), Some(3.0), None]
        );
        assert_eq!(
            VectorArg::from(&Vector::new(1.0, 0.0, 0.0)).axis_operands(),
            [Some(1.0), Some(0.0), Some(0.0)]
        );
    }

    #[test]
    fn test_finiteness_only_checks_given_values() {
        assert!(VectorArg::from((1.0, 2.0)).is_finite());
        assert!(!VectorArg::from([1.0, f64::NAN]).is_finite());
        assert!(!VectorArg::Vector([0.0, 0.0, f64::INFINITY]).is_finite());
    }
}
