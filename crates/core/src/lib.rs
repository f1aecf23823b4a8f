//! Vector Core Library
//!
//! A 2D/3D vector value type for positions, directions, and velocities in
//! geometric computation.
//!
//! ## Overview
//!
//! - [`Vector`] - three `f64` components with chainable in-place operations
//! - [`VectorArg`] - the accepted call shapes (vector, sequence, scalars)
//!   and the per-operation fill rules
//! - [`AngleAdapter`] - optional radians ↔ host-unit conversions bound to a
//!   vector at construction, consulted by `heading`, `set_heading`, `rotate`,
//!   and `angle_between`
//! - [`ops`] - non-mutating counterparts with optional output targets
//!
//! ```
//! use vector_core::{AngleMode, Vector};
//!
//! let mut v = Vector::with_mode(AngleMode::Degrees, 3.0, 4.0, 0.0);
//! assert_eq!(v.mag(), 5.0);
//! v.set_heading(90.0);
//! assert!((v.heading() - 90.0).abs() < 1e-9);
//! ```
//!
//! Components stay finite. An operation that would divide by zero or store a
//! NaN or infinite component leaves the vector unchanged and emits a
//! `tracing` warning; the `try_*` variants return the [`VectorError`] instead.

// Core types and utilities
pub mod core_types;

// Geometry and random construction (inherent `Vector` methods)
mod geometry;
mod random;

// Non-mutating facade
pub mod ops;

// Re-export core types
pub use core_types::{AngleAdapter, AngleFn, AngleMode, ParseAngleModeError};
pub use core_types::{Degrees, Radians};
pub use core_types::{Vector, VectorArg, VectorError};
