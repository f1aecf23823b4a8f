//! Core types and utilities

pub mod angle;
pub mod args;
pub mod error;
pub mod units;
pub mod vector;

pub use angle::{AngleAdapter, AngleFn, AngleMode, ParseAngleModeError};
pub use args::VectorArg;
pub use error::VectorError;
pub use units::{Degrees, Radians};
pub use vector::Vector;
