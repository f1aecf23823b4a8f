//! Random unit vectors
//!
//! `random_2d` picks a uniformly random heading; `random_3d` samples uniformly
//! on the unit sphere (z uniform in [-1, 1], heading uniform). The `_with`
//! variants take a caller-supplied RNG for reproducible sequences.

use crate::core_types::vector::Vector;
use rand::Rng;
use std::f64::consts::TAU;

impl Vector {
    /// Plain 2D unit vector at a random heading.
    #[must_use]
    pub fn random_2d() -> Self {
        Self::random_2d_with(&mut rand::rng())
    }

    /// [`Vector::random_2d`] drawing from `rng`.
    pub fn random_2d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.random::<f64>() * TAU, 1.0)
    }

    /// Plain 3D unit vector uniformly distributed on the sphere.
    #[must_use]
    pub fn random_3d() -> Self {
        Self::random_3d_with(&mut rand::rng())
    }

    /// [`Vector::random_3d`] drawing from `rng`.
    pub fn random_3d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.random::<f64>() * TAU;
        let vz = rng.random::<f64>() * 2.0 - 1.0;
        let vz_base = (1.0 - vz * vz).sqrt();
        Self::new(vz_base * angle.cos(), vz_base * angle.sin(), vz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_2d_is_unit_and_planar() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = Vector::random_2d_with(&mut rng);
            assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
            assert_eq!(v.z, 0.0);
            assert!(!v.is_adapted());
        }
    }

    #[test]
    fn test_random_3d_is_unit() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = Vector::random_3d_with(&mut rng);
            assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
            assert!((-1.0..=1.0).contains(&v.z));
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let a = Vector::random_3d_with(&mut StdRng::seed_from_u64(3));
        let b = Vector::random_3d_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_variants() {
        assert_relative_eq!(Vector::random_2d().mag(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(Vector::random_3d().mag(), 1.0, epsilon = 1e-12);
    }
}
