//! Shot sampling
//!
//! All randomness flows through a caller-supplied `Rng`, so any function in
//! the engine is a pure function of its inputs and that generator.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::models::ClubDistribution;

/// One sampled swing (yards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledShot {
    pub carry: f64,
    pub offline: f64,
}

/// Draw from Normal(mean, std).
#[inline]
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std * z
}

/// Sample carry and lateral miss for a club. Carry never goes negative.
#[inline]
pub fn sample_shot<R: Rng + ?Sized>(rng: &mut R, club: &ClubDistribution) -> SampledShot {
    let carry = sample_normal(rng, club.mean_carry, club.std_carry).max(0.0);
    let offline = sample_normal(rng, club.mean_offline, club.std_offline);
    SampledShot { carry, offline }
}
