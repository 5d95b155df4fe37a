//! Random parameter sets.
//!
//! Each numeric field is sampled independently and uniformly. The color is a
//! single integer sample over the whole 24-bit range, not three channel
//! samples. The background color is carried over unchanged.

#[cfg(test)]
#[path = "randomize_test.rs"]
mod randomize_test;

use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::{RGB24_MAX, hex_from_rgb24};
use crate::params::RenderParameters;

pub const SIDES_RANGE: RangeInclusive<u32> = 3..=12;
pub const REPETITIONS_RANGE: RangeInclusive<u32> = 1..=10;
pub const ROTATION_RANGE: RangeInclusive<u32> = 0..=359;
pub const SIZE_RANGE: RangeInclusive<u32> = 50..=199;

/// Uniform random `#rrggbb` color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    hex_from_rgb24(rng.random_range(0..=RGB24_MAX))
}

/// Fresh parameter set keeping `current.background_color`.
pub fn randomize<R: Rng + ?Sized>(current: &RenderParameters, rng: &mut R) -> RenderParameters {
    RenderParameters {
        sides: rng.random_range(SIDES_RANGE),
        repetitions: rng.random_range(REPETITIONS_RANGE),
        rotation: f64::from(rng.random_range(ROTATION_RANGE)),
        size: f64::from(rng.random_range(SIZE_RANGE)),
        color: random_color(rng),
        background_color: current.background_color.clone(),
    }
}
