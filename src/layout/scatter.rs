//! Rejection-sampled scatter
//!
//! Pieces are sampled in polar space and kept only if they clear every
//! previously accepted piece by the minimum separation. After the retry
//! budget the last candidate is taken anyway, so generation always finishes.

use glam::Vec2;
use rand::Rng;

use super::{Spot, band_radii, sample_band};
use crate::polar_to_cartesian;
use crate::tuning::LayoutTuning;

/// Zones (fractions of the outer band radius) cycled through by piece index
pub const ZONES: [(f32, f32); 3] = [(0.3, 0.5), (0.5, 0.7), (0.7, 0.9)];

/// Scatter `count` pieces uniformly over the radial band
pub(crate) fn scatter<R: Rng + ?Sized>(
    count: usize,
    pizza_radius: f32,
    tuning: &LayoutTuning,
    rng: &mut R,
) -> Vec<Spot> {
    let band = band_radii(pizza_radius, tuning.radius_band);
    let min_dist = tuning.min_separation * pizza_radius;

    let mut spots = Vec::with_capacity(count);
    for _ in 0..count {
        let spot = place_separated(rng, &spots, band, min_dist, tuning.max_attempts);
        spots.push(spot);
    }
    spots
}

/// Scatter with piece `i` confined to zone `i % 3` (inner, middle, outer)
pub(crate) fn zoned<R: Rng + ?Sized>(
    count: usize,
    pizza_radius: f32,
    tuning: &LayoutTuning,
    rng: &mut R,
) -> Vec<Spot> {
    let (_, outer) = band_radii(pizza_radius, tuning.radius_band);
    let min_dist = tuning.min_separation * pizza_radius;

    let mut spots = Vec::with_capacity(count);
    for index in 0..count {
        let (lo, hi) = ZONES[index % ZONES.len()];
        let band = (lo * outer, hi * outer);
        let spot = place_separated(rng, &spots, band, min_dist, tuning.max_attempts);
        spots.push(spot);
    }
    spots
}

/// Sample until a candidate clears all accepted spots or attempts run out
fn place_separated<R: Rng + ?Sized>(
    rng: &mut R,
    accepted: &[Spot],
    band: (f32, f32),
    min_dist: f32,
    max_attempts: u32,
) -> Spot {
    let mut candidate = Vec2::ZERO;
    for _ in 0..max_attempts.max(1) {
        candidate = sample_polar(rng, band);
        if accepted.iter().all(|s| s.pos.distance(candidate) >= min_dist) {
            return Spot::exact(candidate);
        }
    }
    Spot {
        pos: candidate,
        best_effort: true,
    }
}

fn sample_polar<R: Rng + ?Sized>(rng: &mut R, band: (f32, f32)) -> Vec2 {
    let angle = rng.random_range(0.0..360.0);
    let r = sample_band(rng, band);
    polar_to_cartesian(r, angle)
}
