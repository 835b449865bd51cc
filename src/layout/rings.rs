//! Jittered concentric-ring layout
//!
//! Ring `k` (1-based) holds `4k` evenly spaced points. Angles and radii get
//! a little jitter, then the grid is shuffled and truncated to the piece
//! count. Spacing comes from the grid, so no rejection pass is needed.

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Spot, band_radii};
use crate::{normalize_degrees, polar_to_cartesian};
use crate::tuning::LayoutTuning;

/// Rings used when the piece count fits
pub const BASE_RINGS: usize = 3;
/// Angular jitter per point (degrees, +/-)
pub const ANGLE_JITTER_DEG: f32 = 10.0;
/// Radial jitter per point (fraction of pizza radius, +/-)
pub const RADIUS_JITTER: f32 = 0.05;

/// Number of grid points in the first `rings` rings
pub fn grid_capacity(rings: usize) -> usize {
    // 4 + 8 + ... + 4k
    2 * rings * (rings + 1)
}

pub(crate) fn rings<R: Rng + ?Sized>(
    count: usize,
    pizza_radius: f32,
    tuning: &LayoutTuning,
    rng: &mut R,
) -> Vec<Spot> {
    let (r_lo, r_hi) = band_radii(pizza_radius, tuning.radius_band);

    let mut ring_count = BASE_RINGS;
    while grid_capacity(ring_count) < count {
        ring_count += 1;
    }

    let mut points = Vec::with_capacity(grid_capacity(ring_count));
    for ring in 1..=ring_count {
        let base_r = r_lo + (r_hi - r_lo) * ring as f32 / ring_count as f32;
        let in_ring = ring * 4;
        for i in 0..in_ring {
            let angle = normalize_degrees(
                i as f32 * 360.0 / in_ring as f32
                    + rng.random_range(-ANGLE_JITTER_DEG..=ANGLE_JITTER_DEG),
            );
            let jitter = rng.random_range(-RADIUS_JITTER..=RADIUS_JITTER) * pizza_radius;
            let r = (base_r + jitter).clamp(r_lo, r_hi);
            points.push(Spot::exact(polar_to_cartesian(r, angle)));
        }
    }

    points.shuffle(rng);
    points.truncate(count);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grid_capacity() {
        assert_eq!(grid_capacity(1), 4);
        assert_eq!(grid_capacity(3), 24);
        assert_eq!(grid_capacity(4), 40);
    }

    #[test]
    fn test_rings_exact_count() {
        let tuning = LayoutTuning::default();
        let mut rng = Pcg32::seed_from_u64(4);
        for count in [1, 8, 24, 25, 60] {
            let spots = rings(count, 100.0, &tuning, &mut rng);
            assert_eq!(spots.len(), count);
            assert!(spots.iter().all(|s| !s.best_effort));
        }
    }

    #[test]
    fn test_rings_inside_band() {
        let tuning = LayoutTuning::default();
        let mut rng = Pcg32::seed_from_u64(8);
        for spot in rings(20, 100.0, &tuning, &mut rng) {
            let r = spot.pos.length();
            assert!((10.0 - 1e-3..=80.0 + 1e-3).contains(&r), "r = {}", r);
        }
    }
}
