//! Topping piece placement
//!
//! Produces a fresh placement set per topping activation. Not seeded by
//! itself: callers pass the RNG, so a seeded engine replays identical layouts
//! while an entropy-seeded one varies between activations.
//!
//! Guarantees:
//! - Piece count within the topping's configured range (at least 1)
//! - Every position within the pizza radius
//! - `start_delay_ms == piece_id * stagger_step_ms`

pub mod rings;
pub mod scatter;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Topping;
use crate::error::LayoutError;
use crate::tuning::{LayoutStrategy, LayoutTuning};

/// One piece of a topping on the pizza
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecePlacement {
    /// Index within the placement set (also acceptance order)
    pub piece_id: u32,
    /// Offset from pizza center
    pub pos: Vec2,
    pub rotation_degrees: f32,
    /// Size jitter multiplier
    pub size_scale: f32,
    /// Image variant, 1-based
    pub image_variant_index: u8,
    pub start_delay_ms: u64,
    /// Accepted after the retry budget ran out; may sit too close to a neighbor
    pub best_effort: bool,
}

/// A candidate position from a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spot {
    pub pos: Vec2,
    pub best_effort: bool,
}

impl Spot {
    pub fn exact(pos: Vec2) -> Self {
        Self {
            pos,
            best_effort: false,
        }
    }
}

/// Generate placements for a topping on a pizza of the given radius
pub fn generate_placements<R: Rng + ?Sized>(
    topping: &Topping,
    pizza_radius: f32,
    tuning: &LayoutTuning,
    rng: &mut R,
) -> Result<Vec<PiecePlacement>, LayoutError> {
    if !pizza_radius.is_finite() || pizza_radius <= 0.0 {
        return Err(LayoutError::DegenerateLayoutRequest {
            radius: pizza_radius,
        });
    }

    let range = tuning.count_range(topping.id);
    let count = rng.random_range(range.min..=range.max) as usize;

    let spots = match tuning.strategy {
        LayoutStrategy::Scatter => scatter::scatter(count, pizza_radius, tuning, rng),
        LayoutStrategy::Rings => rings::rings(count, pizza_radius, tuning, rng),
        LayoutStrategy::Zoned => scatter::zoned(count, pizza_radius, tuning, rng),
    };

    let forced = spots.iter().filter(|s| s.best_effort).count();
    if forced > 0 {
        log::debug!(
            "{}: {} of {} pieces placed without full separation",
            topping.id,
            forced,
            count
        );
    }

    let placements = spots
        .into_iter()
        .enumerate()
        .map(|(index, spot)| PiecePlacement {
            piece_id: index as u32,
            pos: spot.pos,
            rotation_degrees: rng.random_range(0.0..360.0),
            size_scale: sample_band(rng, tuning.size_jitter),
            image_variant_index: rng.random_range(topping.variant_range()),
            start_delay_ms: (index as u64).saturating_mul(tuning.stagger_step_ms),
            best_effort: spot.best_effort,
        })
        .collect();

    Ok(placements)
}

/// Uniform sample in [lo, hi], tolerating an inverted or empty band
pub(crate) fn sample_band<R: Rng + ?Sized>(rng: &mut R, (a, b): (f32, f32)) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo <= f32::EPSILON {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}

/// Radial band in layout units, clamped inside the pizza
pub(crate) fn band_radii(pizza_radius: f32, (inner, outer): (f32, f32)) -> (f32, f32) {
    let inner = inner.clamp(0.0, 1.0) * pizza_radius;
    let outer = outer.clamp(0.0, 1.0) * pizza_radius;
    (inner.min(outer), inner.max(outer))
}
