//! Data-driven placement and animation constants
//!
//! Every number the engine uses lives here with its default, so a
//! presentation layer can ship a JSON file to restyle the entrance without
//! touching code. Missing fields fall back to the defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::anim::{Easing, SpringSpec};
use crate::catalog::PizzaSize;
use crate::consts::*;
use crate::error::TuningError;

/// Inclusive piece-count range for one topping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(count: u32) -> Self {
        Self { min: count, max: count }
    }

    /// Clamp to a usable range: at least one piece, max never below min
    pub fn normalized(self) -> Self {
        let min = self.min.max(1);
        Self { min, max: self.max.max(min) }
    }

    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// How piece positions are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutStrategy {
    /// Rejection-sampled polar scatter with minimum separation
    #[default]
    Scatter,
    /// Jittered concentric rings, shuffled
    Rings,
    /// Scatter constrained to inner/middle/outer zones by piece index
    Zoned,
}

/// Placement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Piece-count ranges keyed by topping id
    pub piece_counts: BTreeMap<String, CountRange>,
    /// Count for toppings not in the table
    pub default_count: u32,
    pub strategy: LayoutStrategy,
    /// Total sampling attempts per piece before accepting a clashing candidate
    pub max_attempts: u32,
    /// Minimum center distance as a fraction of pizza radius
    pub min_separation: f32,
    /// Radial band (fractions of pizza radius)
    pub radius_band: (f32, f32),
    /// Per-piece size jitter band
    pub size_jitter: (f32, f32),
    /// Entrance delay between consecutive pieces (ms)
    pub stagger_step_ms: u64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        let piece_counts = [
            ("basil", CountRange::new(6, 9)),
            ("mushroom", CountRange::new(5, 7)),
            ("onion", CountRange::new(8, 11)),
            ("sausage", CountRange::new(6, 8)),
            ("broccoli", CountRange::new(5, 7)),
        ]
        .into_iter()
        .map(|(id, range)| (id.to_string(), range))
        .collect();

        Self {
            piece_counts,
            default_count: DEFAULT_PIECE_COUNT,
            strategy: LayoutStrategy::Scatter,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            min_separation: MIN_SEPARATION_RATIO,
            radius_band: RADIUS_BAND,
            size_jitter: SIZE_JITTER,
            stagger_step_ms: STAGGER_STEP_MS,
        }
    }
}

impl LayoutTuning {
    /// Piece-count range for a topping (unknown toppings get the fixed default)
    pub fn count_range(&self, topping_id: &str) -> CountRange {
        self.piece_counts
            .get(topping_id)
            .copied()
            .unwrap_or(CountRange::fixed(self.default_count))
            .normalized()
    }
}

/// Entrance animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceTuning {
    /// Time from entrance start to settled (ms)
    pub settle_ms: u64,
    /// How far above the plate pieces start
    pub fall_distance: f32,
    /// Fraction of the fall covered before a piece becomes visible
    pub reveal_fraction: f32,
    pub fall_spring: SpringSpec,
    pub scale_spring: SpringSpec,
    pub rotation_easing: Easing,
    /// Pieces spin in from `rotation - sweep`
    pub rotation_sweep_deg: f32,
}

impl Default for EntranceTuning {
    fn default() -> Self {
        Self {
            settle_ms: SETTLE_MS,
            fall_distance: FALL_DISTANCE,
            reveal_fraction: REVEAL_FRACTION,
            fall_spring: SpringSpec::new(0.6, 200.0),
            scale_spring: SpringSpec::new(0.8, 300.0),
            rotation_easing: Easing::CubicOut,
            rotation_sweep_deg: 180.0,
        }
    }
}

/// Size-to-scale table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeTuning {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    /// Spring used when the plate rescales after a size change
    pub spring: SpringSpec,
}

impl Default for SizeTuning {
    fn default() -> Self {
        Self {
            small: PizzaSize::Small.scale(),
            medium: PizzaSize::Medium.scale(),
            large: PizzaSize::Large.scale(),
            spring: SpringSpec::new(0.8, 300.0),
        }
    }
}

impl SizeTuning {
    pub fn scale(&self, size: PizzaSize) -> f32 {
        match size {
            PizzaSize::Small => self.small,
            PizzaSize::Medium => self.medium,
            PizzaSize::Large => self.large,
        }
    }
}

/// All engine tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub layout: LayoutTuning,
    pub entrance: EntranceTuning,
    pub sizes: SizeTuning,
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning: {}", e);
                Self::default()
            }
        }
    }

    /// Reject values the layout or animator cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |reason: String| Err(TuningError::Invalid { reason });
        let layout = &self.layout;

        for (id, range) in &layout.piece_counts {
            if range.min > range.max {
                return invalid(format!("piece count for '{}' has min {} > max {}", id, range.min, range.max));
            }
        }
        let (inner, outer) = layout.radius_band;
        if !(0.0..=1.0).contains(&inner) || !(0.0..=1.0).contains(&outer) || inner > outer {
            return invalid(format!("radius band ({}, {}) must satisfy 0 <= inner <= outer <= 1", inner, outer));
        }
        let (lo, hi) = layout.size_jitter;
        if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
            return invalid(format!("size jitter ({}, {}) must satisfy 0 < lo <= hi < inf", lo, hi));
        }
        if !(layout.min_separation >= 0.0 && layout.min_separation.is_finite()) {
            return invalid(format!("min separation {} must be finite and not negative", layout.min_separation));
        }
        if layout.max_attempts == 0 {
            return invalid("max attempts must be at least 1".to_string());
        }

        let entrance = &self.entrance;
        if entrance.settle_ms == 0 {
            return invalid("settle duration must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&entrance.reveal_fraction) {
            return invalid(format!("reveal fraction {} outside [0, 1]", entrance.reveal_fraction));
        }
        for spring in [entrance.fall_spring, entrance.scale_spring, self.sizes.spring] {
            let positive = |v: f32| v > 0.0 && v.is_finite();
            if !positive(spring.stiffness) || !positive(spring.damping_ratio) {
                return invalid(format!("spring {:?} needs positive stiffness and damping", spring));
            }
        }
        for size in PizzaSize::ALL {
            let scale = self.sizes.scale(size);
            if !(scale > 0.0 && scale.is_finite()) {
                return invalid(format!("scale for size {} must be positive", size.as_str()));
            }
        }
        Ok(())
    }
}
