//! Pizza Toppings - procedural topping placement and piece animation
//!
//! Core modules:
//! - `catalog`: Static pizza/topping menu data and sizes
//! - `layout`: Piece placement generation (scatter, rings, zoned)
//! - `anim`: Per-piece entrance state machine, springs, timers
//! - `engine`: Event interface consumed by the presentation layer
//! - `tuning`: Data-driven placement and animation constants

pub mod anim;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod layout;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{Pizza, PizzaSize, Topping};
pub use engine::{EngineEvent, FrameClock, PieceView, PizzaEngine};
pub use error::{EngineError, LayoutError, Result, TuningError};
pub use layout::{PiecePlacement, generate_placements};
pub use tuning::Tuning;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Usable pizza radius in abstract layout units
    pub const PIZZA_RADIUS: f32 = 100.0;

    /// Placement retry budget per piece
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;
    /// Minimum distance between piece centers, as a fraction of pizza radius
    pub const MIN_SEPARATION_RATIO: f32 = 0.35;
    /// Radial band pieces may land in (fractions of pizza radius)
    pub const RADIUS_BAND: (f32, f32) = (0.10, 0.80);
    /// Per-piece size jitter band
    pub const SIZE_JITTER: (f32, f32) = (0.85, 1.15);
    /// Piece count used for toppings missing from the count table
    pub const DEFAULT_PIECE_COUNT: u32 = 8;

    /// Delay between consecutive piece entrances (ms)
    pub const STAGGER_STEP_MS: u64 = 50;
    /// Time from entrance start until a piece counts as settled (ms)
    pub const SETTLE_MS: u64 = 700;
    /// Distance above the plate a piece falls from
    pub const FALL_DISTANCE: f32 = 500.0;
    /// Pieces stay invisible until they have covered this fraction of the fall
    pub const REVEAL_FRACTION: f32 = 0.2;

    /// Fixed frame step used by the headless demo (60 Hz)
    pub const FRAME_DT_MS: u64 = 16;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
