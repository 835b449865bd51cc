//! Piece animation
//!
//! Entrance animation is an explicit state machine per piece, driven by an
//! external clock:
//! - Transitions happen only when the owner fires a due timer
//! - Transforms are pure functions of state, placement and current time
//! - Springs are closed-form, so sampling rate never changes the result

pub mod easing;
pub mod piece;
pub mod spring;
pub mod timer;
pub mod topping;

pub use easing::Easing;
pub use piece::{AnimatedPiece, PieceState, PieceTransform};
pub use spring::{SpringSpec, SpringTransition};
pub use timer::{Timer, TimerKind, TimerQueue};
pub use topping::ToppingAnimationState;
