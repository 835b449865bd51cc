//! Per-piece entrance state machine
//!
//! Pending -> Entering -> Settled. Transitions are applied by the owner's
//! timers; the visual transform is derived from the state and the clock.

use serde::{Deserialize, Serialize};

use crate::layout::PiecePlacement;
use crate::tuning::EntranceTuning;

/// Entrance state of one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceState {
    /// Waiting for its stagger delay; off the plate and invisible
    Pending,
    /// Falling onto the plate
    Entering { started_at_ms: u64 },
    /// Landed (terminal)
    Settled,
}

impl PieceState {
    pub fn is_settled(&self) -> bool {
        matches!(self, PieceState::Settled)
    }
}

/// Entrance transform, before size scaling and piece jitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieceTransform {
    /// Vertical offset from the resting position (negative = above the plate)
    pub offset_y: f32,
    /// Entrance scale, 0 -> 1
    pub scale: f32,
    /// Rotation in degrees
    pub rotation: f32,
    pub opacity: f32,
}

impl PieceTransform {
    pub fn settled(rotation: f32) -> Self {
        Self {
            offset_y: 0.0,
            scale: 1.0,
            rotation,
            opacity: 1.0,
        }
    }
}

/// A placement plus its entrance state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatedPiece {
    pub placement: PiecePlacement,
    pub state: PieceState,
}

impl AnimatedPiece {
    pub fn new(placement: PiecePlacement) -> Self {
        Self {
            placement,
            state: PieceState::Pending,
        }
    }

    /// Pending -> Entering; false if the piece already started
    pub fn start(&mut self, at_ms: u64) -> bool {
        if self.state == PieceState::Pending {
            self.state = PieceState::Entering {
                started_at_ms: at_ms,
            };
            true
        } else {
            false
        }
    }

    /// Entering -> Settled; false unless the piece was entering
    pub fn settle(&mut self) -> bool {
        if matches!(self.state, PieceState::Entering { .. }) {
            self.state = PieceState::Settled;
            true
        } else {
            false
        }
    }

    /// Entrance transform at `now_ms`
    pub fn transform(&self, now_ms: u64, tuning: &EntranceTuning) -> PieceTransform {
        let rotation = self.placement.rotation_degrees;
        match self.state {
            PieceState::Pending => PieceTransform {
                offset_y: -tuning.fall_distance,
                scale: 0.0,
                rotation: rotation - tuning.rotation_sweep_deg,
                opacity: 0.0,
            },
            PieceState::Entering { started_at_ms } => {
                let elapsed_ms = now_ms.saturating_sub(started_at_ms).min(tuning.settle_ms);
                let secs = elapsed_ms as f32 / 1000.0;
                let t = elapsed_ms as f32 / tuning.settle_ms.max(1) as f32;

                let offset_y = tuning.fall_spring.interpolate(-tuning.fall_distance, 0.0, secs);
                let scale = tuning.scale_spring.progress(secs).max(0.0);
                let sweep = tuning.rotation_sweep_deg * (1.0 - tuning.rotation_easing.apply(t));
                let hidden_below = -tuning.fall_distance * (1.0 - tuning.reveal_fraction);
                let opacity = if offset_y < hidden_below { 0.0 } else { 1.0 };

                PieceTransform {
                    offset_y,
                    scale,
                    rotation: rotation - sweep,
                    opacity,
                }
            }
            PieceState::Settled => PieceTransform::settled(rotation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn piece(rotation: f32) -> AnimatedPiece {
        AnimatedPiece::new(PiecePlacement {
            piece_id: 0,
            pos: Vec2::new(10.0, -20.0),
            rotation_degrees: rotation,
            size_scale: 1.0,
            image_variant_index: 3,
            start_delay_ms: 0,
            best_effort: false,
        })
    }

    #[test]
    fn test_pending_is_hidden_above_plate() {
        let tuning = EntranceTuning::default();
        let p = piece(200.0);
        let t = p.transform(0, &tuning);
        assert_eq!(t.offset_y, -tuning.fall_distance);
        assert_eq!(t.scale, 0.0);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.rotation, 20.0);
    }

    #[test]
    fn test_entering_reveals_and_approaches_rest() {
        let tuning = EntranceTuning::default();
        let mut p = piece(90.0);
        assert!(p.start(1000));
        assert!(!p.start(1200));

        let early = p.transform(1000, &tuning);
        assert_eq!(early.opacity, 0.0);
        assert_eq!(early.offset_y, -tuning.fall_distance);
        assert!((early.rotation - (90.0 - tuning.rotation_sweep_deg)).abs() < 1e-4);

        let mid = p.transform(1200, &tuning);
        assert_eq!(mid.opacity, 1.0);
        assert!(mid.offset_y > early.offset_y);
        assert!(mid.scale > 0.5);
        assert!(mid.rotation > early.rotation && mid.rotation <= 90.0);

        let late = p.transform(1000 + tuning.settle_ms, &tuning);
        assert!(late.offset_y.abs() < 5.0);
        assert!((late.rotation - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_settle_only_from_entering() {
        let tuning = EntranceTuning::default();
        let mut p = piece(45.0);
        assert!(!p.settle());
        p.start(0);
        assert!(p.settle());
        assert!(p.state.is_settled());
        assert!(!p.start(10));
        assert_eq!(p.transform(99_999, &tuning), PieceTransform::settled(45.0));
    }
}
