//! Animation state for one selected topping

use serde::Serialize;

use super::piece::{AnimatedPiece, PieceTransform};
use crate::catalog::Topping;
use crate::layout::PiecePlacement;
use crate::tuning::EntranceTuning;

/// One activation of a topping: its placements and their entrance states.
///
/// Lives from select to deselect. Placements never change after creation,
/// and pieces only move forward through their states.
#[derive(Debug, Clone, Serialize)]
pub struct ToppingAnimationState {
    pub topping: &'static Topping,
    /// Unique per select; timers carry it to detect stale callbacks
    pub activation: u64,
    pub activated_at_ms: u64,
    pieces: Vec<AnimatedPiece>,
    is_animating: bool,
}

impl ToppingAnimationState {
    pub fn new(
        topping: &'static Topping,
        activation: u64,
        activated_at_ms: u64,
        placements: Vec<PiecePlacement>,
    ) -> Self {
        let pieces: Vec<AnimatedPiece> = placements.into_iter().map(AnimatedPiece::new).collect();
        let is_animating = !pieces.is_empty();
        Self {
            topping,
            activation,
            activated_at_ms,
            pieces,
            is_animating,
        }
    }

    /// True while any piece is pending or entering
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn pieces(&self) -> &[AnimatedPiece] {
        &self.pieces
    }

    pub fn piece(&self, piece_id: u32) -> Option<&AnimatedPiece> {
        self.pieces.iter().find(|p| p.placement.piece_id == piece_id)
    }

    /// Begin a piece's entrance; false if unknown or already started
    pub fn start_piece(&mut self, piece_id: u32, at_ms: u64) -> bool {
        self.pieces
            .iter_mut()
            .find(|p| p.placement.piece_id == piece_id)
            .is_some_and(|p| p.start(at_ms))
    }

    /// Land a piece; false if unknown or not entering.
    /// Clears `is_animating` once the last piece lands.
    pub fn settle_piece(&mut self, piece_id: u32) -> bool {
        let settled = self
            .pieces
            .iter_mut()
            .find(|p| p.placement.piece_id == piece_id)
            .is_some_and(|p| p.settle());
        if settled && self.pieces.iter().all(|p| p.state.is_settled()) {
            self.is_animating = false;
        }
        settled
    }

    /// Entrance transforms for every piece, in piece order
    pub fn transforms(
        &self,
        now_ms: u64,
        tuning: &EntranceTuning,
    ) -> impl Iterator<Item = (&AnimatedPiece, PieceTransform)> + '_ {
        let tuning = tuning.clone();
        self.pieces.iter().map(move |p| {
            let transform = if self.is_animating {
                p.transform(now_ms, &tuning)
            } else {
                PieceTransform::settled(p.placement.rotation_degrees)
            };
            (p, transform)
        })
    }

    /// Time at which the last piece is expected to land
    pub fn expected_settle_ms(&self, tuning: &EntranceTuning) -> u64 {
        let max_delay = self
            .pieces
            .iter()
            .map(|p| p.placement.start_delay_ms)
            .max()
            .unwrap_or(0);
        self.activated_at_ms
            .saturating_add(max_delay)
            .saturating_add(tuning.settle_ms)
    }
}
