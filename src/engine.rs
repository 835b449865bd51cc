//! Topping engine: the event interface the presentation layer drives
//!
//! Single-threaded and clock-driven. Inputs (select, deselect, pizza, size)
//! take effect immediately; entrance transitions happen only while the clock
//! advances, by firing timers in due order. Every fired timer is matched
//! against the live activation before it may touch anything, so timers left
//! over from a deselected topping are inert.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::anim::{SpringTransition, TimerKind, TimerQueue, ToppingAnimationState};
use crate::catalog::{self, PIZZAS, Pizza, PizzaSize, Topping};
use crate::consts::PIZZA_RADIUS;
use crate::error::{EngineError, Result};
use crate::layout::generate_placements;
use crate::tuning::Tuning;

/// Lifecycle notifications, drained by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EngineEvent {
    ToppingAdded { topping: &'static str, pieces: usize },
    ToppingRemoved { topping: &'static str },
    PieceEntering { topping: &'static str, piece_id: u32 },
    PieceSettled { topping: &'static str, piece_id: u32 },
    /// Every piece of the topping has landed
    ToppingSettled { topping: &'static str },
    PizzaChanged { pizza: &'static str },
    SizeChanged { size: PizzaSize },
}

/// Everything needed to draw one piece this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieceView {
    pub piece_id: u32,
    /// Resting offset from pizza center
    pub x: f32,
    pub y: f32,
    /// Entrance offset added to `y` (negative = above the plate)
    pub offset_y: f32,
    pub rotation: f32,
    /// entrance scale x size scale x piece jitter
    pub scale: f32,
    pub opacity: f32,
    pub image_variant_index: u8,
}

/// Converts fractional frame deltas (as browsers report them) into whole
/// milliseconds, carrying the remainder into the next frame so the engine
/// clock keeps pace with real time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    carry_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole milliseconds to advance for a frame of `dt_ms`.
    /// Negative or non-finite deltas count as zero.
    pub fn step(&mut self, dt_ms: f64) -> u64 {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let total = self.carry_ms + dt_ms;
        let whole = total.floor();
        self.carry_ms = total - whole;
        whole as u64
    }

    /// Drop the carried fraction (after a jump to an absolute time)
    pub fn reset(&mut self) {
        self.carry_ms = 0.0;
    }
}

/// The topping engine for the displayed pizza
#[derive(Debug)]
pub struct PizzaEngine {
    tuning: Tuning,
    pizza: &'static Pizza,
    size: PizzaSize,
    size_scale: SpringTransition,
    /// Active toppings in selection order
    toppings: Vec<ToppingAnimationState>,
    timers: TimerQueue,
    now_ms: u64,
    pizza_radius: f32,
    rng: Pcg32,
    next_activation: u64,
    events: Vec<EngineEvent>,
}

impl Default for PizzaEngine {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl PizzaEngine {
    /// Engine with layouts seeded from the thread RNG
    pub fn new(tuning: Tuning) -> Self {
        Self::from_rng(tuning, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Engine whose layouts are reproducible for a given seed
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::from_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    fn from_rng(tuning: Tuning, rng: Pcg32) -> Self {
        let size = PizzaSize::default();
        let size_scale = SpringTransition::at_rest(tuning.sizes.scale(size));
        Self {
            tuning,
            pizza: &PIZZAS[0],
            size,
            size_scale,
            toppings: Vec::new(),
            timers: TimerQueue::new(),
            now_ms: 0,
            pizza_radius: PIZZA_RADIUS,
            rng,
            next_activation: 1,
            events: Vec::new(),
        }
    }

    /// Use a different pizza radius for layouts generated from now on
    pub fn with_pizza_radius(mut self, radius: f32) -> Self {
        self.pizza_radius = radius;
        self
    }

    // === Inputs ===

    /// Select a topping. Returns false if it was already selected.
    pub fn select_topping(&mut self, topping_id: &str) -> Result<bool> {
        let topping = self.lookup_topping(topping_id)?;
        if self.is_selected(topping.id) {
            return Ok(false);
        }

        let placements = generate_placements(
            topping,
            self.pizza_radius,
            &self.tuning.layout,
            &mut self.rng,
        )?;

        let activation = self.next_activation;
        self.next_activation += 1;

        for p in &placements {
            self.timers.schedule(
                self.now_ms.saturating_add(p.start_delay_ms),
                topping.id,
                activation,
                p.piece_id,
                TimerKind::Enter,
            );
        }

        let pieces = placements.len();
        self.toppings.push(ToppingAnimationState::new(
            topping,
            activation,
            self.now_ms,
            placements,
        ));
        log::info!("{} added with {} pieces", topping.name, pieces);
        self.events.push(EngineEvent::ToppingAdded {
            topping: topping.id,
            pieces,
        });

        // Zero-delay pieces start falling right away
        self.fire_due_timers();
        Ok(true)
    }

    /// Deselect a topping, dropping its pieces at once.
    /// Returns false if it was not selected.
    pub fn deselect_topping(&mut self, topping_id: &str) -> Result<bool> {
        let topping = self.lookup_topping(topping_id)?;
        let Some(index) = self.toppings.iter().position(|s| s.topping.id == topping.id) else {
            return Ok(false);
        };

        let state = self.toppings.remove(index);
        let cancelled = self.timers.cancel_activation(state.activation);
        log::info!("{} removed ({} timers cancelled)", topping.name, cancelled);
        self.events.push(EngineEvent::ToppingRemoved {
            topping: topping.id,
        });
        Ok(true)
    }

    /// Select if unselected, deselect otherwise. Returns the new selection state.
    pub fn toggle_topping(&mut self, topping_id: &str) -> Result<bool> {
        let topping = self.lookup_topping(topping_id)?;
        if self.is_selected(topping.id) {
            self.deselect_topping(topping.id)?;
            Ok(false)
        } else {
            self.select_topping(topping.id)?;
            Ok(true)
        }
    }

    /// Switch the displayed pizza. The new pizza starts without toppings.
    /// Returns false if it was already displayed.
    pub fn set_pizza(&mut self, pizza_id: &str) -> Result<bool> {
        let Some(pizza) = catalog::pizza(pizza_id) else {
            log::warn!("Ignoring unknown pizza '{}'", pizza_id);
            return Err(EngineError::UnknownPizza(pizza_id.to_string()));
        };
        if pizza.id == self.pizza.id {
            return Ok(false);
        }

        self.toppings.clear();
        self.timers.clear();
        self.pizza = pizza;
        log::info!("Pizza changed to {}", pizza.name);
        self.events.push(EngineEvent::PizzaChanged { pizza: pizza.id });
        Ok(true)
    }

    /// Change size. Pieces keep their placements and entrance progress;
    /// only the shared size scale springs to the new factor.
    pub fn set_size(&mut self, size: PizzaSize) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.size_scale.retarget(
            self.tuning.sizes.scale(size),
            &self.tuning.sizes.spring,
            self.now_ms,
            self.tuning.entrance.settle_ms,
        );
        log::info!("Size changed to {}", size.as_str());
        self.events.push(EngineEvent::SizeChanged { size });
        true
    }

    /// Move the clock forward and apply every transition that came due
    pub fn advance(&mut self, dt_ms: u64) {
        self.advance_to(self.now_ms.saturating_add(dt_ms));
    }

    /// Move the clock to `now_ms` (never backwards)
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            log::warn!("Clock went backwards ({} -> {}), ignoring", self.now_ms, now_ms);
            return;
        }
        self.now_ms = now_ms;
        self.fire_due_timers();
    }

    /// Take queued lifecycle events
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    /// Current visual state of every piece of a topping (empty if not selected)
    pub fn pieces(&self, topping_id: &str) -> Vec<PieceView> {
        let Some(state) = self.topping_state(topping_id) else {
            return Vec::new();
        };
        let size_scale = self.size_scale();
        state
            .transforms(self.now_ms, &self.tuning.entrance)
            .map(|(piece, t)| PieceView {
                piece_id: piece.placement.piece_id,
                x: piece.placement.pos.x,
                y: piece.placement.pos.y,
                offset_y: t.offset_y,
                rotation: t.rotation,
                scale: t.scale * size_scale * piece.placement.size_scale,
                opacity: t.opacity,
                image_variant_index: piece.placement.image_variant_index,
            })
            .collect()
    }

    pub fn is_topping_animating(&self, topping_id: &str) -> bool {
        self.topping_state(topping_id)
            .is_some_and(|s| s.is_animating())
    }

    /// True while any selected topping is still landing
    pub fn is_animating(&self) -> bool {
        self.toppings.iter().any(|s| s.is_animating())
    }

    pub fn topping_state(&self, topping_id: &str) -> Option<&ToppingAnimationState> {
        self.toppings.iter().find(|s| s.topping.id == topping_id)
    }

    pub fn is_selected(&self, topping_id: &str) -> bool {
        self.topping_state(topping_id).is_some()
    }

    /// Selected toppings in selection order
    pub fn selected_toppings(&self) -> Vec<&'static Topping> {
        self.toppings.iter().map(|s| s.topping).collect()
    }

    pub fn total_price(&self) -> f64 {
        self.pizza
            .total_price(self.size, self.toppings.iter().map(|s| s.topping))
    }

    pub fn pizza(&self) -> &'static Pizza {
        self.pizza
    }

    pub fn size(&self) -> PizzaSize {
        self.size
    }

    /// Current size scale factor (springs after a size change)
    pub fn size_scale(&self) -> f32 {
        self.size_scale.value(
            &self.tuning.sizes.spring,
            self.now_ms,
            self.tuning.entrance.settle_ms,
        )
    }

    /// Size factor the scale is springing toward
    pub fn target_size_scale(&self) -> f32 {
        self.size_scale.target()
    }

    /// Due time of the next scheduled transition, if any
    pub fn next_transition_ms(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Number of scheduled transitions still waiting
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // === Internals ===

    fn lookup_topping(&self, topping_id: &str) -> Result<&'static Topping> {
        self.pizza.topping(topping_id).ok_or_else(|| {
            log::warn!("Ignoring unknown topping '{}'", topping_id);
            EngineError::InvalidToppingReference(topping_id.to_string())
        })
    }

    fn fire_due_timers(&mut self) {
        let settle_ms = self.tuning.entrance.settle_ms;

        while let Some(timer) = self.timers.pop_due(self.now_ms) {
            let Some(state) = self
                .toppings
                .iter_mut()
                .find(|s| s.activation == timer.activation)
            else {
                log::trace!(
                    "Dropping stale timer for {} piece {}",
                    timer.topping_id,
                    timer.piece_id
                );
                continue;
            };

            match timer.kind {
                TimerKind::Enter => {
                    if state.start_piece(timer.piece_id, timer.due_ms) {
                        self.timers.schedule(
                            timer.due_ms.saturating_add(settle_ms),
                            timer.topping_id,
                            timer.activation,
                            timer.piece_id,
                            TimerKind::Settle,
                        );
                        self.events.push(EngineEvent::PieceEntering {
                            topping: timer.topping_id,
                            piece_id: timer.piece_id,
                        });
                    }
                }
                TimerKind::Settle => {
                    if state.settle_piece(timer.piece_id) {
                        self.events.push(EngineEvent::PieceSettled {
                            topping: timer.topping_id,
                            piece_id: timer.piece_id,
                        });
                        if !state.is_animating() {
                            log::info!("{} settled", state.topping.name);
                            self.events.push(EngineEvent::ToppingSettled {
                                topping: timer.topping_id,
                            });
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::PieceState;

    fn engine() -> PizzaEngine {
        PizzaEngine::with_seed(Tuning::default(), 12345)
    }

    /// Time after which every piece of a topping must have landed
    fn settle_horizon(engine: &PizzaEngine, topping: &str) -> u64 {
        engine
            .topping_state(topping)
            .map(|s| s.expected_settle_ms(&engine.tuning().entrance))
            .unwrap()
    }

    #[test]
    fn test_medium_margherita_with_sausage_price() {
        let mut e = engine();
        assert_eq!(e.pizza().id, "margherita");
        assert_eq!(e.size(), PizzaSize::Medium);
        e.select_topping("sausage").unwrap();
        assert!((e.total_price() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_twice_is_noop() {
        let mut e = engine();
        assert!(e.select_topping("basil").unwrap());
        let first = e.topping_state("basil").unwrap().pieces().to_vec();
        let timers = e.pending_timers();

        assert!(!e.select_topping("basil").unwrap());
        assert_eq!(e.topping_state("basil").unwrap().pieces(), first.as_slice());
        assert_eq!(e.pending_timers(), timers);
        assert_eq!(e.selected_toppings().len(), 1);
    }

    #[test]
    fn test_unknown_topping_is_ignored() {
        let mut e = engine();
        let result = e.select_topping("pineapple");
        assert_eq!(
            result,
            Err(EngineError::InvalidToppingReference("pineapple".to_string()))
        );
        assert!(e.selected_toppings().is_empty());
        assert!(e.deselect_topping("pineapple").is_err());
        assert!(e.drain_events().is_empty());
    }

    #[test]
    fn test_deselect_unselected_is_noop() {
        let mut e = engine();
        assert_eq!(e.deselect_topping("onion"), Ok(false));
    }

    #[test]
    fn test_select_then_deselect_before_landing() {
        let mut e = engine();
        e.select_topping("onion").unwrap();
        e.advance(60);
        assert!(e.is_topping_animating("onion"));

        assert!(e.deselect_topping("onion").unwrap());
        assert!(e.pieces("onion").is_empty());
        assert!(!e.is_topping_animating("onion"));
        assert_eq!(e.pending_timers(), 0);

        // Nothing fires later
        e.drain_events();
        e.advance(5_000);
        assert!(e.drain_events().is_empty());
    }

    #[test]
    fn test_basil_settles_after_longest_delay_plus_duration() {
        let mut e = engine();
        e.select_topping("basil").unwrap();
        let horizon = settle_horizon(&e, "basil");

        e.advance_to(horizon - 1);
        assert!(e.is_topping_animating("basil"));

        e.advance_to(horizon);
        assert!(!e.is_topping_animating("basil"));
        for view in e.pieces("basil") {
            assert_eq!(view.offset_y, 0.0);
            assert_eq!(view.opacity, 1.0);
        }
    }

    #[test]
    fn test_one_big_step_matches_many_small_steps() {
        let mut a = engine();
        let mut b = engine();
        a.select_topping("mushroom").unwrap();
        b.select_topping("mushroom").unwrap();

        a.advance(250);
        for _ in 0..25 {
            b.advance(10);
        }
        assert_eq!(a.pieces("mushroom"), b.pieces("mushroom"));
    }

    #[test]
    fn test_stagger_starts_pieces_in_order() {
        let mut e = engine();
        e.select_topping("onion").unwrap();
        let step = e.tuning().layout.stagger_step_ms;

        let state = |e: &PizzaEngine, id: u32| e.topping_state("onion").unwrap().piece(id).unwrap().state;
        assert!(matches!(state(&e, 0), PieceState::Entering { started_at_ms: 0 }));
        assert_eq!(state(&e, 1), PieceState::Pending);

        e.advance(step);
        assert!(matches!(state(&e, 1), PieceState::Entering { .. }));
        assert_eq!(state(&e, 2), PieceState::Pending);
    }

    #[test]
    fn test_size_change_keeps_settled_pieces() {
        let mut e = engine();
        e.select_topping("basil").unwrap();
        let horizon = settle_horizon(&e, "basil");
        e.advance_to(horizon);
        assert!(!e.is_topping_animating("basil"));
        let before = e.pieces("basil");

        assert!(e.set_size(PizzaSize::Large));
        assert!(!e.is_topping_animating("basil"));
        e.advance(e.tuning().entrance.settle_ms);

        let after = e.pieces("basil");
        assert_eq!(before.len(), after.len());
        let ratio = PizzaSize::Large.scale() / PizzaSize::Medium.scale();
        for (b, a) in before.iter().zip(&after) {
            assert_eq!((b.x, b.y), (a.x, a.y));
            assert_eq!(b.rotation, a.rotation);
            assert_eq!(b.image_variant_index, a.image_variant_index);
            assert_eq!(a.offset_y, 0.0);
            assert!((a.scale - b.scale * ratio).abs() < 1e-4);
        }
    }

    #[test]
    fn test_size_change_mid_entrance_keeps_progress() {
        let mut e = engine();
        e.select_topping("sausage").unwrap();
        e.advance(120);
        let before = e.topping_state("sausage").unwrap().pieces().to_vec();

        e.set_size(PizzaSize::Small);
        assert!(!e.set_size(PizzaSize::Small));
        assert_eq!(e.topping_state("sausage").unwrap().pieces(), before.as_slice());
    }

    #[test]
    fn test_other_topping_does_not_restart_settled() {
        let mut e = engine();
        e.select_topping("broccoli").unwrap();
        let horizon = settle_horizon(&e, "broccoli");
        e.advance_to(horizon);
        let settled = e.pieces("broccoli");

        e.select_topping("onion").unwrap();
        e.advance(10);
        assert!(!e.is_topping_animating("broccoli"));
        assert_eq!(e.pieces("broccoli"), settled);

        e.deselect_topping("onion").unwrap();
        assert_eq!(e.pieces("broccoli"), settled);
    }

    #[test]
    fn test_reselect_generates_fresh_activation() {
        let mut e = engine();
        e.select_topping("basil").unwrap();
        let first = e.topping_state("basil").unwrap().activation;
        e.deselect_topping("basil").unwrap();
        e.select_topping("basil").unwrap();
        let second = e.topping_state("basil").unwrap();
        assert_ne!(first, second.activation);
        assert!(second.is_animating());
    }

    #[test]
    fn test_set_pizza_clears_toppings() {
        let mut e = engine();
        e.select_topping("basil").unwrap();
        e.select_topping("onion").unwrap();

        assert_eq!(e.set_pizza("margherita"), Ok(false));
        assert_eq!(e.selected_toppings().len(), 2);

        assert_eq!(e.set_pizza("hawaiian"), Ok(true));
        assert!(e.selected_toppings().is_empty());
        assert_eq!(e.pending_timers(), 0);
        assert!((e.total_price() - 20.0).abs() < 1e-9);

        assert!(matches!(e.set_pizza("calzone"), Err(EngineError::UnknownPizza(_))));
        assert_eq!(e.pizza().id, "hawaiian");
    }

    #[test]
    fn test_toggle() {
        let mut e = engine();
        assert_eq!(e.toggle_topping("mushroom"), Ok(true));
        assert_eq!(e.toggle_topping("mushroom"), Ok(false));
        assert!(!e.is_selected("mushroom"));
    }

    #[test]
    fn test_events_sequence() {
        let mut e = engine();
        e.select_topping("sausage").unwrap();
        let pieces = e.topping_state("sausage").unwrap().pieces().len();
        let horizon = settle_horizon(&e, "sausage");
        e.advance_to(horizon);

        let events = e.drain_events();
        assert_eq!(
            events.first(),
            Some(&EngineEvent::ToppingAdded {
                topping: "sausage",
                pieces
            })
        );
        assert_eq!(
            events.last(),
            Some(&EngineEvent::ToppingSettled { topping: "sausage" })
        );
        let entering = events
            .iter()
            .filter(|ev| matches!(ev, EngineEvent::PieceEntering { .. }))
            .count();
        let settled = events
            .iter()
            .filter(|ev| matches!(ev, EngineEvent::PieceSettled { .. }))
            .count();
        assert_eq!(entering, pieces);
        assert_eq!(settled, pieces);
        assert!(e.drain_events().is_empty());
    }

    #[test]
    fn test_next_transition_follows_stagger() {
        let mut e = engine();
        assert_eq!(e.next_transition_ms(), None);
        e.select_topping("onion").unwrap();
        let step = e.tuning().layout.stagger_step_ms;
        assert_eq!(e.next_transition_ms(), Some(step));

        e.advance_to(step);
        assert_eq!(e.next_transition_ms(), Some(2 * step));

        e.deselect_topping("onion").unwrap();
        assert_eq!(e.next_transition_ms(), None);
    }

    #[test]
    fn test_target_size_scale_jumps_while_scale_springs() {
        let mut e = engine();
        e.set_size(PizzaSize::Large);
        assert_eq!(e.target_size_scale(), PizzaSize::Large.scale());
        assert_eq!(e.size_scale(), PizzaSize::Medium.scale());

        e.advance(e.tuning().entrance.settle_ms);
        assert_eq!(e.size_scale(), e.target_size_scale());
    }

    #[test]
    fn test_frame_clock_carries_fractions() {
        let mut clock = FrameClock::new();
        let steps: Vec<u64> = (0..4).map(|_| clock.step(16.25)).collect();
        assert_eq!(steps, vec![16, 16, 16, 17]);

        // 60 frames at 60 Hz stay within a millisecond of real time
        let mut clock = FrameClock::new();
        let total: u64 = (0..60).map(|_| clock.step(16.666)).sum();
        assert_eq!(total, 999);
    }

    #[test]
    fn test_frame_clock_ignores_bad_deltas() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.step(0.5), 0);
        assert_eq!(clock.step(-20.0), 0);
        assert_eq!(clock.step(f64::NAN), 0);
        assert_eq!(clock.step(0.5), 1);

        clock.step(0.75);
        clock.reset();
        assert_eq!(clock.step(0.5), 0);
    }

    #[test]
    fn test_frame_clock_keeps_stagger_timing() {
        let mut e = engine();
        let mut clock = FrameClock::new();
        e.select_topping("onion").unwrap();
        // 3 frames of 16.67 ms reach the 50 ms stagger step
        for _ in 0..3 {
            e.advance(clock.step(16.67));
        }
        assert_eq!(e.now_ms(), 50);
        let piece = e.topping_state("onion").unwrap().piece(1).unwrap();
        assert!(matches!(piece.state, PieceState::Entering { started_at_ms: 50 }));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut e = engine();
        e.advance_to(500);
        e.advance_to(100);
        assert_eq!(e.now_ms(), 500);
    }

    #[test]
    fn test_select_at_end_of_clock() {
        let mut e = engine();
        e.advance(u64::MAX);
        assert_eq!(e.now_ms(), u64::MAX);
        assert_eq!(e.select_topping("basil"), Ok(true));
        // Every deadline saturates to now, so the whole entrance lands at once
        assert!(!e.is_topping_animating("basil"));
        assert_eq!(e.pending_timers(), 0);
        assert_eq!(settle_horizon(&e, "basil"), u64::MAX);
    }

    #[test]
    fn test_huge_stagger_from_json_does_not_overflow() {
        let tuning =
            Tuning::from_json(r#"{"layout":{"stagger_step_ms":18446744073709551615}}"#).unwrap();
        let mut e = PizzaEngine::with_seed(tuning, 12345);
        e.advance(1_000);
        assert_eq!(e.select_topping("onion"), Ok(true));
        e.advance(e.tuning().entrance.settle_ms);

        // Only piece 0 was due before the end of the clock
        let state = e.topping_state("onion").unwrap();
        assert_eq!(state.piece(0).unwrap().state, PieceState::Settled);
        assert_eq!(state.piece(1).unwrap().state, PieceState::Pending);
        assert!(e.is_topping_animating("onion"));
        assert_eq!(settle_horizon(&e, "onion"), u64::MAX);
    }

    #[test]
    fn test_degenerate_radius_surfaces_layout_error() {
        let mut e = engine().with_pizza_radius(0.0);
        assert!(matches!(e.select_topping("basil"), Err(EngineError::Layout(_))));
        assert!(!e.is_selected("basil"));
    }

    #[test]
    fn test_pending_pieces_are_invisible() {
        let mut e = engine();
        e.select_topping("onion").unwrap();
        let views = e.pieces("onion");
        assert!(views.len() >= 8);
        for view in &views[1..] {
            assert_eq!(view.opacity, 0.0);
            assert_eq!(view.scale, 0.0);
        }
    }
}
