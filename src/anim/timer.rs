//! Scheduled piece transitions
//!
//! Timers are plain data in a min-heap keyed by due time; nothing runs on its
//! own. The owner pops due timers while advancing its clock and must re-check
//! that the target activation still exists before applying one.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Which transition a timer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Pending -> Entering
    Enter,
    /// Entering -> Settled
    Settle,
}

/// A scheduled transition for one piece of one topping activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub due_ms: u64,
    pub topping_id: &'static str,
    pub activation: u64,
    pub piece_id: u32,
    pub kind: TimerKind,
    /// Insertion order, breaks ties between equal due times
    seq: u64,
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_ms
            .cmp(&other.due_ms)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending timers, earliest first
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        due_ms: u64,
        topping_id: &'static str,
        activation: u64,
        piece_id: u32,
        kind: TimerKind,
    ) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Timer {
            due_ms,
            topping_id,
            activation,
            piece_id,
            kind,
            seq,
        }));
    }

    /// Remove and return the earliest timer due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        match self.heap.peek() {
            Some(Reverse(timer)) if timer.due_ms <= now_ms => self.heap.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    /// Drop every timer belonging to an activation; returns how many were dropped
    pub fn cancel_activation(&mut self, activation: u64) -> usize {
        let before = self.heap.len();
        self.heap.retain(|Reverse(t)| t.activation != activation);
        before - self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(t)| t.due_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
