//! Block-local interactive state.
//!
//! A handful of blocks carry state scoped to one rendered instance: the
//! accordion's open/closed flags and the code block's transient "copied"
//! acknowledgement. Both reset when the block is freshly constructed and
//! never leak across blocks. The image aspect state lives in
//! [`super::aspect`].

use std::time::{Duration, Instant};

/// Open/closed flags for an accordion block's items.
///
/// Exactly the first item starts open. Toggling an item flips that item
/// only; items are independent, not mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    open: Vec<bool>,
}

impl Disclosure {
    /// Create state for `len` items, item 0 open.
    pub fn new(len: usize) -> Self {
        let mut open = vec![false; len];
        if let Some(first) = open.first_mut() {
            *first = true;
        }
        Self { open }
    }

    /// Number of items tracked.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Check whether item `index` is open. Out-of-range indexes are closed.
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip item `index`. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = !*flag;
        }
    }
}

/// How long the copy acknowledgement stays visible.
pub const COPY_ACK: Duration = Duration::from_secs(2);

/// Transient acknowledgement for the code block's copy affordance.
///
/// Triggering acknowledges for a fixed two-second window measured against
/// caller-supplied instants, so tests never sleep. Re-triggering restarts
/// the window; reset cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    acknowledged_at: Option<Instant>,
}

impl CopyFeedback {
    /// Create the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.acknowledged_at = Some(now);
    }

    /// Check whether the acknowledgement is still showing at `now`.
    pub fn is_acknowledged(&self, now: Instant) -> bool {
        match self.acknowledged_at {
            Some(at) => now.saturating_duration_since(at) < COPY_ACK,
            None => false,
        }
    }

    /// Cancel any pending acknowledgement.
    pub fn reset(&mut self) {
        self.acknowledged_at = None;
    }
}
