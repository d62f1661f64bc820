//! # Order Number Sequence
//!
//! Hands out human-facing order numbers.
//!
//! ## Guarantees
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  next_number()  ──►  1, 2, 3, ...                                       │
//! │                                                                         │
//! │  • Strictly increasing by exactly one per call                         │
//! │  • Never reused, even when the order that drew it is dropped           │
//! │  • Never wraps: once exhausted, try_next_number returns None            │
//! │  • Safe to share between threads (single atomic update)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Order::new` draws from [`OrderNumberSequence::global`]; tests and callers
//! that need a controlled start inject their own sequence through
//! `Order::with_sequence`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use ts_rs::TS;

/// First number handed out by a fresh sequence.
pub const FIRST_ORDER_NUMBER: u64 = 1;

static GLOBAL_SEQUENCE: OrderNumberSequence = OrderNumberSequence::new();

/// Human-facing order number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderNumber(u64);

impl OrderNumber {
    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderNumber(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic counter shared by every order constructed from it.
#[derive(Debug)]
pub struct OrderNumberSequence {
    next: AtomicU64,
}

impl OrderNumberSequence {
    /// A sequence starting at [`FIRST_ORDER_NUMBER`].
    pub const fn new() -> Self {
        Self::starting_at(FIRST_ORDER_NUMBER)
    }

    pub const fn starting_at(first: u64) -> Self {
        OrderNumberSequence {
            next: AtomicU64::new(first),
        }
    }

    /// The process-wide sequence used by `Order::new`.
    pub fn global() -> &'static OrderNumberSequence {
        &GLOBAL_SEQUENCE
    }

    /// Takes the next number, or `None` once the sequence is exhausted.
    ///
    /// The counter never wraps: `u64::MAX` is never handed out, and every
    /// call after the last number returns `None`.
    pub fn try_next_number(&self) -> Option<OrderNumber> {
        // Relaxed is enough: only the uniqueness of each value matters.
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
            .map(OrderNumber)
    }

    /// Takes the next number.
    ///
    /// # Panics
    /// If the sequence is exhausted (see [`try_next_number`](Self::try_next_number)).
    pub fn next_number(&self) -> OrderNumber {
        match self.try_next_number() {
            Some(number) => number,
            None => panic!("order number sequence exhausted"),
        }
    }

    /// The number the next successful draw will return.
    pub fn peek(&self) -> OrderNumber {
        OrderNumber(self.next.load(Ordering::Relaxed))
    }
}

impl Default for OrderNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
