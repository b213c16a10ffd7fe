//! Per-thread value lifetime accounting.
//!
//! Every payload creation bumps `created`; every final release bumps
//! `released`. Values are `!Send`, so a thread's counters see every value
//! that thread ever made.

use std::cell::Cell;

thread_local! {
    static CREATED: Cell<u64> = const { Cell::new(0) };
    static RELEASED: Cell<u64> = const { Cell::new(0) };
}

pub(crate) fn record_created() {
    CREATED.with(|c| c.set(c.get() + 1));
}

pub(crate) fn record_released() {
    RELEASED.with(|c| c.set(c.get() + 1));
}

/// Payloads created on this thread.
pub fn created_values() -> u64 {
    CREATED.with(Cell::get)
}

/// Payloads freed on this thread.
pub fn released_values() -> u64 {
    RELEASED.with(Cell::get)
}

/// Payloads created on this thread and not yet freed.
pub fn live_values() -> u64 {
    created_values().saturating_sub(released_values())
}
