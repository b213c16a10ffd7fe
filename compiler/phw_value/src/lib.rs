//! Phw Value - tagged runtime values with shared ownership.
//!
//! A [`Value`] is a handle to a reference-counted payload. Cloning a handle
//! (or calling [`Value::add_ref`]) takes one more ownership unit; dropping a
//! handle (or calling [`Value::release`]) gives one back. The payload, and
//! any string bytes it owns, is freed exactly when the last unit is released.
//!
//! [`stats`] counts creations and releases per thread so that lifetime
//! properties can be checked directly.

mod render;
pub mod stats;
mod value;

pub use render::{format_float, render_into};
pub use value::{Value, ValueData, ValueKind};
