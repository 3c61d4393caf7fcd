//! Per-tick signal abstractions.
//!
//! This module provides the traits and small value types shared by every
//! stage of a reconstruction pipeline:
//! - `Signal` trait for anything that yields one sample per tick
//! - `ConstantSignal` for fixed values

mod signal;

pub use signal::{ConstantSignal, Signal};
