//! Stochastic ground-truth sources.
//!
//! Both generators are generic over the RNG; pass a seeded RNG for
//! reproducible runs.

mod walk;
mod white;

pub use walk::RandomWalk;
pub use white::WhiteNoise;
