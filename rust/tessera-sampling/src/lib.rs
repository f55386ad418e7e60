//! Reproducible, memory-bounded subset selection over large element streams.
//!
//! This crate selects a target fraction of an ordered element stream (for
//! instance pixels drawn from a remote-sensing dataset) without ever storing
//! one decision per element. A short boolean tile, whose period preferably
//! divides the stream length, is replicated cyclically across the stream; a
//! smaller corrective tile is consulted on primary misses to nudge the
//! realized count toward the exact target. The whole selection replays from
//! a single seed.
//!
//! The per-element decision procedure is exposed through the [`Sampler`]
//! trait, driven by an external iteration loop that calls
//! [`take_sample`](Sampler::take_sample) exactly once per stream element in
//! stream order, after [`reset`](Sampler::reset) has prepared the session.

pub mod config;
pub mod pattern;
pub mod period;
pub mod sampler;
pub mod tile;


// Re-export main types
pub use config::PatternSamplerConfig;
pub use pattern::PatternSampler;
pub use sampler::{Sampler, SamplerState};
