//! Audio engine seam and its `rodio` implementation.
//!
//! The playback controller only talks to the `AudioEngine` / `Voice` traits
//! defined in `types`; `sink` provides the real output device.

mod sink;
mod types;

pub use sink::RodioEngine;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;
