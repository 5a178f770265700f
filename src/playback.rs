//! Playback controller: owns the single voice and mediates load/toggle.

mod controller;

pub use controller::*;
