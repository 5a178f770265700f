//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the bundle lookup, the
//! screen geometry and logging, plus helpers to load them from disk.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;
