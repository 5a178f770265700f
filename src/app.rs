//! Application module: the screen model the TUI renders and the runtime mutates.
//!
//! The `App` model lives in `app::model` and holds the playback controller,
//! the play button title and the fade slider.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
