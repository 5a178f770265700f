//! Error types for loading tracks.

use std::path::PathBuf;

use thiserror::Error;

/// Why a track could not be turned into a playable voice.
///
/// These never reach the UI: the playback controller logs them and keeps the
/// most recent one as a diagnostic.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("track index {index} is out of range (have {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("resource {name}.{extension} not found in bundle {}", .bundle.display())]
    NotFound {
        name: String,
        extension: String,
        bundle: PathBuf,
    },

    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
}

impl LoadError {
    /// True when the resource was never located (as opposed to located but unusable).
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
