use std::path::PathBuf;

use crate::audio::{AudioEngine, Transport, Voice};
use crate::bundle::Bundle;
use crate::error::LoadError;

/// Bundled track identifiers, in selector order.
pub const TRACKS: [&str; 2] = ["1", "2"];

/// Container extension of every bundled track.
pub const TRACK_EXTENSION: &str = "mp3";

/// Owns the one voice slot and the index of the track it was built from.
pub struct Controller<E: AudioEngine> {
    engine: E,
    bundle: Bundle,
    current: usize,
    voice: Option<E::Voice>,
    last_error: Option<LoadError>,
}

impl<E: AudioEngine> Controller<E> {
    pub fn new(engine: E, bundle: Bundle) -> Self {
        Self {
            engine,
            bundle,
            current: 0,
            voice: None,
            last_error: None,
        }
    }

    /// Replace the voice with a fresh one for `TRACKS[index]`.
    ///
    /// Failures are logged and kept as `last_error`; the current index and
    /// voice stay as they were.
    pub fn load(&mut self, index: usize) {
        match self.try_load(index) {
            Ok(path) => {
                tracing::info!(index, track = self.current_track(), path = %path.display(), "track loaded");
            }
            Err(e) => {
                if e.is_missing() {
                    tracing::warn!(index, error = %e, "track not in bundle");
                } else {
                    tracing::error!(index, error = %e, "track load failed");
                }
                self.last_error = Some(e);
            }
        }
    }

    fn try_load(&mut self, index: usize) -> Result<PathBuf, LoadError> {
        let name = TRACKS.get(index).ok_or(LoadError::IndexOutOfRange {
            index,
            len: TRACKS.len(),
        })?;

        let path = self
            .bundle
            .path_for_resource(name, TRACK_EXTENSION)
            .ok_or_else(|| LoadError::NotFound {
                name: name.to_string(),
                extension: TRACK_EXTENSION.to_string(),
                bundle: self.bundle.root().to_path_buf(),
            })?;

        let voice = self.engine.open(&path)?;
        // Dropping the previous voice stops it.
        self.voice = Some(voice);
        self.current = index;
        Ok(path)
    }

    /// Flip the transport: stop when playing, start otherwise.
    ///
    /// Without a voice this does nothing and reports `Stopped`.
    pub fn toggle(&mut self) -> Transport {
        let Some(voice) = self.voice.as_mut() else {
            return Transport::Stopped;
        };
        if voice.is_playing() {
            voice.stop();
        } else {
            voice.play();
        }
        voice.transport()
    }

    /// Start the loaded voice, if any.
    pub fn play(&mut self) -> Transport {
        if let Some(voice) = self.voice.as_mut() {
            voice.play();
        }
        self.transport()
    }

    pub fn transport(&self) -> Transport {
        self.voice
            .as_ref()
            .map_or(Transport::Stopped, |v| v.transport())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &'static str {
        TRACKS[self.current]
    }

    pub fn has_voice(&self) -> bool {
        self.voice.is_some()
    }

    #[cfg(test)]
    pub(crate) fn voice(&self) -> Option<&E::Voice> {
        self.voice.as_ref()
    }

    /// Most recent load failure, if any.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
}
