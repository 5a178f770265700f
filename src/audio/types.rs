//! Transport state and the traits the controller drives.

use std::path::Path;

use crate::error::LoadError;

/// Playing/stopped status of a voice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stopped,
    Playing,
}

impl Transport {
    pub fn from_playing(playing: bool) -> Self {
        if playing { Self::Playing } else { Self::Stopped }
    }
}

/// One loaded, decodable, playable audio resource.
///
/// A voice plays its resource exactly once. `stop` keeps the position, so a
/// following `play` resumes; a voice that ran to the end restarts from the top.
pub trait Voice {
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn stop(&mut self);

    fn transport(&self) -> Transport {
        Transport::from_playing(self.is_playing())
    }
}

/// Something that can turn a resource file into a paused `Voice`.
pub trait AudioEngine {
    type Voice: Voice;

    fn open(&self, path: &Path) -> Result<Self::Voice, LoadError>;
}
