//! `rodio`-backed engine: one output stream, one `Sink` per voice.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, StreamError};

use crate::error::LoadError;

use super::types::{AudioEngine, Voice};

pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    /// Open the system's default output device.
    pub fn open_default() -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land on
        // top of the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioEngine for RodioEngine {
    type Voice = RodioVoice;

    fn open(&self, path: &Path) -> Result<RodioVoice, LoadError> {
        let voice = RodioVoice::new(Sink::connect_new(self.stream.mixer()), path)?;
        tracing::debug!(path = %path.display(), "voice ready");
        Ok(voice)
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// A single-playthrough sink. Dropping it stops the sound.
pub struct RodioVoice {
    sink: Sink,
    path: PathBuf,
}

impl RodioVoice {
    /// Queue one playthrough of `path` on `sink` and leave it paused.
    fn new(sink: Sink, path: &Path) -> Result<Self, LoadError> {
        sink.append(decode(path)?);
        sink.pause();
        Ok(Self {
            sink,
            path: path.to_path_buf(),
        })
    }
}

impl Voice for RodioVoice {
    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }

    fn play(&mut self) {
        if self.sink.empty() {
            // The one playthrough finished; queue the file again from the start.
            match decode(&self.path) {
                Ok(source) => self.sink.append(source),
                Err(e) => {
                    tracing::warn!(error = %e, "could not restart track");
                    return;
                }
            }
        }
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.pause();
    }
}
