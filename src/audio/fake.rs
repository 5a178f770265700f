//! In-memory engine for tests: no device, no decoding.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::LoadError;

use super::types::{AudioEngine, Voice};

/// Records every path it was asked to open and can be told to reject some.
#[derive(Default, Clone)]
pub struct FakeEngine {
    pub opened: Rc<RefCell<Vec<PathBuf>>>,
    pub undecodable: Rc<RefCell<HashSet<PathBuf>>>,
}

impl FakeEngine {
    pub fn reject(&self, path: impl Into<PathBuf>) {
        self.undecodable.borrow_mut().insert(path.into());
    }
}

impl AudioEngine for FakeEngine {
    type Voice = FakeVoice;

    fn open(&self, path: &Path) -> Result<FakeVoice, LoadError> {
        if self.undecodable.borrow().contains(path) {
            return Err(LoadError::Decode {
                path: path.to_path_buf(),
                reason: "unrecognized format".to_string(),
            });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(FakeVoice {
            path: path.to_path_buf(),
            playing: false,
        })
    }
}

#[derive(Debug)]
pub struct FakeVoice {
    pub path: PathBuf,
    pub playing: bool,
}

impl Voice for FakeVoice {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}
