use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use fs_err::{File, OpenOptions};
use parlance::{Speaker, WaitFuture};

use crate::Error;

/// A [`Speaker`] that appends each line to a transcript file.
#[derive(Debug)]
pub struct TranscriptSpeaker {
    path: PathBuf,
    file: Mutex<File>,
}

impl TranscriptSpeaker {
    /// Opens the transcript at `path` for appending, creating the file if it
    /// does not exist yet.
    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::TranscriptOpenFailure(path.clone(), e))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Speaker for TranscriptSpeaker {
    fn speak(&self, message: &str) -> Result<WaitFuture<'static>, parlance::Error> {
        let mut file = self.file.lock().unwrap();
        writeln!(file, "{message}").map_err(|e| parlance::Error::Other(e.into()))?;
        file.flush().map_err(|e| parlance::Error::Other(e.into()))?;
        Ok(WaitFuture::ready())
    }
}
