use super::{DataStore, SNAPSHOT_FILENAME};
use crate::error::{GuestError, Result};
use crate::model::Attendee;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GuestError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Attendee>> {
        let data_file = self.snapshot_path();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(GuestError::Io)?;
        let attendees: Vec<Attendee> =
            serde_json::from_str(&content).map_err(GuestError::Serialization)?;
        Ok(attendees)
    }

    fn save(&mut self, attendees: &[Attendee]) -> Result<()> {
        self.ensure_dir()?;

        let content =
            serde_json::to_string_pretty(attendees).map_err(GuestError::Serialization)?;

        // Write then rename so a crash never leaves a half-written snapshot
        let tmp_file = self.root.join(format!(".guestlist-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(GuestError::Io)?;
        fs::rename(&tmp_file, self.snapshot_path()).map_err(GuestError::Io)?;
        debug!(count = attendees.len(), path = %self.snapshot_path().display(), "wrote snapshot");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let data_file = self.snapshot_path();
        if data_file.exists() {
            fs::remove_file(data_file).map_err(GuestError::Io)?;
        }
        Ok(())
    }
}
