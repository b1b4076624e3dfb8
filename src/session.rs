//! Persistence of the most recent generated document
//!
//! One JSON file holds one `LessonPlan`. Saving overwrites any prior value;
//! loading treats unreadable content as absent, clears it, and never
//! surfaces an error to the caller.

use std::fs;
use std::path::PathBuf;

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::domain::LessonPlan;

/// Well-known file name under the storage directory
const SESSION_FILE: &str = "last_plan.json";

/// Store for the single retained document
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// Persist the document, replacing any prior one
    pub fn save(&self, plan: &LessonPlan) -> Result<()> {
        fs::create_dir_all(&self.dir).context("Failed to create session directory")?;

        let json = serde_json::to_string_pretty(plan).context("Failed to serialize document")?;
        fs::write(self.file(), json).context("Failed to write session file")?;

        debug!(path = %self.file().display(), "save: document persisted");
        Ok(())
    }

    /// Load the persisted document, if any
    ///
    /// Corrupt content degrades to `None`: the file is removed and a warning
    /// logged. Persistence corruption is never a user-facing error.
    pub fn load(&self) -> Option<LessonPlan> {
        let path = self.file();
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "load: unreadable session file");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(plan) => {
                debug!(path = %path.display(), "load: document restored");
                Some(plan)
            }
            Err(e) => {
                warn!(error = %e, "load: corrupt session file, clearing");
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// Drop the persisted document
    pub fn clear(&self) -> Result<()> {
        let path = self.file();
        if path.exists() {
            fs::remove_file(&path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}
