//! File-backed ActivityRepository implementation.

use std::path::Path;

use toolsewa_core::error::Result;
use toolsewa_core::history::{ActivityRecord, ActivityRepository};

use crate::paths::ToolsewaPaths;
use crate::storage::AtomicJsonFile;

/// Stores the full activity log in `history.json`, newest first.
///
/// An unreadable log reinitializes to empty with a warning; history is a
/// convenience record, not data the application can refuse to start over.
pub struct JsonActivityRepository {
    file: AtomicJsonFile<Vec<ActivityRecord>>,
}

impl JsonActivityRepository {
    /// Creates a repository at the default location, or under `base_dir`
    /// when given (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ToolsewaPaths::new(base_dir).history_file()?;
        Ok(Self {
            file: AtomicJsonFile::new(path),
        })
    }
}

impl ActivityRepository for JsonActivityRepository {
    fn load(&self) -> Result<Vec<ActivityRecord>> {
        match self.file.load() {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(e) if e.is_serialization() => {
                tracing::warn!("stored activity log is unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, records: &[ActivityRecord]) -> Result<()> {
        self.file.save(&records.to_vec())
    }
}
