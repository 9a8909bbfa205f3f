//! File-backed ProfileRepository implementation.

use std::path::Path;

use toolsewa_core::account::{ProfileRepository, UserAccount};
use toolsewa_core::error::Result;

use crate::paths::ToolsewaPaths;
use crate::storage::AtomicJsonFile;

/// Stores the single user profile in `profile.json`.
///
/// A record that fails to parse is treated as absent: the visitor falls
/// back to anonymous instead of the application failing to start.
pub struct JsonProfileRepository {
    file: AtomicJsonFile<UserAccount>,
}

impl JsonProfileRepository {
    /// Creates a repository at the default location, or under `base_dir`
    /// when given (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ToolsewaPaths::new(base_dir).profile_file()?;
        Ok(Self {
            file: AtomicJsonFile::new(path),
        })
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn load(&self) -> Result<Option<UserAccount>> {
        match self.file.load() {
            Ok(account) => Ok(account),
            Err(e) if e.is_serialization() => {
                tracing::warn!("stored profile is unreadable, treating as absent: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, account: &UserAccount) -> Result<()> {
        self.file.save(account)
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()
    }
}
