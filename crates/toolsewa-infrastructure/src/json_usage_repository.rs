//! File-backed UsageRepository implementation.

use std::path::Path;

use toolsewa_core::error::Result;
use toolsewa_core::session::{UsageCounter, UsageRepository};

use crate::paths::ToolsewaPaths;
use crate::storage::AtomicJsonFile;

/// Stores the anonymous usage counter in `usage.json`.
///
/// A record that fails to parse reinitializes to zero rather than failing;
/// losing the count only re-grants free uses, never blocks the user.
pub struct JsonUsageRepository {
    file: AtomicJsonFile<UsageCounter>,
}

impl JsonUsageRepository {
    /// Creates a repository at the default location, or under `base_dir`
    /// when given (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = ToolsewaPaths::new(base_dir).usage_file()?;
        Ok(Self {
            file: AtomicJsonFile::new(path),
        })
    }
}

impl UsageRepository for JsonUsageRepository {
    fn load(&self) -> Result<UsageCounter> {
        match self.file.load() {
            Ok(counter) => Ok(counter.unwrap_or_default()),
            Err(e) if e.is_serialization() => {
                tracing::warn!("stored usage counter is unreadable, resetting to zero: {e}");
                Ok(UsageCounter::default())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, counter: &UsageCounter) -> Result<()> {
        self.file.save(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUsageRepository::new(Some(temp_dir.path())).unwrap();
        assert_eq!(repo.load().unwrap().count(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUsageRepository::new(Some(temp_dir.path())).unwrap();

        repo.save(&UsageCounter::with_count(2)).unwrap();
        assert_eq!(repo.load().unwrap().count(), 2);
    }

    #[test]
    fn test_corrupt_counter_resets_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("usage.json"), "forty-two").unwrap();

        let repo = JsonUsageRepository::new(Some(temp_dir.path())).unwrap();
        assert_eq!(repo.load().unwrap().count(), 0);
    }
}
