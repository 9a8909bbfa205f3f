//! Activity log repository trait.

use crate::error::Result;
use crate::history::model::ActivityRecord;

/// Repository for the activity log.
///
/// The log is persisted as one full ordered list (newest first) and
/// rewritten in its entirety on every mutation.
pub trait ActivityRepository: Send + Sync {
    /// Loads the persisted log. A missing record is an empty log.
    fn load(&self) -> Result<Vec<ActivityRecord>>;

    /// Persists the full log, replacing the previous contents.
    fn save(&self, records: &[ActivityRecord]) -> Result<()>;
}
