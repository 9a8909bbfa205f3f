//! Usage counter repository trait.

use crate::error::Result;
use crate::session::model::UsageCounter;

/// Repository for the anonymous usage counter.
pub trait UsageRepository: Send + Sync {
    /// Loads the persisted counter. A missing record is a zero counter.
    fn load(&self) -> Result<UsageCounter>;

    /// Persists the counter, replacing the previous value.
    fn save(&self, counter: &UsageCounter) -> Result<()>;
}
