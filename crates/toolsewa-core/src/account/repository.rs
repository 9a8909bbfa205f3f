//! Profile repository trait.

use crate::account::model::UserAccount;
use crate::error::Result;

/// Repository for the single persisted user profile.
///
/// The store holds at most one account per installation.
pub trait ProfileRepository: Send + Sync {
    /// Loads the stored account, if any.
    fn load(&self) -> Result<Option<UserAccount>>;

    /// Persists the account, replacing any previous one.
    fn save(&self, account: &UserAccount) -> Result<()>;

    /// Removes the stored account. Missing state is not an error.
    fn clear(&self) -> Result<()>;
}
