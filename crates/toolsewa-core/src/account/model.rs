//! UserAccount domain model.
//!
//! Represents the mock identity attached to this installation after a login.
//! There is no credential verification anywhere; an account is created
//! locally and exists only to lift the anonymous usage limit and to key the
//! activity log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A locally created user identity.
///
/// Present only after `login_with_email` / `login_with_provider`; absence
/// means the visitor is anonymous and subject to the usage limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique account identifier (UUID format)
    pub id: String,
    /// Display name shown to the user
    pub display_name: String,
    /// Email address the account was created with
    pub email: String,
    /// Premium flag. Locally created accounts are never premium.
    pub is_premium: bool,
    /// Timestamp when the account was created
    pub joined_at: DateTime<Utc>,
}

impl UserAccount {
    /// Creates an account from an email address.
    ///
    /// The display name is the local part of the address; an address without
    /// an `@` uses the whole string.
    pub fn from_email(email: &str) -> Self {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            display_name,
            email: email.to_string(),
            is_premium: false,
            joined_at: Utc::now(),
        }
    }

    /// Creates an account from an external identity provider label.
    ///
    /// No real external protocol is involved; the provider name only seeds
    /// the display name and a synthesized address.
    pub fn from_provider(provider: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: format!("{provider}-user"),
            email: format!("{provider}@accounts.local"),
            is_premium: false,
            joined_at: Utc::now(),
        }
    }
}
