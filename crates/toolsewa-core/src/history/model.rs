//! Activity record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A durable log entry for one completed tool action.
///
/// Records are created only while an account exists and are kept
/// newest-first. The log has no eviction policy; growth is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique record identifier (UUID format)
    pub id: String,
    /// Identifier of the tool that produced the result
    pub tool_id: String,
    /// Human-readable tool name at the time of the action
    pub tool_name: String,
    /// Display string summarizing the result
    pub result_summary: String,
    /// Timestamp when the action completed
    pub recorded_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Creates a record with a fresh id and the current timestamp.
    pub fn new(tool_id: &str, tool_name: &str, result_summary: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool_id: tool_id.to_string(),
            tool_name: tool_name.to_string(),
            result_summary: result_summary.to_string(),
            recorded_at: Utc::now(),
        }
    }
}
