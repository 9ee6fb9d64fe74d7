//! Record module - one extracted error occurrence

use serde::{Deserialize, Serialize};

/// One row from the task table that recorded an execution error
///
/// Records are immutable: the store builds them from rows, the orchestrator
/// owns them for the duration of one run, and the sink serializes them. The
/// wire names (`taskId`, `createdAt`, `errorText`) are the output file's
/// contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// Opaque identifier of the failed task
    pub task_id: String,

    /// Creation time in the fixed `YYYY-MM-DD HH:MM:SS.ffffff` layout
    pub created_at: String,

    /// The recorded error text; always non-empty for extracted records
    pub error_text: String,
}
