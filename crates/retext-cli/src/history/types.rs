use serde::{Deserialize, Serialize};

/// One persisted transform invocation. Immutable once created; removed only
/// by an exact-triple deletion or a full clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub input: String,
    pub output: String,
    pub note: String,
    pub timestamp_ms: i64,
}

impl HistoryRecord {
    /// Exact-match on the (input, output, timestamp) triple. The note is
    /// deliberately not part of the identity.
    pub fn matches(&self, input: &str, output: &str, timestamp_ms: i64) -> bool {
        self.timestamp_ms == timestamp_ms && self.input == input && self.output == output
    }
}
