use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Request,
    Response,
    Error,
}

/// One append-only record of pipeline activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp_ms: u64,
    pub kind: LogKind,
    pub content: String,
}

#[derive(Default)]
struct LogState {
    next_id: u64,
    entries: Vec<LogEntry>,
}

/// In-memory append-only request/response log.
///
/// Cheaply clonable handle; every clone appends to the same session log.
/// Entries are immutable once appended, ids are process-local sequence
/// numbers, and nothing survives the session (no persistence).
#[derive(Clone, Default)]
pub struct RequestLog {
    inner: Arc<RwLock<LogState>>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, kind: LogKind, content: impl Into<String>) -> u64 {
        let mut state = self.inner.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(LogEntry {
            id,
            timestamp_ms: now_ms(),
            kind,
            content: content.into(),
        });
        id
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Clears all entries. Ids keep counting up so cleared entries are never
    /// reissued.
    pub fn clear(&self) {
        self.inner.write().entries.clear();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_increasing_ids() {
        let log = RequestLog::new();
        let a = log.append(LogKind::Info, "first");
        let b = log.append(LogKind::Request, "second");
        assert!(b > a);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, LogKind::Info);
        assert_eq!(entries[1].content, "second");
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let log = RequestLog::new();
        log.append(LogKind::Info, "one");
        log.clear();
        assert!(log.is_empty());

        let id = log.append(LogKind::Error, "two");
        assert_eq!(id, 1);
    }

    #[test]
    fn test_clones_share_the_same_log() {
        let log = RequestLog::new();
        let clone = log.clone();
        clone.append(LogKind::Response, "shared");
        assert_eq!(log.len(), 1);
    }
}
