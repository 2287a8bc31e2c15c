//! Bounded journal of state changes.
//!
//! Unlike [`UndoHistory`](super::UndoHistory), the journal is never
//! rewound: undo and redo are recorded as transitions of their own. It is
//! bounded, keeping only the most recent records.

use super::id::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// A configured transition fired by an event.
    Event(EventId),
    /// A direct jump via `change_state`.
    Jump,
    /// A return to the initial state.
    Reset,
    Undo,
    Redo,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => write!(f, "event:{event}"),
            Self::Jump => f.write_str("jump"),
            Self::Reset => f.write_str("reset"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use rewind::core::{StateId, TransitionKind, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: StateId::from("idle"),
///     to: StateId::from("running"),
///     kind: TransitionKind::Jump,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Why the change happened
    pub kind: TransitionKind,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Journal capacity used unless the machine is configured otherwise.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Ordered journal of the most recent state changes a machine performed.
///
/// Holds at most `capacity` records; appending past that drops the oldest.
/// A capacity of zero disables recording.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    records: VecDeque<TransitionRecord>,
    capacity: usize,
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    /// Create a journal keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_JOURNAL_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the limit, dropping the oldest records that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.records.len() > capacity {
            self.records.pop_front();
        }
    }

    /// Append a record stamped with the current time.
    pub fn record(&mut self, from: StateId, to: StateId, kind: TransitionKind) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(TransitionRecord {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        });
    }

    /// Drop every record, keeping the capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> &VecDeque<TransitionRecord> {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// States visited in order: the first source, then each destination.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|record| &record.to));
        path
    }

    /// Time elapsed between the first and last retained record.
    ///
    /// Returns `None` for an empty journal.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StateId {
        StateId::from(s)
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
        assert!(log.last().is_none());
    }

    #[test]
    fn path_follows_records() {
        let mut log = TransitionLog::new();
        log.record(id("idle"), id("running"), TransitionKind::Event("start".into()));
        log.record(id("running"), id("idle"), TransitionKind::Undo);

        let path = log.path();
        assert_eq!(path, vec![&id("idle"), &id("running"), &id("idle")]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().map(|r| &r.kind), Some(&TransitionKind::Undo));
    }

    #[test]
    fn duration_covers_first_to_last() {
        let mut log = TransitionLog::new();
        log.record(id("a"), id("b"), TransitionKind::Jump);
        std::thread::sleep(Duration::from_millis(10));
        log.record(id("b"), id("a"), TransitionKind::Reset);

        assert!(log.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn oldest_records_are_dropped_past_capacity() {
        let mut log = TransitionLog::with_capacity(3);
        for target in ["b", "c", "d", "e", "f"] {
            log.record(id("a"), id(target), TransitionKind::Jump);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.capacity(), 3);
        let targets: Vec<_> = log.records().iter().map(|r| r.to.as_str()).collect();
        assert_eq!(targets, vec!["d", "e", "f"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut log = TransitionLog::with_capacity(0);
        log.record(id("a"), id("b"), TransitionKind::Jump);
        assert!(log.is_empty());
    }

    #[test]
    fn shrinking_capacity_keeps_newest() {
        let mut log = TransitionLog::new();
        assert_eq!(log.capacity(), DEFAULT_JOURNAL_CAPACITY);
        log.record(id("a"), id("b"), TransitionKind::Jump);
        log.record(id("b"), id("c"), TransitionKind::Jump);

        log.set_capacity(1);
        assert_eq!(log.path(), vec![&id("b"), &id("c")]);
    }

    #[test]
    fn clear_drops_records_but_keeps_capacity() {
        let mut log = TransitionLog::with_capacity(8);
        log.record(id("a"), id("b"), TransitionKind::Jump);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 8);
    }

    #[test]
    fn kind_display_names_the_cause() {
        assert_eq!(TransitionKind::Event("pause".into()).to_string(), "event:pause");
        assert_eq!(TransitionKind::Redo.to_string(), "redo");
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::new();
        log.record(id("a"), id("b"), TransitionKind::Jump);

        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records(), log.records());
    }
}
