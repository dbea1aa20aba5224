//! Notification log shared by every frontend.
use std::collections::VecDeque;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Position in the log since startup; survives eviction.
    pub sequence: u64,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, sequence: u64, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            sequence,
            level,
        }
    }
}

/// Bounded ring buffer of notifications; the oldest entry is evicted first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, level: MessageLevel) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let entry = MessageEntry::new(text, self.next_sequence, level);
        self.next_sequence += 1;
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, MessageLevel::Info);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(text, MessageLevel::Warning);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, MessageLevel::Error);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.info("one");
        log.warning("two");
        log.error("three");

        let texts: Vec<_> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.latest().map(|e| e.sequence), Some(2));
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(8);
        for text in ["a", "b", "c"] {
            log.info(text);
        }
        let texts: Vec<_> = log.recent(2).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut log = MessageLog::new(0);
        log.info("kept");
        log.info("replaced");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }
}
