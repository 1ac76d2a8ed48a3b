//! Bounded message log for the front ends

use crate::session::Instruction;
use std::collections::VecDeque;

/// Lines kept before the oldest scroll off
pub const MESSAGE_LINES: usize = 24;

/// Most recent notifications, oldest first
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(MESSAGE_LINES)
    }
}

impl MessageLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Append every notification in `instructions`; returns how many were added
    pub fn record(&mut self, instructions: &[Instruction]) -> usize {
        let mut added = 0;
        for notification in instructions.iter().filter_map(Instruction::notification) {
            self.push(notification.to_string());
            added += 1;
        }
        added
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Notification;

    #[test]
    fn oldest_lines_drop_first() {
        let mut log = MessageLog::with_capacity(2);
        log.push("one");
        log.push("two");
        log.push("three");
        assert_eq!(log.lines().collect::<Vec<_>>(), vec!["two", "three"]);
    }

    #[test]
    fn default_keeps_twenty_four_lines() {
        let mut log = MessageLog::default();
        for i in 0..30 {
            log.push(format!("line {i}"));
        }
        assert_eq!(log.len(), MESSAGE_LINES);
        assert_eq!(log.lines().next(), Some("line 6"));
    }

    #[test]
    fn record_only_takes_notifications() {
        let mut log = MessageLog::default();
        let added = log.record(&[
            Instruction::RenderBoard,
            Instruction::AppendMessage(Notification::MatchFound),
            Instruction::ClearTransientHighlight,
            Instruction::AppendMessage(Notification::FoundWord(2)),
        ]);
        assert_eq!(added, 2);
        assert_eq!(
            log.lines().collect::<Vec<_>>(),
            vec!["Match found", "Found word: 2"]
        );
    }
}
