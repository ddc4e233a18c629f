//! Command history ring.
//!
//! Entries are addressed by how many steps back from the newest they are:
//! `get(0)` is the line recorded last.

use super::line::CommandBuffer;

/// Number of lines remembered.
pub const HISTORY_CAPACITY: usize = 10;

/// History with the default capacity.
pub type History = HistoryBuffer<HISTORY_CAPACITY>;

/// Fixed-capacity FIFO of accepted command lines.
///
/// When full, recording a new line evicts the oldest one.
pub struct HistoryBuffer<const N: usize> {
    entries: [CommandBuffer; N],
    /// Slot of the oldest entry.
    head: usize,
    len: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Creates an empty history.
    pub const fn new() -> Self {
        Self {
            entries: [CommandBuffer::new(); N],
            head: 0,
            len: 0,
        }
    }

    /// Appends `line` as the newest entry. Empty lines are not recorded.
    pub fn record(&mut self, line: CommandBuffer) {
        if line.is_empty() || N == 0 {
            return;
        }

        if self.len == N {
            log::debug!("history full, evicting {:?}", self.entries[self.head]);
            self.entries[self.head] = line;
            self.head = (self.head + 1) % N;
        } else {
            self.entries[(self.head + self.len) % N] = line;
            self.len += 1;
        }
    }

    /// Returns the entry `steps_back` steps before the newest one.
    pub fn get(&self, steps_back: usize) -> Option<&CommandBuffer> {
        if steps_back >= self.len {
            return None;
        }
        Some(&self.entries[(self.head + self.len - 1 - steps_back) % N])
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> CommandBuffer {
        CommandBuffer::from(text)
    }

    #[test]
    fn test_history_roundtrip() {
        let mut history = History::new();
        history.record(line("ls"));
        history.record(line("pwd"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().as_str(), "pwd");
        assert_eq!(history.get(1).unwrap().as_str(), "ls");
        assert!(history.get(2).is_none());
    }

    #[test]
    fn test_empty_lines_not_recorded() {
        let mut history = History::new();
        history.record(CommandBuffer::new());
        assert!(history.is_empty());
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let mut history = History::new();
        let names = [
            "cmd0", "cmd1", "cmd2", "cmd3", "cmd4", "cmd5", "cmd6", "cmd7", "cmd8", "cmd9",
            "cmd10",
        ];
        for name in names {
            history.record(line(name));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.get(0).unwrap().as_str(), "cmd10");
        assert_eq!(history.get(HISTORY_CAPACITY - 1).unwrap().as_str(), "cmd1");
        assert!(history.get(HISTORY_CAPACITY).is_none());
    }

    #[test]
    fn test_eviction_wraps_repeatedly() {
        let mut history = HistoryBuffer::<3>::new();
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            history.record(line(name));
        }
        assert_eq!(history.capacity(), 3);
        assert_eq!(history.get(0).unwrap().as_str(), "g");
        assert_eq!(history.get(1).unwrap().as_str(), "f");
        assert_eq!(history.get(2).unwrap().as_str(), "e");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.record(line("help"));
        history.record(line("help"));
        assert_eq!(history.len(), 2);
    }
}
