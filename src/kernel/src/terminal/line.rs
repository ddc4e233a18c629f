//! Fixed-capacity command line buffer.

use core::fmt;

/// Maximum number of characters in one command line.
pub const LINE_CAPACITY: usize = 31;

/// The line currently being typed, or one recalled from history.
///
/// Holds printable ASCII only, so the contents are always valid UTF-8.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CommandBuffer {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Appends `c`. Returns `false`, leaving the buffer unchanged, if the
    /// buffer is full or `c` is not printable ASCII.
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() || !(c.is_ascii_graphic() || c == ' ') {
            return false;
        }
        self.bytes[self.len] = c as u8;
        self.len += 1;
        true
    }

    /// Removes and returns the last character.
    pub fn pop(&mut self) -> Option<char> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(char::from(self.bytes[self.len]))
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether another character would be dropped.
    pub fn is_full(&self) -> bool {
        self.len == LINE_CAPACITY
    }

    /// The buffer contents.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CommandBuffer {
    /// Copies the printable prefix of `text` that fits.
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        for c in text.chars() {
            if !buffer.push(c) {
                break;
            }
        }
        buffer
    }
}

impl fmt::Debug for CommandBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandBuffer").field(&self.as_str()).finish()
    }
}
