//! Line editor with history recall.
//!
//! Collects one command line from key events, echoing edits through the
//! display surface.

use super::display::DisplaySurface;
use super::history::HistoryBuffer;
use super::line::CommandBuffer;
use super::scancode::KeyEvent;
use daos_hal::{CrtcRegisters, TextBuffer};

/// Editing state of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// The buffer holds what the user typed.
    Typing,
    /// The buffer mirrors the history entry this many steps back.
    Browsing(usize),
    /// Enter was pressed; the line is final.
    Done,
}

/// Single-line editor.
pub struct LineEditor {
    buffer: CommandBuffer,
    state: EditState,
}

impl LineEditor {
    /// Creates an editor ready for a new line.
    pub const fn new() -> Self {
        Self {
            buffer: CommandBuffer::new(),
            state: EditState::Typing,
        }
    }

    /// Starts a new line, dropping anything left from the previous one.
    pub fn begin(&mut self) {
        self.buffer.clear();
        self.state = EditState::Typing;
    }

    /// Current editing state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The line as edited so far.
    pub fn buffer(&self) -> &CommandBuffer {
        &self.buffer
    }

    /// Applies one key event.
    ///
    /// Returns the finished line when `key` is Enter; non-empty lines are
    /// recorded in `history` at that point. Keys arriving after Enter are
    /// ignored until [`LineEditor::begin`].
    pub fn handle_key<V, C, const N: usize>(
        &mut self,
        key: KeyEvent,
        display: &mut DisplaySurface<V, C>,
        history: &mut HistoryBuffer<N>,
    ) -> Option<CommandBuffer>
    where
        V: TextBuffer,
        C: CrtcRegisters,
    {
        if self.state == EditState::Done {
            return None;
        }

        match key {
            KeyEvent::Printable(c) => {
                if let EditState::Browsing(_) = self.state {
                    self.clear_line(display);
                    self.state = EditState::Typing;
                }
                self.insert(c, display);
            }
            KeyEvent::Backspace => self.backspace(display),
            KeyEvent::Enter => {
                display.write_text("\n");
                self.state = EditState::Done;
                history.record(self.buffer);
                return Some(self.buffer);
            }
            KeyEvent::HistoryPrev => self.history_prev(display, history),
            KeyEvent::HistoryNext => self.history_next(display, history),
            KeyEvent::Ignored => {}
        }
        None
    }

    fn insert<V: TextBuffer, C: CrtcRegisters>(
        &mut self,
        c: char,
        display: &mut DisplaySurface<V, C>,
    ) {
        if self.buffer.push(c) {
            let mut utf8 = [0u8; 4];
            display.write_text(c.encode_utf8(&mut utf8));
        }
    }

    fn backspace<V: TextBuffer, C: CrtcRegisters>(&mut self, display: &mut DisplaySurface<V, C>) {
        if self.buffer.pop().is_some() {
            display.erase_back(1);
        }
    }

    /// Erases the rendered line back to its start column and empties the
    /// buffer. A wrapped line is erased across rows, never above its first.
    fn clear_line<V: TextBuffer, C: CrtcRegisters>(&mut self, display: &mut DisplaySurface<V, C>) {
        display.erase_back(self.buffer.len());
        self.buffer.clear();
    }

    fn show<V: TextBuffer, C: CrtcRegisters>(
        &mut self,
        entry: CommandBuffer,
        display: &mut DisplaySurface<V, C>,
    ) {
        self.clear_line(display);
        self.buffer = entry;
        display.write_text(entry.as_str());
    }

    fn history_prev<V: TextBuffer, C: CrtcRegisters, const N: usize>(
        &mut self,
        display: &mut DisplaySurface<V, C>,
        history: &HistoryBuffer<N>,
    ) {
        let index = match self.state {
            EditState::Typing => 0,
            EditState::Browsing(index) => index + 1,
            EditState::Done => return,
        };
        if let Some(entry) = history.get(index).copied() {
            self.show(entry, display);
            self.state = EditState::Browsing(index);
        }
    }

    fn history_next<V: TextBuffer, C: CrtcRegisters, const N: usize>(
        &mut self,
        display: &mut DisplaySurface<V, C>,
        history: &HistoryBuffer<N>,
    ) {
        match self.state {
            // Stepping past the newest entry gives an empty line, not the
            // text typed before browsing started.
            EditState::Browsing(0) => {
                self.clear_line(display);
                self.state = EditState::Typing;
            }
            EditState::Browsing(index) => {
                if let Some(entry) = history.get(index - 1).copied() {
                    self.show(entry, display);
                    self.state = EditState::Browsing(index - 1);
                }
            }
            EditState::Typing | EditState::Done => {}
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
