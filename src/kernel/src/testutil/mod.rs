//! Test infrastructure for the DA-OS console.
//!
//! In-memory stand-ins for the console's devices, so the display, editor
//! and command loop can be exercised on the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use daos_kernel::terminal::{Console, Geometry};
//! use daos_kernel::testutil::{RecordingCrtc, ScriptedKeyboard, VgaMemory};
//!
//! let keys = [0x23, 0x12, 0x26, 0x19, 0x1C]; // "help" + Enter
//! let mut console = Console::new(
//!     VgaMemory::new(),
//!     RecordingCrtc::new(),
//!     ScriptedKeyboard::new(&keys),
//!     Geometry::VGA,
//! )?;
//! console.start();
//! console.step();
//! ```

use crate::terminal::input::KeyboardStatus;
use crate::terminal::scancode;
use daos_hal::{Cell, CrtcRegisters, KeyboardController, TextBuffer};

/// A text buffer in ordinary memory.
pub struct MemoryBuffer<const ROWS: usize, const COLS: usize> {
    cells: [[Cell; COLS]; ROWS],
}

/// Memory buffer with the VGA text mode dimensions.
pub type VgaMemory = MemoryBuffer<25, 80>;

impl<const ROWS: usize, const COLS: usize> MemoryBuffer<ROWS, COLS> {
    /// Creates a buffer of default-colored blanks.
    pub fn new() -> Self {
        Self::filled(Cell::BLANK)
    }

    /// Creates a buffer with every cell set to `cell`.
    pub fn filled(cell: Cell) -> Self {
        Self {
            cells: [[cell; COLS]; ROWS],
        }
    }

    /// All cells of one row.
    pub fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.cells[row]
    }

    /// The glyphs of one row as characters.
    pub fn row_text(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row].iter().map(|cell| char::from(cell.glyph))
    }

    /// Whether the row begins with `text`.
    pub fn row_starts_with(&self, row: usize, text: &str) -> bool {
        text.len() <= COLS
            && self.cells[row]
                .iter()
                .zip(text.bytes())
                .all(|(cell, byte)| cell.glyph == byte)
    }

    /// Whether `text` appears anywhere in the row.
    pub fn row_contains(&self, row: usize, text: &str) -> bool {
        let needle = text.as_bytes();
        if needle.is_empty() {
            return true;
        }
        self.cells[row]
            .windows(needle.len())
            .any(|window| window.iter().zip(needle).all(|(cell, &b)| cell.glyph == b))
    }

    /// First row containing `text`.
    pub fn find_row(&self, text: &str) -> Option<usize> {
        (0..ROWS).find(|&row| self.row_contains(row, text))
    }

    /// Whether the row holds only spaces.
    pub fn is_row_blank(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.glyph == b' ')
    }
}

impl<const ROWS: usize, const COLS: usize> Default for MemoryBuffer<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> TextBuffer for MemoryBuffer<ROWS, COLS> {
    fn rows(&self) -> usize {
        ROWS
    }

    fn cols(&self) -> usize {
        COLS
    }

    fn read_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

/// CRTC stand-in that decodes the cursor location registers.
#[derive(Debug, Default)]
pub struct RecordingCrtc {
    high: u8,
    low: u8,
    writes: usize,
}

impl RecordingCrtc {
    /// Creates a CRTC with the cursor at offset 0.
    pub const fn new() -> Self {
        Self {
            high: 0,
            low: 0,
            writes: 0,
        }
    }

    /// Linear cursor offset last programmed.
    pub fn offset(&self) -> usize {
        usize::from(u16::from_le_bytes([self.low, self.high]))
    }

    /// Number of register writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CrtcRegisters for RecordingCrtc {
    fn write_register(&mut self, index: u8, value: u8) {
        match index {
            0x0E => self.high = value,
            0x0F => self.low = value,
            _ => {}
        }
        self.writes += 1;
    }
}

/// Keyboard controller that replays a fixed list of scancodes.
///
/// Reports no pending byte once the script is exhausted, so a read past the
/// end spins forever just like idle hardware.
#[derive(Debug)]
pub struct ScriptedKeyboard<'a> {
    script: &'a [u8],
    next: usize,
}

impl<'a> ScriptedKeyboard<'a> {
    /// Creates a keyboard that will deliver `script` in order.
    pub fn new(script: &'a [u8]) -> Self {
        Self { script, next: 0 }
    }

    /// Scancodes not yet read.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }
}

impl KeyboardController for ScriptedKeyboard<'_> {
    fn read_status(&mut self) -> u8 {
        if self.next < self.script.len() {
            KeyboardStatus::OUTPUT_FULL.bits()
        } else {
            0
        }
    }

    fn read_data(&mut self) -> u8 {
        match self.script.get(self.next) {
            Some(&code) => {
                self.next += 1;
                code
            }
            None => 0,
        }
    }
}

/// Writes press and release scancodes typing `text` into `out`.
///
/// `\n` becomes Enter. Characters without a key are skipped. Returns the
/// number of scancodes written; stops early if `out` is full.
pub fn type_scancodes(text: &str, out: &mut [u8]) -> usize {
    let mut len = 0;
    for byte in text.bytes() {
        let code = match byte {
            b'\n' => Some(scancode::ENTER),
            byte => scancode::scancode_for(byte),
        };
        let Some(code) = code else { continue };
        if len + 2 > out.len() {
            break;
        }
        out[len] = code;
        out[len + 1] = code | 0x80;
        len += 2;
    }
    len
}
