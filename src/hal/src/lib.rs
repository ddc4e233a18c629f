//! DA-OS Hardware Abstraction Layer (HAL).
//!
//! This crate defines the device seams of the text-mode console: the video
//! cell buffer, the CRTC cursor registers and the PS/2 keyboard controller.
//! Platform code implements these traits over real hardware; tests implement
//! them over plain memory.

#![no_std]

use core::fmt;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Combined foreground and background color, as stored in the attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// White on black, the attribute of unstyled text.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::White, Color::Black);

    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Wraps a raw attribute byte.
    pub const fn from_raw(attribute: u8) -> ColorCode {
        ColorCode(attribute)
    }

    /// Returns the raw attribute byte.
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// A single character cell: glyph byte followed by attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    /// The code page 437 glyph.
    pub glyph: u8,
    /// Foreground/background attribute.
    pub color: ColorCode,
}

impl Cell {
    /// A space in the default color.
    pub const BLANK: Cell = Cell::blank(ColorCode::DEFAULT);

    /// A space in the given color.
    pub const fn blank(color: ColorCode) -> Cell {
        Cell { glyph: b' ', color }
    }
}

/// A linear grid of character cells.
///
/// Implementations are not required to validate indices; callers keep
/// `row < rows()` and `col < cols()`.
pub trait TextBuffer {
    /// Number of rows in the grid.
    fn rows(&self) -> usize;
    /// Number of columns in the grid.
    fn cols(&self) -> usize;
    /// Reads the cell at `(row, col)`.
    fn read_cell(&self, row: usize, col: usize) -> Cell;
    /// Writes the cell at `(row, col)`.
    fn write_cell(&mut self, row: usize, col: usize, cell: Cell);
}

/// Index/data register pair of the display controller.
pub trait CrtcRegisters {
    /// Selects register `index`, then writes `value` to it.
    fn write_register(&mut self, index: u8, value: u8);
}

/// A keyboard controller exposing a status and a data register.
pub trait KeyboardController {
    /// Reads the status register.
    fn read_status(&mut self) -> u8;
    /// Reads one byte from the data register.
    fn read_data(&mut self) -> u8;
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);

    /// Writes formatted text, so `write!` works on `&mut dyn Console`.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut ConsoleAdapter(self), args);
    }
}

struct ConsoleAdapter<'a, C: ?Sized>(&'a mut C);

impl<C: Console + ?Sized> fmt::Write for ConsoleAdapter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}
