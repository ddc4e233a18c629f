//! VGA text mode driver for x86_64.
//!
//! Provides cell access to the text buffer at 0xB8000 and the CRTC
//! index/data ports that position the hardware cursor.

use core::ptr;
use daos_hal::{Cell, Color, ColorCode, CrtcRegisters, TextBuffer};
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of rows in VGA text mode.
const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
const BUFFER_WIDTH: usize = 80;

/// CRTC index register port.
const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRTC data register port.
const CRTC_DATA_PORT: u16 = 0x3D5;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[Cell; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// Owned handle to the VGA text buffer.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    buffer: *mut Buffer,
}

impl VgaBuffer {
    /// Creates a handle to the VGA text buffer.
    ///
    /// # Safety
    ///
    /// At most one handle may exist at a time; the caller must not create a
    /// second one while this one is alive.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn rows(&self) -> usize {
        BUFFER_HEIGHT
    }

    fn cols(&self) -> usize {
        BUFFER_WIDTH
    }

    fn read_cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        // SAFETY: Indices are bounds-checked above and the buffer pointer is
        // valid for the kernel's lifetime. Volatile because the VGA buffer is
        // memory-mapped I/O.
        unsafe { ptr::read_volatile(ptr::addr_of!((*self.buffer).chars[row][col])) }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        // SAFETY: As in `read_cell`; `&mut self` makes this the only writer.
        unsafe { ptr::write_volatile(ptr::addr_of_mut!((*self.buffer).chars[row][col]), cell) }
    }
}

/// The CRTC index/data port pair.
pub struct VgaCrtc {
    index: Port<u8>,
    data: Port<u8>,
}

impl VgaCrtc {
    /// Creates a handle to the CRTC ports.
    ///
    /// # Safety
    ///
    /// The caller must be the only user of ports 0x3D4/0x3D5.
    pub unsafe fn new() -> Self {
        VgaCrtc {
            index: Port::new(CRTC_INDEX_PORT),
            data: Port::new(CRTC_DATA_PORT),
        }
    }
}

impl CrtcRegisters for VgaCrtc {
    fn write_register(&mut self, index: u8, value: u8) {
        // SAFETY: The handle owns the CRTC ports (see `VgaCrtc::new`). Writing
        // a register index followed by its value is the documented protocol.
        unsafe {
            self.index.write(index);
            self.data.write(value);
        }
    }
}

/// Color of the panic notice.
const PANIC_COLOR: ColorCode = ColorCode::new(Color::LightRed, Color::Black);

/// Paints a panic notice on the bottom row, bypassing the console.
///
/// # Safety
///
/// Only for the panic path, after the console has stopped running.
pub unsafe fn paint_panic_notice(message: &str) {
    paint_notice(&mut VgaBuffer::new(), message);
}

fn paint_notice<B: TextBuffer>(buffer: &mut B, message: &str) {
    let row = buffer.rows() - 1;
    let cols = buffer.cols();
    for col in 0..cols {
        buffer.write_cell(row, col, Cell::blank(PANIC_COLOR));
    }
    for (col, glyph) in message.bytes().take(cols).enumerate() {
        buffer.write_cell(row, col, Cell { glyph, color: PANIC_COLOR });
    }
}
