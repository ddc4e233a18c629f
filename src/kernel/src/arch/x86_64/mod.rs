//! x86_64 architecture support.
//!
//! Provides the VGA text buffer, CRTC cursor registers, PS/2 keyboard
//! controller and serial port for x86_64 platforms.

pub mod keyboard;
pub mod serial;
pub mod vga;

pub use keyboard::Ps2Keyboard;
pub use serial::SERIAL;
pub use vga::{VgaBuffer, VgaCrtc};

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
