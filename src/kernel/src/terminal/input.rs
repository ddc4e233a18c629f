//! Polled keyboard input.

use super::scancode::{self, KeyEvent};
use bitflags::bitflags;
use daos_hal::KeyboardController;

bitflags! {
    /// PS/2 controller status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyboardStatus: u8 {
        /// A byte is waiting in the data register.
        const OUTPUT_FULL = 1 << 0;
        /// The controller has not yet consumed the last command byte.
        const INPUT_FULL  = 1 << 1;
        /// Set by firmware after a successful self test.
        const SYSTEM      = 1 << 2;
        /// Last write was a command rather than data.
        const COMMAND     = 1 << 3;
        /// Timeout talking to the device.
        const TIMEOUT     = 1 << 6;
        /// Parity error on the last byte.
        const PARITY      = 1 << 7;
    }
}

/// Spins on the status register until a scancode is available, then reads it.
///
/// This is the console's only suspension point and it has no timeout.
pub fn poll_scancode<K: KeyboardController + ?Sized>(keyboard: &mut K) -> u8 {
    loop {
        let status = KeyboardStatus::from_bits_truncate(keyboard.read_status());
        if status.contains(KeyboardStatus::OUTPUT_FULL) {
            return keyboard.read_data();
        }
        core::hint::spin_loop();
    }
}

/// Waits for the next scancode and translates it.
pub fn read_key<K: KeyboardController + ?Sized>(keyboard: &mut K) -> KeyEvent {
    scancode::translate(poll_scancode(keyboard))
}
