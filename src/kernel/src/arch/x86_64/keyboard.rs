//! PS/2 keyboard controller ports.

use daos_hal::KeyboardController;
use x86_64::instructions::port::Port;

/// PS/2 controller data port.
const DATA_PORT: u16 = 0x60;

/// PS/2 controller status port.
const STATUS_PORT: u16 = 0x64;

/// Owned handle to the PS/2 controller.
pub struct Ps2Keyboard {
    status: Port<u8>,
    data: Port<u8>,
}

impl Ps2Keyboard {
    /// Creates a handle to the PS/2 controller.
    ///
    /// # Safety
    ///
    /// The caller must be the only user of ports 0x60/0x64, and no interrupt
    /// handler may consume keyboard bytes.
    pub unsafe fn new() -> Self {
        Ps2Keyboard {
            status: Port::new(STATUS_PORT),
            data: Port::new(DATA_PORT),
        }
    }
}

impl KeyboardController for Ps2Keyboard {
    fn read_status(&mut self) -> u8 {
        // SAFETY: Reading the status port has no side effects.
        unsafe { self.status.read() }
    }

    fn read_data(&mut self) -> u8 {
        // SAFETY: The handle owns the controller; reading pops one byte.
        unsafe { self.data.read() }
    }
}
