//! DA-OS Kernel
//!
//! The interactive text-mode console of a minimal bare-metal x86_64
//! environment.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA, CRTC cursor, PS/2 keyboard, serial)
//! - `boot`: Boot banner and boot-stage logging
//! - `terminal`: Display surface, line editor, history and command dispatch
//! - `testutil`: In-memory devices for host-side tests
//!
//! # Safety
//!
//! The library is `no_std` outside of tests. All unsafe code is documented
//! with safety invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod error;
pub mod terminal;
pub mod testutil;

/// Kernel version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes core kernel services.
///
/// Called once before the console takes over. Sets up the serial port and
/// routes the `log` facade to it.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        arch::x86_64::serial::init_logger();
    }
}
