//! DA-OS Kernel Entry Point
//!
//! The bootloader hands control to `kernel_main`, which passes it on to the
//! console for good.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use daos_kernel::arch::x86_64;
use daos_kernel::serial_println;

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    daos_kernel::terminal::console_main()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    // SAFETY: The console loop is gone; nothing else writes the screen.
    unsafe {
        x86_64::vga::paint_panic_notice("!!! KERNEL PANIC !!! See serial log");
    }

    x86_64::halt_loop()
}
