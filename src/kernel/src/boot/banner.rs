//! Boot banner and branding.

use crate::terminal::DisplaySurface;
use daos_hal::{Color, CrtcRegisters, TextBuffer};

const LOGO: [&str; 5] = [
    r"  ____    _        ___  ____  ",
    r" |  _ \  / \      / _ \/ ___| ",
    r" | | | |/ _ \ ___| | | \___ \ ",
    r" | |_| / ___ \___| |_| |___) |",
    r" |____/_/   \_\   \___/|____/ ",
];

/// Welcome line printed under the logo.
pub const WELCOME: &str = "DA-Os By Sanira Deneth v0.1";

/// Print the DA-OS welcome banner at the cursor.
pub fn print_banner<V: TextBuffer, C: CrtcRegisters>(display: &mut DisplaySurface<V, C>) {
    display.set_color(Color::Cyan, Color::Black);
    for line in LOGO {
        display.write_text(line);
        display.write_text("\n");
    }
    display.write_text("\n");
    display.reset_color();
    display.write_text(" ");
    display.write_text(WELCOME);
    display.write_text("\n");
    display.set_color(Color::Cyan, Color::Black);
    display.write_text(" Type 'help' for available commands.\n");
    display.reset_color();
    display.write_text("\n");
}
