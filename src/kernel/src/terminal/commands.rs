//! Built-in shell commands.
//!
//! Provides `info`, `clear` and `help`, and the dispatcher that matches a
//! finished line against them.

use super::display::DisplaySurface;
use super::geometry::{COLS, ROWS};
use super::history::HISTORY_CAPACITY;
use super::status::{Severity, StatusBar};
use daos_hal::{Color, Console, CrtcRegisters, TextBuffer};

/// A command handler. Handlers only produce console output.
pub type Handler = fn(&mut dyn Console);

/// A built-in command.
pub struct Command {
    /// Exact, case-sensitive name typed by the user.
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub description: &'static str,
    /// Status bar text after the command ran.
    pub status: &'static str,
    handler: Handler,
}

/// All built-in commands, in `help` order.
pub static COMMANDS: [Command; 3] = [
    Command {
        name: "info",
        description: "Show system information",
        status: "System information",
        handler: cmd_info,
    },
    Command {
        name: "clear",
        description: "Clear the screen",
        status: "Screen cleared",
        handler: cmd_clear,
    },
    Command {
        name: "help",
        description: "Show this help message",
        status: "Help displayed",
        handler: cmd_help,
    },
];

impl Command {
    /// Looks up a command by exact name.
    pub fn find(name: &str) -> Option<&'static Command> {
        COMMANDS.iter().find(|command| command.name == name)
    }

    /// Runs the command's handler.
    pub fn execute(&self, out: &mut dyn Console) {
        (self.handler)(out)
    }
}

/// Result of dispatching one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A built-in command ran.
    Executed(&'static str),
    /// No command has this name.
    Unknown,
}

/// Runs the command named by `line` and reports the result on the status bar.
///
/// Anything that is not an exact command name, the empty line included,
/// prints a message and sets an error status; it is never fatal.
pub fn dispatch<V: TextBuffer, C: CrtcRegisters>(
    line: &str,
    display: &mut DisplaySurface<V, C>,
    status: &mut StatusBar,
) -> Outcome {
    match Command::find(line) {
        Some(command) => {
            log::info!("running `{}`", command.name);
            command.execute(display);
            status.set(display, command.status, Severity::Success);
            Outcome::Executed(command.name)
        }
        None => {
            log::warn!("unknown command `{}`", line);
            display.set_color(Color::LightRed, Color::Black);
            display.write_text("Unknown command: ");
            display.write_text(line);
            display.write_text("\n");
            display.reset_color();
            display.write_text("Type 'help' for available commands.\n");
            status.set(display, "Unknown command", Severity::Error);
            Outcome::Unknown
        }
    }
}

/// Show system information.
fn cmd_info(out: &mut dyn Console) {
    out.write_str("\nDA-OS System Information\n");
    out.write_str("========================\n");
    writeln!(out, "  Version:    {}", crate::VERSION);
    out.write_str("  Arch:       x86_64\n");
    writeln!(out, "  Display:    {}x{} VGA text mode", COLS, ROWS);
    writeln!(out, "  History:    {} entries", HISTORY_CAPACITY);
    out.write_str("\n");
}

/// Clear the screen.
fn cmd_clear(out: &mut dyn Console) {
    out.clear();
}

/// Display help information.
fn cmd_help(out: &mut dyn Console) {
    out.write_str("\nDA-OS Shell Commands\n");
    out.write_str("====================\n");
    for command in COMMANDS.iter() {
        writeln!(out, "  {:<8}{}", command.name, command.description);
    }
    out.write_str("\n");
}
