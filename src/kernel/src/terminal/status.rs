//! Status bar on the reserved bottom row.

use super::display::DisplaySurface;
use daos_hal::{Color, ColorCode, CrtcRegisters, TextBuffer};

/// How a status message is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information - white on blue
    Info,
    /// Command succeeded - black on green
    Success,
    /// Command failed - white on red
    Error,
}

impl Severity {
    /// Attribute used for the whole status row.
    pub const fn color(self) -> ColorCode {
        match self {
            Severity::Info => ColorCode::new(Color::White, Color::Blue),
            Severity::Success => ColorCode::new(Color::Black, Color::Green),
            Severity::Error => ColorCode::new(Color::White, Color::Red),
        }
    }
}

/// Renders centered one-line messages on the status row.
#[derive(Debug, Default)]
pub struct StatusBar {
    severity: Option<Severity>,
}

impl StatusBar {
    /// Creates a status bar that has not shown anything yet.
    pub const fn new() -> Self {
        Self { severity: None }
    }

    /// Replaces the status message.
    ///
    /// Text wider than the row is truncated; it never wraps or scrolls.
    pub fn set<V: TextBuffer, C: CrtcRegisters>(
        &mut self,
        display: &mut DisplaySurface<V, C>,
        text: &str,
        severity: Severity,
    ) {
        let cols = display.geometry().cols();
        let start = (cols - text.len().min(cols)) / 2;
        display.write_status(start, text, severity.color());
        self.severity = Some(severity);
    }

    /// Severity of the message on screen, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }
}
