//! Terminal subsystem for DA-OS.
//!
//! Provides the interactive console: display surface, line editing with
//! history, and built-in command dispatch.
//!
//! # Architecture
//!
//! - `scancode`: Raw scancode to [`KeyEvent`] translation
//! - `input`: Keyboard status polling
//! - `cursor`: Hardware cursor synchronization
//! - `display`: Character grid with scroll region and status row
//! - `line` / `history`: Command buffer and recall ring
//! - `shell`: Line editor state machine
//! - `status`: Status bar
//! - `commands`: Built-in commands and dispatch

pub mod commands;
pub mod cursor;
pub mod display;
pub mod geometry;
pub mod history;
pub mod input;
pub mod line;
pub mod scancode;
pub mod shell;
pub mod status;

pub use commands::{dispatch, Command, Outcome};
pub use display::DisplaySurface;
pub use geometry::Geometry;
pub use history::{History, HistoryBuffer};
pub use line::CommandBuffer;
pub use scancode::{translate, KeyEvent};
pub use shell::{EditState, LineEditor};
pub use status::{Severity, StatusBar};

use crate::boot;
use crate::error::GeometryError;
use daos_hal::{Color, CrtcRegisters, KeyboardController, TextBuffer};

/// The interactive console.
///
/// Owns the video buffer, cursor registers and keyboard controller for the
/// lifetime of the kernel.
pub struct Console<V, C, K> {
    display: DisplaySurface<V, C>,
    status: StatusBar,
    history: History,
    editor: LineEditor,
    keyboard: K,
}

impl<V, C, K> Console<V, C, K>
where
    V: TextBuffer,
    C: CrtcRegisters,
    K: KeyboardController,
{
    /// Creates a console over the given devices.
    pub fn new(buffer: V, crtc: C, keyboard: K, geometry: Geometry) -> Result<Self, GeometryError> {
        Ok(Self {
            display: DisplaySurface::new(buffer, crtc, geometry)?,
            status: StatusBar::new(),
            history: History::new(),
            editor: LineEditor::new(),
            keyboard,
        })
    }

    /// Clears the screen, prints the banner and shows "Ready".
    pub fn start(&mut self) {
        self.display.clear();
        boot::banner::print_banner(&mut self.display);
        self.status.set(&mut self.display, "Ready", Severity::Info);
    }

    /// Display the shell prompt.
    pub fn prompt(&mut self) {
        self.display.set_color(Color::LightGreen, Color::Black);
        self.display.write_text("da-os");
        self.display.reset_color();
        self.display.write_text("> ");
    }

    /// Reads keys until Enter and returns the finished line.
    ///
    /// Blocks for as long as no key is pressed.
    pub fn read_line(&mut self) -> CommandBuffer {
        self.editor.begin();
        loop {
            let key = input::read_key(&mut self.keyboard);
            if let Some(line) = self
                .editor
                .handle_key(key, &mut self.display, &mut self.history)
            {
                return line;
            }
        }
    }

    /// One prompt, read, dispatch cycle.
    pub fn step(&mut self) -> Outcome {
        self.prompt();
        let line = self.read_line();
        dispatch(line.as_str(), &mut self.display, &mut self.status)
    }

    /// Runs the command loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// The display surface.
    pub fn display(&self) -> &DisplaySurface<V, C> {
        &self.display
    }

    /// The status bar.
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Command history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The keyboard controller.
    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }
}

/// Console entry point.
///
/// Called exactly once by the boot code. Takes ownership of the VGA buffer,
/// CRTC and PS/2 controller and never returns.
#[cfg(target_arch = "x86_64")]
pub fn console_main() -> ! {
    use crate::arch::x86_64::{keyboard::Ps2Keyboard, vga::{VgaBuffer, VgaCrtc}};
    use boot::Status;

    crate::init();
    boot::log(Status::Ok, "Serial log attached");

    // SAFETY: This is the only place the console devices are created, and it
    // runs once. Nothing else in the kernel touches the VGA buffer, the CRTC
    // ports or the PS/2 controller afterwards.
    let (buffer, crtc, keyboard) = unsafe { (VgaBuffer::new(), VgaCrtc::new(), Ps2Keyboard::new()) };
    boot::log(Status::Ok, "VGA text buffer mapped");

    let mut console = match Console::new(buffer, crtc, keyboard, Geometry::VGA) {
        Ok(console) => console,
        Err(e) => {
            boot::log(Status::Fail, "Console initialization failed");
            panic!("console geometry: {}", e);
        }
    };
    console.start();
    log::info!(
        target: "boot",
        "[ OK ] Console ready ({}x{}, status row {})",
        Geometry::VGA.cols(),
        Geometry::VGA.rows(),
        Geometry::VGA.status_row()
    );

    console.run()
}
