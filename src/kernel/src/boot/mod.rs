//! Boot logging with status indicators.
//!
//! Boot stages are reported Linux-style (`[ OK ] message`) on the serial
//! log, keeping the screen free for the console.

pub mod banner;

/// Boot status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Success - `[ OK ]`
    Ok,
    /// Failure - `[FAIL]`
    Fail,
    /// Warning - `[WARN]`
    Warn,
    /// Informational - `[INFO]`
    Info,
}

impl Status {
    /// The bracketed tag printed before the message.
    pub const fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[ OK ]",
            Status::Fail => "[FAIL]",
            Status::Warn => "[WARN]",
            Status::Info => "[INFO]",
        }
    }

    /// Log level the stage is reported at.
    pub const fn level(self) -> log::Level {
        match self {
            Status::Ok | Status::Info => log::Level::Info,
            Status::Warn => log::Level::Warn,
            Status::Fail => log::Level::Error,
        }
    }
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    log::log!(target: "boot", status.level(), "{} {}", status.tag(), message);
}
