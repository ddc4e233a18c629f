//! PS/2 scancode set 1 translation.
//!
//! Maps one raw scancode to a [`KeyEvent`]. Key releases, modifiers and keys
//! without a printable mapping all translate to [`KeyEvent::Ignored`].

/// Bit set on the scancode of a key release.
const RELEASE_BIT: u8 = 0x80;

/// Scancode of the Enter key.
pub const ENTER: u8 = 0x1C;

/// Scancode of the Backspace key.
pub const BACKSPACE: u8 = 0x0E;

/// Scancode of the Up arrow (keypad 8 without the 0xE0 prefix).
pub const ARROW_UP: u8 = 0x48;

/// Scancode of the Down arrow (keypad 2 without the 0xE0 prefix).
pub const ARROW_DOWN: u8 = 0x50;

/// A logical key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable ASCII character.
    Printable(char),
    /// Finish the current line.
    Enter,
    /// Delete the character before the cursor.
    Backspace,
    /// Recall an older history entry.
    HistoryPrev,
    /// Recall a newer history entry.
    HistoryNext,
    /// Nothing to act on.
    Ignored,
}

/// US layout, unshifted. Index is the scancode, value is ASCII or 0.
static SCANCODE_TABLE: [u8; 128] = build_table();

const fn build_table() -> [u8; 128] {
    let runs: [(usize, &[u8]); 7] = [
        (0x01, b"\x1b1234567890-=\x08\t"),
        (0x10, b"qwertyuiop[]\n"),
        (0x1E, b"asdfghjkl;'`"),
        (0x2B, b"\\zxcvbnm,./"),
        (0x37, b"*"),
        (0x39, b" "),
        (0x47, b"789-456+1230."),
    ];

    let mut table = [0u8; 128];
    let mut i = 0;
    while i < runs.len() {
        let (start, keys) = runs[i];
        let mut j = 0;
        while j < keys.len() {
            table[start + j] = keys[j];
            j += 1;
        }
        i += 1;
    }
    table
}

/// Translates a raw scancode into a key event.
pub fn translate(scancode: u8) -> KeyEvent {
    if scancode & RELEASE_BIT != 0 {
        return KeyEvent::Ignored;
    }

    match scancode {
        ENTER => return KeyEvent::Enter,
        BACKSPACE => return KeyEvent::Backspace,
        #[cfg(feature = "history")]
        ARROW_UP => return KeyEvent::HistoryPrev,
        #[cfg(feature = "history")]
        ARROW_DOWN => return KeyEvent::HistoryNext,
        _ => {}
    }

    match SCANCODE_TABLE[usize::from(scancode)] {
        ascii @ 0x20..=0x7e => KeyEvent::Printable(char::from(ascii)),
        _ => KeyEvent::Ignored,
    }
}

/// Returns the make code that produces `ascii`, if any.
pub fn scancode_for(ascii: u8) -> Option<u8> {
    if ascii == 0 {
        return None;
    }
    SCANCODE_TABLE
        .iter()
        .position(|&entry| entry == ascii)
        .and_then(|index| u8::try_from(index).ok())
}
