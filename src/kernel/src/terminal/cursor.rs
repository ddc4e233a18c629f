//! Hardware cursor control.
//!
//! The logical cursor is a (row, column) pair. The CRTC only understands a
//! 16-bit linear cell offset, split across two registers.

use daos_hal::CrtcRegisters;

/// CRTC register holding the high byte of the cursor location.
const CURSOR_LOCATION_HIGH: u8 = 0x0E;

/// CRTC register holding the low byte of the cursor location.
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// Logical cursor position, 0-indexed.
///
/// `col` may equal the column count for the short time between writing the
/// last cell of a row and wrapping to the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl CursorPosition {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Owns the logical cursor and keeps the hardware cursor in sync with it.
pub struct CursorController<C> {
    crtc: C,
    rows: usize,
    cols: usize,
    position: CursorPosition,
}

impl<C: CrtcRegisters> CursorController<C> {
    /// Creates a controller for a `rows` x `cols` grid, cursor at the origin.
    pub fn new(crtc: C, rows: usize, cols: usize) -> Self {
        Self {
            crtc,
            rows,
            cols,
            position: CursorPosition::default(),
        }
    }

    /// Moves the cursor. Idempotent.
    ///
    /// The physical cursor is clamped to the grid, so a pending wrap shows
    /// the cursor on the last cell of the row.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.position = CursorPosition::new(row, col);

        let row = row.min(self.rows.saturating_sub(1));
        let col = col.min(self.cols.saturating_sub(1));
        let offset = row * self.cols + col;
        // Geometry validation keeps every offset within 16 bits.
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        let [low, high] = offset.to_le_bytes();

        self.crtc.write_register(CURSOR_LOCATION_LOW, low);
        self.crtc.write_register(CURSOR_LOCATION_HIGH, high);
    }

    /// Current logical position.
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// The CRTC register pair.
    pub fn crtc(&self) -> &C {
        &self.crtc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingCrtc;

    #[test]
    fn test_move_to_writes_linear_offset() {
        let mut cursor = CursorController::new(RecordingCrtc::new(), 25, 80);
        cursor.move_to(3, 7);
        assert_eq!(cursor.position(), CursorPosition::new(3, 7));
        assert_eq!(cursor.crtc().offset(), 3 * 80 + 7);
        assert_eq!(cursor.crtc().writes(), 2);
    }

    #[test]
    fn test_move_to_high_byte() {
        let mut cursor = CursorController::new(RecordingCrtc::new(), 25, 80);
        cursor.move_to(23, 79);
        assert_eq!(cursor.crtc().offset(), 23 * 80 + 79);
    }

    #[test]
    fn test_move_to_is_idempotent() {
        let mut cursor = CursorController::new(RecordingCrtc::new(), 25, 80);
        cursor.move_to(10, 10);
        cursor.move_to(10, 10);
        assert_eq!(cursor.position(), CursorPosition::new(10, 10));
        assert_eq!(cursor.crtc().offset(), 810);
    }

    #[test]
    fn test_pending_wrap_is_clamped() {
        let mut cursor = CursorController::new(RecordingCrtc::new(), 25, 80);
        cursor.move_to(5, 80);
        assert_eq!(cursor.position().col, 80);
        assert_eq!(cursor.crtc().offset(), 5 * 80 + 79);
    }
}
