//! Display surface over a text-mode cell buffer.
//!
//! All cell mutations go through [`DisplaySurface`]. Normal output is
//! confined to the scroll region above the status row; the status row is
//! only painted through [`DisplaySurface::write_status`].

use super::cursor::{CursorController, CursorPosition};
use super::geometry::Geometry;
use crate::error::GeometryError;
use core::fmt;
use daos_hal::{Cell, Color, ColorCode, CrtcRegisters, TextBuffer};

/// Glyph drawn in place of bytes outside printable ASCII.
const PLACEHOLDER: u8 = 0xfe;

/// The character grid plus the cursor that tracks it.
pub struct DisplaySurface<V, C> {
    buffer: V,
    cursor: CursorController<C>,
    geometry: Geometry,
    /// Color code for new characters.
    color: ColorCode,
}

impl<V: TextBuffer, C: CrtcRegisters> DisplaySurface<V, C> {
    /// Creates a surface over `buffer`, driving the hardware cursor via `crtc`.
    ///
    /// Fails if `geometry` does not fit inside `buffer`.
    pub fn new(buffer: V, crtc: C, geometry: Geometry) -> Result<Self, GeometryError> {
        if geometry.rows() > buffer.rows() || geometry.cols() > buffer.cols() {
            return Err(GeometryError::ExceedsBuffer {
                rows: geometry.rows(),
                cols: geometry.cols(),
            });
        }

        Ok(Self {
            buffer,
            cursor: CursorController::new(crtc, geometry.rows(), geometry.cols()),
            geometry,
            color: ColorCode::DEFAULT,
        })
    }

    /// Grid geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The backing cell buffer.
    pub fn buffer(&self) -> &V {
        &self.buffer
    }

    /// The CRTC register pair.
    pub fn crtc(&self) -> &C {
        self.cursor.crtc()
    }

    /// Current logical cursor position.
    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    /// Restores the default white-on-black color.
    pub fn reset_color(&mut self) {
        self.color = ColorCode::DEFAULT;
    }

    /// Moves the status bar to another row.
    ///
    /// Output already below the new status row is not moved; the next write
    /// scrolls back into the region.
    pub fn set_status_row(&mut self, status_row: usize) -> Result<(), GeometryError> {
        self.geometry = self.geometry.with_status_row(status_row)?;
        log::debug!("status row moved to {}", status_row);
        Ok(())
    }

    /// Writes text at the cursor.
    ///
    /// `\n` moves to the start of the next line, a NUL ends the write, and
    /// any other byte outside printable ASCII renders as a placeholder. The
    /// hardware cursor is updated once, after the last character.
    pub fn write_text(&mut self, text: &str) {
        let mut pos = self.cursor.position();

        if pos.row >= self.geometry.status_row() {
            self.scroll_up();
            pos = CursorPosition::new(self.geometry.last_usable_row(), 0);
        }

        for byte in text.bytes() {
            match byte {
                0 => break,
                b'\n' => self.new_line(&mut pos),
                byte => {
                    if pos.col >= self.geometry.cols() {
                        self.new_line(&mut pos);
                    }
                    let glyph = match byte {
                        0x20..=0x7e => byte,
                        _ => PLACEHOLDER,
                    };
                    self.buffer.write_cell(
                        pos.row,
                        pos.col,
                        Cell {
                            glyph,
                            color: self.color,
                        },
                    );
                    pos.col += 1;
                }
            }
        }

        self.cursor.move_to(pos.row, pos.col);
    }

    /// Erases up to `count` cells behind the cursor and moves it back over
    /// them.
    ///
    /// Cells are counted in reading order, so erasing from column 0 continues
    /// at the end of the row above. Stops at the top-left cell. Returns the
    /// number of cells erased.
    pub fn erase_back(&mut self, count: usize) -> usize {
        let cols = self.geometry.cols();
        let pos = self.cursor.position();
        // A deferred wrap leaves `col == cols`, which is the next row's start.
        let end = pos.row * cols + pos.col;
        let erased = count.min(end);
        if erased == 0 {
            return 0;
        }

        let start = end - erased;
        for offset in start..end {
            self.buffer
                .write_cell(offset / cols, offset % cols, Cell::blank(self.color));
        }
        self.cursor.move_to(start / cols, start % cols);
        erased
    }

    /// Blanks the whole grid with the default color and homes the cursor.
    pub fn clear(&mut self) {
        for row in 0..self.geometry.rows() {
            self.fill_row(row, Cell::BLANK);
        }
        self.color = ColorCode::DEFAULT;
        self.cursor.move_to(0, 0);
    }

    /// Repaints the status row: blanks it in `color`, then writes `text`
    /// starting at `start_col`, truncated at the right edge.
    pub fn write_status(&mut self, start_col: usize, text: &str, color: ColorCode) {
        let row = self.geometry.status_row();
        let cols = self.geometry.cols();
        self.fill_row(row, Cell::blank(color));

        for (col, byte) in (start_col..cols).zip(text.bytes()) {
            let glyph = match byte {
                0x20..=0x7e => byte,
                _ => PLACEHOLDER,
            };
            self.buffer.write_cell(row, col, Cell { glyph, color });
        }

        let pos = self.cursor.position();
        self.cursor.move_to(pos.row, pos.col);
    }

    fn new_line(&mut self, pos: &mut CursorPosition) {
        pos.col = 0;
        if pos.row + 1 >= self.geometry.status_row() {
            self.scroll_up();
            pos.row = self.geometry.last_usable_row();
        } else {
            pos.row += 1;
        }
    }

    /// Shifts the scroll region up one row and blanks its last row.
    fn scroll_up(&mut self) {
        let last = self.geometry.last_usable_row();
        for row in 1..=last {
            for col in 0..self.geometry.cols() {
                let cell = self.buffer.read_cell(row, col);
                self.buffer.write_cell(row - 1, col, cell);
            }
        }
        self.fill_row(last, Cell::BLANK);
        log::trace!("scrolled rows 0..{}", self.geometry.status_row());
    }

    fn fill_row(&mut self, row: usize, cell: Cell) {
        debug_assert!(row < self.geometry.rows(), "row index out of bounds");

        for col in 0..self.geometry.cols() {
            self.buffer.write_cell(row, col, cell);
        }
    }
}

impl<V: TextBuffer, C: CrtcRegisters> fmt::Write for DisplaySurface<V, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s);
        Ok(())
    }
}

impl<V: TextBuffer, C: CrtcRegisters> daos_hal::Console for DisplaySurface<V, C> {
    fn write_str(&mut self, s: &str) {
        self.write_text(s);
    }

    fn clear(&mut self) {
        DisplaySurface::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MemoryBuffer, RecordingCrtc, VgaMemory};
    use core::fmt::Write;

    type Surface = DisplaySurface<VgaMemory, RecordingCrtc>;

    fn surface() -> Surface {
        let mut display =
            DisplaySurface::new(VgaMemory::new(), RecordingCrtc::new(), Geometry::VGA).unwrap();
        display.clear();
        display
    }

    fn row_text(display: &Surface, row: usize) -> String {
        display.buffer().row_text(row).collect()
    }

    #[test]
    fn test_write_text_places_glyphs() {
        let mut display = surface();
        display.write_text("hello");
        assert!(display.buffer().row_starts_with(0, "hello"));
        assert_eq!(display.cursor(), CursorPosition::new(0, 5));
        assert_eq!(display.crtc().offset(), 5);
    }

    #[test]
    fn test_newline_moves_to_next_row() {
        let mut display = surface();
        display.write_text("ab\ncd");
        assert!(display.buffer().row_starts_with(0, "ab"));
        assert!(display.buffer().row_starts_with(1, "cd"));
        assert_eq!(display.cursor(), CursorPosition::new(1, 2));
    }

    #[test]
    fn test_nul_terminates_write() {
        let mut display = surface();
        display.write_text("ab\0cd");
        assert!(display.buffer().row_starts_with(0, "ab  "));
        assert_eq!(display.cursor(), CursorPosition::new(0, 2));

        display.write_text("\0");
        assert_eq!(display.cursor(), CursorPosition::new(0, 2));
    }

    #[test]
    fn test_non_ascii_renders_placeholder() {
        let mut display = surface();
        display.write_text("a\tb");
        assert_eq!(display.buffer().read_cell(0, 1).glyph, PLACEHOLDER);
    }

    #[test]
    fn test_cursor_synced_once_per_write() {
        let mut display = surface();
        let before = display.crtc().writes();
        display.write_text("a long line of text");
        assert_eq!(display.crtc().writes() - before, 2);
    }

    #[test]
    fn test_wrap_is_deferred_until_next_glyph() {
        let mut display = surface();
        let full = "x".repeat(80);
        display.write_text(&full);
        assert_eq!(display.cursor(), CursorPosition::new(0, 80));
        display.write_text("y");
        assert_eq!(display.cursor(), CursorPosition::new(1, 1));
        assert!(display.buffer().row_starts_with(1, "y"));
    }

    #[test]
    fn test_scroll_keeps_status_row() {
        let mut display = surface();
        display.write_status(37, "Ready", ColorCode::new(Color::White, Color::Blue));
        let status_before = *display.buffer().row(24);

        for row in 0..24 {
            let line = format!("{:02}", row);
            display.write_text(&line.repeat(40));
        }
        display.write_text("!");

        assert_eq!(*display.buffer().row(24), status_before);
        assert!(display.buffer().row_starts_with(0, "0101"));
        assert!(display.buffer().row_starts_with(22, "2323"));
        assert_eq!(row_text(&display, 23).trim_end(), "!");
        assert_eq!(display.cursor(), CursorPosition::new(23, 1));
    }

    #[test]
    fn test_newline_on_last_row_scrolls() {
        let mut display = surface();
        for _ in 0..23 {
            display.write_text("line\n");
        }
        assert_eq!(display.cursor(), CursorPosition::new(23, 0));
        display.write_text("last\n");
        assert_eq!(display.cursor(), CursorPosition::new(23, 0));
        assert!(display.buffer().row_starts_with(22, "last"));
        assert!(display.buffer().is_row_blank(23));
        assert!(display.buffer().is_row_blank(24));
    }

    #[test]
    fn test_write_below_status_row_scrolls_first() {
        let mut display = surface();
        for row in 0..20 {
            display.write_text(&format!("row{}\n", row));
        }
        assert_eq!(display.cursor().row, 20);

        display.set_status_row(10).unwrap();
        display.write_status(0, "status", ColorCode::DEFAULT);
        display.write_text("next");

        assert_eq!(display.cursor(), CursorPosition::new(9, 4));
        assert!(display.buffer().row_starts_with(9, "next"));
        assert!(display.buffer().row_starts_with(8, "row9"));
        assert!(display.buffer().row_starts_with(10, "status"));
    }

    #[test]
    fn test_set_status_row_validates() {
        let mut display = surface();
        assert!(display.set_status_row(0).is_err());
        assert!(display.set_status_row(25).is_err());
        assert_eq!(display.geometry().status_row(), 24);
    }

    #[test]
    fn test_geometry_must_fit_buffer() {
        let geometry = Geometry::new(30, 80, 29).unwrap();
        let result = DisplaySurface::new(VgaMemory::new(), RecordingCrtc::new(), geometry);
        assert!(matches!(result, Err(GeometryError::ExceedsBuffer { .. })));
    }

    #[test]
    fn test_clear_resets_cells_and_cursor() {
        let garbage = Cell {
            glyph: b'#',
            color: ColorCode::from_raw(0x4e),
        };
        let mut display = DisplaySurface::new(
            MemoryBuffer::<25, 80>::filled(garbage),
            RecordingCrtc::new(),
            Geometry::VGA,
        )
        .unwrap();
        display.set_color(Color::Yellow, Color::Black);
        display.clear();

        for row in 0..25 {
            assert!(display.buffer().is_row_blank(row));
        }
        assert_eq!(display.buffer().read_cell(24, 79), Cell::BLANK);
        assert_eq!(display.cursor(), CursorPosition::new(0, 0));
        assert_eq!(display.crtc().offset(), 0);
    }

    #[test]
    fn test_erase_back_stops_at_origin() {
        let mut display = surface();
        display.write_text("abc");
        assert_eq!(display.erase_back(2), 2);
        assert!(display.buffer().row_starts_with(0, "a  "));
        assert_eq!(display.cursor(), CursorPosition::new(0, 1));
        assert_eq!(display.erase_back(5), 1);
        assert_eq!(display.erase_back(1), 0);
        assert_eq!(display.cursor(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_erase_back_crosses_row_boundary() {
        let mut display = surface();
        display.write_text("top\n");
        display.write_text(&"x".repeat(80));
        display.write_text("yz");
        assert_eq!(display.cursor(), CursorPosition::new(2, 2));

        assert_eq!(display.erase_back(4), 4);
        assert_eq!(display.cursor(), CursorPosition::new(1, 78));
        assert!(display.buffer().is_row_blank(2));
        assert_eq!(display.buffer().read_cell(1, 77).glyph, b'x');
        assert_eq!(display.buffer().read_cell(1, 78).glyph, b' ');
        assert!(display.buffer().row_starts_with(0, "top"));
    }

    #[test]
    fn test_erase_back_after_deferred_wrap() {
        let mut display = surface();
        display.write_text(&"x".repeat(80));
        assert_eq!(display.cursor(), CursorPosition::new(0, 80));

        assert_eq!(display.erase_back(1), 1);
        assert_eq!(display.cursor(), CursorPosition::new(0, 79));
        assert_eq!(display.buffer().read_cell(0, 79).glyph, b' ');
        assert_eq!(display.buffer().read_cell(0, 78).glyph, b'x');
    }

    #[test]
    fn test_status_text_truncated_at_edge() {
        let mut display = surface();
        display.write_status(75, "truncated", ColorCode::DEFAULT);
        assert_eq!(row_text(&display, 24)[75..].to_string(), "trunc");
    }

    #[test]
    fn test_fmt_write() {
        let mut display = surface();
        write!(display, "{}x{}", 80, 25).unwrap();
        assert!(display.buffer().row_starts_with(0, "80x25"));
    }
}
