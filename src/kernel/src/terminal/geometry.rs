//! Console grid geometry.

use crate::error::GeometryError;

/// Number of rows in VGA text mode.
pub const ROWS: usize = 25;

/// Number of columns in VGA text mode.
pub const COLS: usize = 80;

/// Row reserved for the status bar.
pub const STATUS_ROW: usize = ROWS - 1;

/// Dimensions of the character grid and the position of the status row.
///
/// Rows `[0, status_row)` form the scroll region; rows at or below the
/// status row are never touched by normal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    rows: usize,
    cols: usize,
    status_row: usize,
}

impl Geometry {
    /// Standard 80x25 text mode with the status bar on the bottom row.
    pub const VGA: Geometry = Geometry {
        rows: ROWS,
        cols: COLS,
        status_row: STATUS_ROW,
    };

    /// Validates and creates a geometry.
    pub fn new(rows: usize, cols: usize, status_row: usize) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::Empty);
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= usize::from(u16::MAX) + 1 => {}
            _ => return Err(GeometryError::TooLarge { rows, cols }),
        }
        if status_row == 0 || status_row >= rows {
            return Err(GeometryError::StatusRowOutOfRange { status_row, rows });
        }
        Ok(Self {
            rows,
            cols,
            status_row,
        })
    }

    /// Returns the same grid with the status bar moved to `status_row`.
    pub fn with_status_row(self, status_row: usize) -> Result<Self, GeometryError> {
        Self::new(self.rows, self.cols, status_row)
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the status row.
    pub const fn status_row(&self) -> usize {
        self.status_row
    }

    /// Last row normal output may write to.
    pub const fn last_usable_row(&self) -> usize {
        self.status_row - 1
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::VGA
    }
}
