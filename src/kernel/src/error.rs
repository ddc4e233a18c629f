//! Kernel error types.

use core::fmt;

/// Console geometry error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Zero rows or zero columns
    Empty,
    /// Linear cursor positions would not fit the 16-bit CRTC register pair
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// Status row leaves no scroll region or lies outside the grid
    StatusRowOutOfRange {
        /// Requested status row.
        status_row: usize,
        /// Rows in the grid.
        rows: usize,
    },
    /// Geometry is larger than the backing text buffer
    ExceedsBuffer {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Empty => write!(f, "grid has no cells"),
            GeometryError::TooLarge { rows, cols } => {
                write!(f, "{}x{} grid exceeds the cursor address range", cols, rows)
            }
            GeometryError::StatusRowOutOfRange { status_row, rows } => {
                write!(f, "status row {} invalid for {} rows", status_row, rows)
            }
            GeometryError::ExceedsBuffer { rows, cols } => {
                write!(f, "{}x{} grid exceeds the text buffer", cols, rows)
            }
        }
    }
}
