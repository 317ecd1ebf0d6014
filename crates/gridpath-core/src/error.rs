use thiserror::Error;

use crate::geom::Pos;

/// Convenient result alias for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building a [`Grid`](crate::Grid).
///
/// Cell mutations never fail: out-of-range or protected targets are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Either dimension was below one.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    /// The cell count exceeded [`MAX_CELLS`](crate::grid::MAX_CELLS).
    #[error("a {rows}x{cols} grid exceeds the {max} cell limit")]
    TooLarge { rows: i32, cols: i32, max: usize },

    /// A text layout contained no rows.
    #[error("grid layout is empty")]
    EmptyLayout,

    /// A text layout row differed in width from the first row.
    #[error("grid layout row {row} has width {width}, expected {expected}")]
    InconsistentWidth { row: i32, width: i32, expected: i32 },

    /// A text layout contained a character outside the layout alphabet.
    #[error("grid layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Pos },

    /// A text layout marked more than one start or end cell.
    #[error("grid layout has more than one {role} cell (another at {pos})")]
    DuplicateRole { role: &'static str, pos: Pos },
}
