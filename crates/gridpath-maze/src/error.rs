use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs two distinct cells for start and end.
    #[error("a {rows}x{cols} grid is too small for distinct start and end cells")]
    GridTooSmall { rows: i32, cols: i32 },

    #[error("unknown maze skew \u{201c}{0}\u{201d}; expected balanced, vertical or horizontal")]
    UnknownSkew(String),

    #[error("unknown maze kind \u{201c}{0}\u{201d}; expected random or division")]
    UnknownKind(String),
}
