/// Errors returned by the disjoint-set structure and the board parser
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid union-find size {size}: must be non-negative")]
    InvalidArgument { size: i64 },

    #[error("index {index} out of bounds for union-find of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("unknown symbol '{symbol}' at row {row}, column {col} (expected 'O' or 'X')")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
