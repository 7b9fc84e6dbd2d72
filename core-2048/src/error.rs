use crate::board::Tile;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardDefect),
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),
}

/// The reason a board was rejected by [`Board::from_rows`](crate::Board::from_rows).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardDefect {
    #[error("board size {0} is below the minimum of 2")]
    TooSmall(usize),
    #[error("board size {0} is above the maximum of 64")]
    TooLarge(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two in 2..=2^62")]
    InvalidTile { row: usize, col: usize, value: Tile },
}
