//! Pure 2048 board engine: boards, line merging, the four directional moves and the terminal
//! predicates. Nothing in this crate allocates randomness or keeps state between calls.

pub mod board;
pub mod direction;
pub mod error;
pub mod line;
pub mod logic;

pub use board::{
    Board, Position, Score, SpawnTile, Tile, DEFAULT_SIZE, EMPTY, MAX_SIZE, MAX_TILE, MIN_SIZE,
};
pub use direction::Direction;
pub use error::{BoardDefect, Error, Result};
pub use line::{compress_and_merge_line, LineMerge};
pub use logic::{
    can_move, has_reached_target, max_tile, move_down, move_left, move_right, move_up, shift,
    try_all_moves, try_move, Merge, MoveResult, DEFAULT_TARGET,
};

/// Reverses every row.
pub fn mirror_board(board: &Board) -> Board {
    let last = board.size() - 1;

    board.remap(|row, col| (row, last - col))
}

/// Swaps rows and columns.
pub fn transpose_board(board: &Board) -> Board {
    board.remap(|row, col| (col, row))
}

/// Rotates a quarter turn clockwise: the left column becomes the top row.
pub fn rotate_board_cw(board: &Board) -> Board {
    let last = board.size() - 1;

    board.remap(|row, col| (last - col, row))
}

/// Rotates a quarter turn counter-clockwise: the top row becomes the left column.
pub fn rotate_board_ccw(board: &Board) -> Board {
    let last = board.size() - 1;

    board.remap(|row, col| (col, last - row))
}
