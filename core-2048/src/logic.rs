use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Position, Score, Tile, EMPTY},
    direction::Direction,
    line::{can_merge, compress_and_merge_line, LineMerge},
};

pub const DEFAULT_TARGET: Tile = 2048;

const MOVE_FUNCTIONS: [fn(&Board) -> MoveResult; 4] = [move_up, move_down, move_right, move_left];

/// A tile produced by a merge, in the coordinates of the board it was merged on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Merge {
    pub position: Position,
    pub value: Tile,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub moved: bool,
    pub score_gained: Score,
    pub merged_positions: Vec<Merge>,
}

impl MoveResult {
    fn diffed(original: &Board, board: Board, score_gained: Score, merges: Vec<Merge>) -> Self {
        let moved = board != *original;

        Self {
            board,
            moved,
            score_gained,
            merged_positions: merges,
        }
    }
}

pub fn move_left(board: &Board) -> MoveResult {
    let size = board.size();

    let mut cells = Vec::with_capacity(size * size);
    let mut merges = Vec::new();
    let mut score_gained = 0;

    for (row, line) in board.rows().enumerate() {
        let LineMerge {
            line,
            score,
            merges: line_merges,
        } = compress_and_merge_line(line);

        cells.extend(line);
        score_gained = Score::saturating_add(score_gained, score);
        merges.extend(line_merges.into_iter().map(|(col, value)| Merge {
            position: Position::new(row, col),
            value,
        }));
    }

    MoveResult::diffed(board, Board::from_cells(size, cells), score_gained, merges)
}

pub fn move_right(board: &Board) -> MoveResult {
    compose(board, crate::mirror_board, crate::mirror_board, |last, p| {
        Position::new(p.row, last - p.col)
    })
}

pub fn move_up(board: &Board) -> MoveResult {
    compose(board, crate::rotate_board_ccw, crate::rotate_board_cw, |last, p| {
        Position::new(p.col, last - p.row)
    })
}

pub fn move_down(board: &Board) -> MoveResult {
    compose(board, crate::rotate_board_cw, crate::rotate_board_ccw, |last, p| {
        Position::new(last - p.col, p.row)
    })
}

/// Runs `move_left` on `pre(board)`, undoes the transform with `post`, and maps merge
/// positions back with `unmap`, which receives `size - 1` and a position on the transformed
/// board. `moved` is recomputed against `board` itself.
fn compose(
    board: &Board,
    pre: fn(&Board) -> Board,
    post: fn(&Board) -> Board,
    unmap: impl Fn(usize, Position) -> Position,
) -> MoveResult {
    let last = board.size() - 1;

    let shifted = move_left(&pre(board));

    let merges = shifted
        .merged_positions
        .into_iter()
        .map(|merge| Merge {
            position: unmap(last, merge.position),
            value: merge.value,
        })
        .collect();

    MoveResult::diffed(board, post(&shifted.board), shifted.score_gained, merges)
}

pub fn shift(board: &Board, direction: Direction) -> MoveResult {
    MOVE_FUNCTIONS[direction as usize](board)
}

/// Results for every direction, indexed by `Direction as usize`.
pub fn try_all_moves(board: &Board) -> [MoveResult; 4] {
    MOVE_FUNCTIONS.map(|move_fn| move_fn(board))
}

/// `Some` only when the move changes the board.
pub fn try_move(board: &Board, direction: Direction) -> Option<MoveResult> {
    Some(shift(board, direction)).filter(|result| result.moved)
}

pub fn can_move(board: &Board) -> bool {
    if !board.is_full() {
        return true;
    }

    let horizontal = board
        .rows()
        .any(|row| row.windows(2).any(|pair| can_merge(pair[0], pair[1])));

    let size = board.size();
    let cells = board.cells();

    let vertical = cells
        .iter()
        .zip(&cells[size..])
        .any(|(&above, &below)| can_merge(above, below));

    horizontal || vertical
}

pub fn max_tile(board: &Board) -> Tile {
    board.cells().iter().copied().max().unwrap_or(EMPTY)
}

pub fn has_reached_target(board: &Board, target: Tile) -> bool {
    board.cells().iter().any(|&tile| tile >= target)
}
