use std::cmp::Reverse;

use core_2048::{Board, Direction};

use super::Ai;

/// Takes the move with the largest immediate score, preferring the one that leaves the most
/// empty cells, then the earliest in `Direction::ALL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAi;

impl Ai for GreedyAi {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        super::get_all_moves(board)
            .max_by_key(|(result, direction)| {
                (
                    result.score_gained,
                    result.board.count_empty(),
                    Reverse(*direction as usize),
                )
            })
            .map(|(_, direction)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_bigger_merge() {
        let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [8, 0, 0, 0], [8, 0, 0, 0]]).unwrap();

        assert!(matches!(
            GreedyAi.get_next_move(&board),
            Some(Direction::Up | Direction::Down)
        ));
    }

    #[test]
    fn ties_go_to_the_earliest_direction() {
        let board = Board::from_rows(&[[0, 0], [0, 2]]).unwrap();

        assert_eq!(GreedyAi.get_next_move(&board), Some(Direction::Up));
    }

    #[test]
    fn stuck_board_has_no_move() {
        let board = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();

        assert_eq!(GreedyAi.get_next_move(&board), None);
    }
}
