use core_2048::{logic, Board, Direction, MoveResult};

pub mod greedy;
pub mod random;

pub use greedy::GreedyAi;
pub use random::RandomAi;

/// Chooses moves for headless play. `None` means no direction changes the board.
pub trait Ai {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction>;
}

impl<A: Ai + ?Sized> Ai for Box<A> {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        (**self).get_next_move(board)
    }
}

fn get_all_moves(board: &Board) -> impl Iterator<Item = (MoveResult, Direction)> + '_ {
    Direction::iter().filter_map(move |direction| {
        logic::try_move(board, direction).map(|result| (result, direction))
    })
}
