use core_2048::{Board, Direction};

use crate::rng::TileRng;

use super::Ai;

pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: TileRng,
{
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        let mut move_array = [Direction::Up; 4];
        let mut count = 0;

        for (_, direction) in super::get_all_moves(board) {
            move_array[count] = direction;
            count += 1;
        }

        (count > 0).then(|| move_array[self.rng.next_index(count)])
    }
}

impl<R> RandomAi<R>
where
    R: TileRng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
