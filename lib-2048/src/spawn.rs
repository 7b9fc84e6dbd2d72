use core_2048::{Board, Position, SpawnTile, Tile};

use crate::rng::TileRng;

pub const DEFAULT_CHANCE_FOUR: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnResult {
    pub board: Board,
    /// `None` when the board had no empty cell.
    pub position: Option<Position>,
    pub value: Option<Tile>,
}

impl SpawnResult {
    pub fn spawned(&self) -> bool {
        self.position.is_some()
    }
}

/// Places a 2, or a 4 with probability `chance_four`, into an empty cell chosen uniformly.
///
/// The cell is drawn before the value. A full board comes back unchanged.
pub fn spawn_tile<R>(board: &Board, chance_four: f64, rng: &mut R) -> SpawnResult
where
    R: TileRng + ?Sized,
{
    let slot_count = board.count_empty();

    if slot_count == 0 {
        return unchanged(board);
    }

    let slot_idx = rng.next_index(slot_count);

    let tile = if rng.next_unit() < chance_four {
        SpawnTile::Four
    } else {
        SpawnTile::Two
    };

    match board.with_nth_empty(slot_idx, tile) {
        Some((board, position)) => SpawnResult {
            board,
            position: Some(position),
            value: Some(tile.value()),
        },
        None => unchanged(board),
    }
}

fn unchanged(board: &Board) -> SpawnResult {
    SpawnResult {
        board: board.clone(),
        position: None,
        value: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn picks_the_scripted_cell_and_value() {
        let board = Board::from_rows(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();

        // 15 empty cells: 0.5 selects the eighth, 0.05 < 0.1 makes it a four.
        let mut rng = ScriptedRng::new([0.5, 0.05]);
        let result = spawn_tile(&board, DEFAULT_CHANCE_FOUR, &mut rng);

        assert_eq!(result.position, Some(Position::new(2, 0)));
        assert_eq!(result.value, Some(4));
        assert_eq!(result.board.get(Position::new(2, 0)), Some(4));
        assert_eq!(result.board.count_empty(), 14);
    }

    #[test]
    fn spawns_a_two_above_the_threshold() {
        let board = Board::default();

        let mut rng = ScriptedRng::new([0.0, 0.1]);
        let result = spawn_tile(&board, DEFAULT_CHANCE_FOUR, &mut rng);

        assert_eq!(result.position, Some(Position::new(0, 0)));
        assert_eq!(result.value, Some(2));
    }

    #[test]
    fn full_board_is_left_alone() {
        let board =
            Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();

        let mut rng = ScriptedRng::new([0.3]);
        let result = spawn_tile(&board, DEFAULT_CHANCE_FOUR, &mut rng);

        assert!(!result.spawned());
        assert_eq!(result.value, None);
        assert_eq!(result.board, board);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn certain_four_and_never_four() {
        let board = Board::default();

        let always = spawn_tile(&board, 1.0, &mut ScriptedRng::new([0.99]));
        assert_eq!(always.value, Some(4));

        let never = spawn_tile(&board, 0.0, &mut ScriptedRng::new([0.0]));
        assert_eq!(never.value, Some(2));
    }
}
