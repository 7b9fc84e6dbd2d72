use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoardDefect, Error, Result};

pub type Tile = u64;
pub type Score = u64;

pub const EMPTY: Tile = 0;
pub const DEFAULT_SIZE: usize = 4;
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 64;
/// Largest tile a board may hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 62;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The value a freshly spawned tile may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnTile {
    Two,
    Four,
}

impl SpawnTile {
    pub const fn value(self) -> Tile {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

/// Square grid of tiles stored row-major. `0` marks an empty cell, every other cell holds a
/// power of two between 2 and [`MAX_TILE`].
///
/// Boards built through [`Board::new`] and [`Board::from_rows`] are always well formed, so
/// the move functions never have to re-validate them.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;

        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();

        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);

        for (row, line) in rows.iter().map(AsRef::as_ref).enumerate() {
            if line.len() != size {
                return Err(BoardDefect::NotSquare {
                    row,
                    len: line.len(),
                    size,
                }
                .into());
            }

            if let Some((col, &value)) = line
                .iter()
                .enumerate()
                .find(|&(_, &value)| value != EMPTY && !is_valid_tile(value))
            {
                return Err(BoardDefect::InvalidTile { row, col, value }.into());
            }

            cells.extend_from_slice(line);
        }

        Ok(Self { size, cells })
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);

        Self { size, cells }
    }

    /// Builds a board whose cell `(row, col)` is read from `self` at `source(row, col)`.
    pub(crate) fn remap(&self, source: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let size = self.size;

        let cells = (0..size * size)
            .map(|i| {
                let (row, col) = source(i / size, i % size);
                self.cells[row * size + col]
            })
            .collect();

        Self::from_cells(size, cells)
    }

    /// An empty board of the same size.
    pub fn cleared(&self) -> Self {
        Self::from_cells(self.size, vec![EMPTY; self.cells.len()])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, position: Position) -> Option<Tile> {
        (position.row < self.size && position.col < self.size)
            .then(|| self.cells[position.row * self.size + position.col])
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        self.rows().nth(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;

        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == EMPTY)
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// Returns a copy with `tile` written into the `n`th empty cell (row-major), together with
    /// the cell it landed in. `None` when the board has `n` or fewer empty cells.
    pub fn with_nth_empty(&self, n: usize, tile: SpawnTile) -> Option<(Self, Position)> {
        let position = self.empty_cells().nth(n)?;

        let mut board = self.clone();
        board.cells[position.row * self.size + position.col] = tile.value();

        Some((board, position))
    }
}

fn check_size(size: usize) -> Result<()> {
    if size < MIN_SIZE {
        return Err(BoardDefect::TooSmall(size).into());
    }

    if size > MAX_SIZE {
        return Err(BoardDefect::TooLarge(size).into());
    }

    Ok(())
}

fn is_valid_tile(value: Tile) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![EMPTY; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|tile| tile.to_string().len())
            .max()
            .unwrap_or(1);

        for row in self.rows() {
            for (col, &tile) in row.iter().enumerate() {
                if col != 0 {
                    f.write_str(" ")?;
                }

                if tile == EMPTY {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_powers_of_two() {
        let board = Board::from_rows(&[[0, 2, 4, 8], [16, 0, 0, 0], [0; 4], [0, 0, 0, 2048]])
            .unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.get(Position::new(3, 3)), Some(2048));
        assert_eq!(board.get(Position::new(4, 0)), None);
        assert_eq!(board.count_empty(), 10);
    }

    #[test]
    fn from_rows_rejects_malformed_boards() {
        assert_eq!(
            Board::from_rows(&[[2]]),
            Err(Error::InvalidBoard(BoardDefect::TooSmall(1)))
        );

        let ragged: Vec<Vec<Tile>> = vec![vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            Board::from_rows(&ragged),
            Err(Error::InvalidBoard(BoardDefect::NotSquare {
                row: 1,
                len: 3,
                size: 2
            }))
        );

        assert_eq!(
            Board::from_rows(&[[0, 3], [0, 0]]),
            Err(Error::InvalidBoard(BoardDefect::InvalidTile {
                row: 0,
                col: 1,
                value: 3
            }))
        );

        assert!(Board::from_rows(&[[0, 0], [1, 0]]).is_err());
    }

    #[test]
    fn tiles_are_capped_at_max_tile() {
        assert!(Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).is_ok());

        assert_eq!(
            Board::from_rows(&[[0, 0], [0, MAX_TILE * 2]]),
            Err(Error::InvalidBoard(BoardDefect::InvalidTile {
                row: 1,
                col: 1,
                value: 1 << 63
            }))
        );
    }

    #[test]
    fn sizes_outside_the_supported_range_are_rejected() {
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(Error::InvalidBoard(BoardDefect::TooLarge(MAX_SIZE + 1)))
        );
        assert_eq!(Board::new(0), Err(Error::InvalidBoard(BoardDefect::TooSmall(0))));
        assert_eq!(Board::new(MAX_SIZE).map(|board| board.count_empty()), Ok(MAX_SIZE * MAX_SIZE));
    }

    #[test]
    fn empty_cells_are_row_major() {
        let board = Board::from_rows(&[[2, 0], [0, 4]]).unwrap();

        let empty: Vec<_> = board.empty_cells().collect();

        assert_eq!(empty, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn with_nth_empty_fills_the_requested_cell() {
        let board = Board::from_rows(&[[2, 0], [0, 0]]).unwrap();

        let (next, position) = board.with_nth_empty(1, SpawnTile::Four).unwrap();

        assert_eq!(position, Position::new(1, 0));
        assert_eq!(next.to_rows(), vec![vec![2, 0], vec![4, 0]]);
        assert!(board.with_nth_empty(3, SpawnTile::Two).is_none());
    }

    #[test]
    fn serde_goes_through_validation() {
        let board: Board = serde_json::from_str("[[2,0],[0,4]]").unwrap();
        assert_eq!(board.to_rows(), vec![vec![2, 0], vec![0, 4]]);

        assert!(serde_json::from_str::<Board>("[[2,0],[0,5]]").is_err());
    }

    #[test]
    fn display_pads_columns() {
        let board = Board::from_rows(&[[2, 0], [0, 128]]).unwrap();

        assert_eq!(board.to_string(), "  2   .\n  . 128\n");
    }
}
