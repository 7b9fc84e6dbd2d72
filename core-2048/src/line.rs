use crate::board::{Score, Tile, EMPTY, MAX_TILE};

/// Outcome of sliding one line toward its start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Vec<Tile>,
    pub score: Score,
    /// `(index, value)` of every merged tile, indexed in the resulting line.
    pub merges: Vec<(usize, Tile)>,
}

/// Packs the tiles of `line` toward index 0 and merges equal neighbours.
///
/// A pair merges at most once per call: the tile produced by a merge is never compared
/// against the tile that follows it, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Tiles at
/// [`MAX_TILE`] only slide.
pub fn compress_and_merge_line(line: &[Tile]) -> LineMerge {
    let mut tiles = line.iter().copied().filter(|&tile| tile != EMPTY).peekable();

    let mut merged = Vec::with_capacity(line.len());
    let mut merges = Vec::new();
    let mut score = 0;

    while let Some(tile) = tiles.next() {
        if tiles.next_if(|&next| can_merge(tile, next)).is_some() {
            let sum = tile * 2;

            merges.push((merged.len(), sum));
            merged.push(sum);
            score = Score::saturating_add(score, sum);
        } else {
            merged.push(tile);
        }
    }

    merged.resize(line.len(), EMPTY);

    LineMerge {
        line: merged,
        score,
        merges,
    }
}

/// Whether two neighbouring tiles combine when pushed together.
pub(crate) fn can_merge(tile: Tile, next: Tile) -> bool {
    tile == next && tile != EMPTY && tile < MAX_TILE
}
