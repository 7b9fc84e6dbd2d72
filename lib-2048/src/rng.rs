use rand::Rng;

/// Source of the two random choices a spawn makes: which empty cell, and whether the tile is
/// a 4.
pub trait TileRng {
    /// Uniform index in `0..n`. Callers never pass `n == 0`.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R> TileRng for R
where
    R: Rng + ?Sized,
{
    fn next_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }

    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

/// Replays a fixed, cycling sequence of unit values. An index draw maps `u` to `⌊u·n⌋`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Values are clamped into `[0, 1)`. An empty script behaves like an endless run of zeros.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();

        Self { values, cursor: 0 }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl TileRng for ScriptedRng {
    fn next_index(&mut self, n: usize) -> usize {
        let index = (self.next_unit() * n as f64) as usize;

        index.min(n.saturating_sub(1))
    }

    fn next_unit(&mut self) -> f64 {
        let value = match self.values.len() {
            0 => 0.0,
            len => self.values[self.cursor % len],
        };

        self.cursor += 1;

        value
    }
}
