use core_2048::{Tile, DEFAULT_SIZE, DEFAULT_TARGET, MAX_SIZE, MAX_TILE, MIN_SIZE};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    history::MAX_UNDO_DEPTH,
    spawn::DEFAULT_CHANCE_FOUR,
};

/// Session parameters. Every field is optional in TOML and falls back to its default.
///
/// ```toml
/// size = 4
/// initial_tiles = 2
/// chance_four = 0.1
/// target = 2048
/// undo_depth = 3
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub size: usize,
    pub initial_tiles: usize,
    /// Probability that a spawned tile is a 4 rather than a 2.
    pub chance_four: f64,
    /// Tile value that sets the won flag.
    pub target: Tile,
    /// Number of moves that can be undone, 1 to 5.
    pub undo_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_tiles: 2,
            chance_four: DEFAULT_CHANCE_FOUR,
            target: DEFAULT_TARGET,
            undo_depth: 1,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfig(message));

        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return invalid(format!("size {} is outside {MIN_SIZE}..={MAX_SIZE}", self.size));
        }

        if self
            .size
            .checked_mul(self.size)
            .map_or(true, |cells| self.initial_tiles > cells)
        {
            return invalid(format!(
                "{} initial tiles do not fit on a {size}x{size} board",
                self.initial_tiles,
                size = self.size
            ));
        }

        if !(0.0..=1.0).contains(&self.chance_four) {
            return invalid(format!("chance_four {} is outside [0, 1]", self.chance_four));
        }

        if !(4..=MAX_TILE).contains(&self.target) || !self.target.is_power_of_two() {
            return invalid(format!("target {} is not a power of two in 4..=2^62", self.target));
        }

        if !(1..=MAX_UNDO_DEPTH).contains(&self.undo_depth) {
            return invalid(format!(
                "undo_depth {} is outside 1..={MAX_UNDO_DEPTH}",
                self.undo_depth
            ));
        }

        Ok(())
    }
}
