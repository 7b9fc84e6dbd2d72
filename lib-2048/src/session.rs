use std::cmp;

use core_2048::{
    can_move, has_reached_target, logic, Board, Direction, Merge, Position, Score, Tile,
};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::{
    config::SessionConfig,
    error::{Error, Result},
    history::{History, Snapshot},
    rng::TileRng,
    spawn::spawn_tile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Playing,
    /// The target tile was reached and moves are still possible.
    Won,
    GameOver,
}

/// What an accepted move did, for hosts that animate merges and spawns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub direction: Direction,
    pub score_gained: Score,
    pub merged_positions: Vec<Merge>,
    pub spawn: Option<(Position, Tile)>,
}

/// The fields a host persists between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub score: Score,
    pub best_score: Score,
}

/// One game of 2048 together with the random source that feeds its spawns.
///
/// Sessions are values: every transition borrows the current session and returns the next
/// one, leaving the original untouched. A rejected move returns an identical copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Session<R> {
    config: SessionConfig,
    board: Board,
    score: Score,
    best_score: Score,
    history: History,
    game_over: bool,
    won: bool,
    rng: R,
}

impl<R> Session<R>
where
    R: TileRng + Clone,
{
    /// Starts a game: an empty board with `config.initial_tiles` tiles spawned one after
    /// another.
    pub fn new(config: SessionConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let board = Board::new(config.size)?;

        Ok(Self::start(config, board, 0, rng))
    }

    /// Rebuilds a session from persisted fields. History starts empty. Any score is accepted;
    /// scoring saturates at `Score::MAX`.
    pub fn restore(config: SessionConfig, snapshot: SessionSnapshot, rng: R) -> Result<Self> {
        config.validate()?;

        if snapshot.board.size() != config.size {
            return Err(Error::InvalidConfig(format!(
                "saved board is {size}x{size} but the config expects {expected}x{expected}",
                size = snapshot.board.size(),
                expected = config.size
            )));
        }

        let won = has_reached_target(&snapshot.board, config.target);
        let game_over = !can_move(&snapshot.board);

        Ok(Self {
            history: History::with_capacity(config.undo_depth),
            best_score: cmp::max(snapshot.best_score, snapshot.score),
            score: snapshot.score,
            board: snapshot.board,
            game_over,
            won,
            config,
            rng,
        })
    }

    fn start(config: SessionConfig, empty: Board, best_score: Score, mut rng: R) -> Self {
        let board = (0..config.initial_tiles).fold(empty, |board, _| {
            spawn_tile(&board, config.chance_four, &mut rng).board
        });

        let won = has_reached_target(&board, config.target);
        let game_over = !can_move(&board);

        debug!("new game on a {0}x{0} board", config.size);

        Self {
            history: History::with_capacity(config.undo_depth),
            board,
            score: 0,
            best_score,
            game_over,
            won,
            config,
            rng,
        }
    }

    /// Carries a best score over from an earlier run.
    pub fn with_best_score(mut self, best_score: Score) -> Self {
        self.best_score = cmp::max(self.best_score, best_score);
        self
    }

    /// A fresh game with the same config. The best score and the random stream carry over.
    pub fn new_game(&self) -> Self {
        Self::start(
            self.config.clone(),
            self.board.cleared(),
            self.best_score,
            self.rng.clone(),
        )
    }

    pub fn apply_move(&self, direction: Direction) -> Self {
        self.play(direction).0
    }

    /// Like [`Session::apply_move`], also reporting merges and the spawned tile. The report is
    /// `None` when the move was rejected.
    pub fn play(&self, direction: Direction) -> (Self, Option<TurnReport>) {
        if self.game_over {
            trace!("ignoring {direction}: game is over");
            return (self.clone(), None);
        }

        let Some(result) = logic::try_move(&self.board, direction) else {
            trace!("ignoring {direction}: nothing moves");
            return (self.clone(), None);
        };

        let mut next = self.clone();

        next.history.push(Snapshot {
            board: self.board.clone(),
            score: self.score,
        });

        let spawn = spawn_tile(&result.board, self.config.chance_four, &mut next.rng);

        next.board = spawn.board;
        next.score = next.score.saturating_add(result.score_gained);
        next.best_score = cmp::max(next.best_score, next.score);
        next.won = self.won || has_reached_target(&next.board, self.config.target);
        next.game_over = !can_move(&next.board);

        debug!(
            "{direction}: +{} (score {}), {} merge(s)",
            result.score_gained,
            next.score,
            result.merged_positions.len()
        );

        if next.won && !self.won {
            info!("reached {} with score {}", self.config.target, next.score);
        }

        if next.game_over {
            info!("no moves left, final score {}", next.score);
        }

        let report = TurnReport {
            direction,
            score_gained: result.score_gained,
            merged_positions: result.merged_positions,
            spawn: spawn.position.zip(spawn.value),
        };

        (next, Some(report))
    }

    /// Steps back one accepted move. The undone move cannot be redone.
    pub fn undo(&self) -> Self {
        let mut next = self.clone();

        let Some(snapshot) = next.history.pop() else {
            trace!("nothing to undo");
            return next;
        };

        next.won = has_reached_target(&snapshot.board, self.config.target);
        next.game_over = false;
        next.board = snapshot.board;
        next.score = snapshot.score;

        debug!("undo, score back to {}", next.score);

        next
    }
}

impl<R> Session<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn best_score(&self) -> Score {
        self.best_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else if self.won {
            Status::Won
        } else {
            Status::Playing
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            score: self.score,
            best_score: self.best_score,
        }
    }
}
