//! Playable 2048 on top of `core-2048`: tile spawning from an injectable random source,
//! sessions with score tracking and bounded undo, and simple automatic players.

pub use core_2048::*;

pub mod ai;
pub mod config;
pub mod error;
pub mod history;
pub mod rng;
pub mod session;
pub mod spawn;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use history::{History, Snapshot, MAX_UNDO_DEPTH};
pub use rng::{ScriptedRng, TileRng};
pub use session::{Session, SessionSnapshot, Status, TurnReport};
pub use spawn::{spawn_tile, SpawnResult, DEFAULT_CHANCE_FOUR};
