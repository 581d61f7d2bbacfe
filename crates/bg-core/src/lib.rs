//! bg-core: Core game logic for The Box Girl
//!
//! This crate contains all game logic with no terminal I/O.
//! Player-facing text is queued on [`GameState::messages`] and drained by
//! whichever front end drives the [`GameLoop`].

pub mod action;
pub mod mansion;
pub mod monster;
pub mod object;
pub mod player;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameState, LossCause, Victory};
pub use rng::GameRng;
