//! Board engine: rectangular grid geometry plus the stateful game on top.
//!
//! - [`Grid`] owns the cells and the canonical primitives: counter-clockwise
//!   rotation and the downward slide-and-merge pass.
//! - [`GameState`] owns a `Grid`, the score, and a seeded RNG, and exposes
//!   the four-direction move surface built from those primitives.

mod grid;
mod state;

pub use grid::{Grid, Score, SlideOutcome, Tile};
pub use state::{
    Direction, GameState, DEFAULT_SEED, DEFAULT_SIZE, INITIAL_TILES, TWO_TILE_CHANCE,
};
