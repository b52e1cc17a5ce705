//! twenty48: a sliding-tile merge puzzle engine plus a small terminal game.
//!
//! This crate provides:
//! - A rectangular [`engine::Grid`] with the rotate/slide/merge primitives
//! - A stateful [`engine::GameState`] owning grid, score, and a seeded RNG
//! - A plain-text save format (`save` module)
//!
//! Quick start:
//! ```
//! use twenty48::engine::{Direction, GameState};
//!
//! // Deterministic game setup with a seeded RNG
//! let mut game = GameState::with_seed(4, 4, 42);
//! game.add_tile();
//! game.add_tile();
//! assert_eq!(game.board().count_empty(), 14);
//!
//! game.make_move(Direction::Down);
//! assert!(!game.is_game_over());
//! ```

pub mod engine;
pub mod save;
