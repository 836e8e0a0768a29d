//! # Connect Four Engine
//!
//! A turn-based Connect Four engine: it owns the board state, enforces move
//! legality, detects winning configurations, and exposes a small
//! mutation/query surface for a presentation layer to build on. It carries
//! no rendering, networking, or AI concerns.
//!
//! Coordinates are `(column, row)` with row 0 at the bottom of the board.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, counters, win detection, engine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four_engine::game::{Counter, Game};
//!
//! let mut game = Game::default();
//! game.drop_counter(3)?;
//! game.drop_counter(3)?;
//! assert_eq!(game.board().get(3, 0), Some(Counter::Red));
//! assert_eq!(game.board().get(3, 1), Some(Counter::Yellow));
//! assert!(!game.is_game_over());
//! # Ok::<(), connect_four_engine::error::GameError>(())
//! ```

pub mod config;
pub mod error;
pub mod game;
