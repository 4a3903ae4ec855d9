//! Picture-puzzle game core
//!
//! A round cuts the puzzle image into a grid of tiles, shuffles them,
//! and lets the player swap tiles until the picture is restored.

pub mod board;
pub mod session;

pub use board::{TileBoard, TileLayout};
pub use session::{PuzzleRound, PuzzleSession};
