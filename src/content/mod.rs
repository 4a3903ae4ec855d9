//! Content records and loading
//!
//! Each puzzle or scramble lives in its own TOML document inside the
//! content directory (`puzzles/` and `scrambles/` respectively). Image
//! paths are resolved relative to the file that names them. Malformed
//! files are logged and skipped, never fatal.

pub mod loader;
pub mod pool;
pub mod puzzle;
pub mod scramble;

pub use loader::{load_puzzles, load_scrambles, LoadError};
pub use pool::ContentPool;
pub use puzzle::Puzzle;
pub use scramble::{scramble_word, Scramble};
