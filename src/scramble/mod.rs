//! Word-scramble game core
//!
//! A round shows the scrambled letters of a word; the player types the
//! answer while a repeating timer drip-feeds letter hints.

pub mod session;

pub use session::{GuessOutcome, ScrambleRound, ScrambleSession};
