//! Picture-puzzle content records

use image::DynamicImage;
use serde::Deserialize;
use std::path::PathBuf;

/// A picture puzzle: the image the player reassembles plus the name and
/// description revealed on success.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub description: String,
    pub image: DynamicImage,
}

/// On-disk form of a puzzle document
///
/// ```toml
/// name = "Lighthouse"
/// image = "../images/lighthouse.png"
/// description = "A lighthouse warns ships away from the shore at night."
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleDoc {
    pub name: String,
    pub image: PathBuf,
    pub description: String,
}
