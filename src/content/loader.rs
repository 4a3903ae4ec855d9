//! Load puzzle and scramble documents from content directories
//!
//! `load_puzzles` and `load_scrambles` scan a directory for `*.toml`
//! files and keep every well-formed record. A file that fails to parse,
//! is missing a field, or (for puzzles) names an undecodable image is
//! logged and skipped so one bad document never takes the game down.

use crate::content::puzzle::{Puzzle, PuzzleDoc};
use crate::content::scramble::{is_char_permutation, scramble_word, Scramble, ScrambleDoc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a single content document
#[derive(Debug, Error)]
pub enum LoadError {
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
    /// A required field was present but empty
    #[error("field '{0}' is empty")]
    EmptyField(&'static str),
    /// A provided scramble is not a rearrangement of the word
    #[error("scrambled text '{scrambled}' is not a permutation of '{word}'")]
    ScrambleMismatch { word: String, scrambled: String },
    /// Image decoding failed
    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Load every well-formed puzzle document under `dir`
pub fn load_puzzles(dir: &Path) -> Vec<Puzzle> {
    let mut puzzles = Vec::new();
    for path in toml_files(dir) {
        let parsed = fs::read_to_string(&path)
            .map_err(LoadError::from)
            .and_then(|text| parse_puzzle(&text, base_dir(&path)));
        match parsed {
            Ok(puzzle) => puzzles.push(puzzle),
            Err(e) => tracing::error!("skipping puzzle file {}: {}", path.display(), e),
        }
    }
    tracing::info!("loaded {} puzzles from {}", puzzles.len(), dir.display());
    puzzles
}

/// Load every well-formed scramble document under `dir`
pub fn load_scrambles(dir: &Path) -> Vec<Scramble> {
    let mut scrambles = Vec::new();
    for path in toml_files(dir) {
        let parsed = fs::read_to_string(&path)
            .map_err(LoadError::from)
            .and_then(|text| parse_scramble(&text, base_dir(&path)));
        match parsed {
            Ok(scramble) => scrambles.push(scramble),
            Err(e) => tracing::error!("skipping scramble file {}: {}", path.display(), e),
        }
    }
    tracing::info!("loaded {} scrambles from {}", scrambles.len(), dir.display());
    scrambles
}

/// Parse one puzzle document; image paths resolve against `base`
pub fn parse_puzzle(text: &str, base: &Path) -> Result<Puzzle, LoadError> {
    let doc: PuzzleDoc = toml::from_str(text)?;
    require("name", &doc.name)?;
    require("description", &doc.description)?;

    // The puzzle is unplayable without its picture, so a bad image fails
    // the whole document.
    let image = image::open(resolve(base, &doc.image))?;

    Ok(Puzzle {
        name: doc.name,
        description: doc.description,
        image,
    })
}

/// Parse one scramble document; image paths resolve against `base`
pub fn parse_scramble(text: &str, base: &Path) -> Result<Scramble, LoadError> {
    let doc: ScrambleDoc = toml::from_str(text)?;
    require("word", &doc.word)?;
    require("description", &doc.description)?;

    let scrambled = match doc.scrambled {
        Some(s) if !s.trim().is_empty() => {
            if !is_char_permutation(&doc.word, &s) {
                return Err(LoadError::ScrambleMismatch {
                    word: doc.word,
                    scrambled: s,
                });
            }
            s
        }
        _ => scramble_word(&doc.word, &mut rand::thread_rng()),
    };

    // The scramble round works without a picture; a bad image only costs
    // the dialog illustration.
    let image = doc.image.and_then(|path| {
        let path = resolve(base, &path);
        match image::open(&path) {
            Ok(img) => Some(img),
            Err(e) => {
                tracing::error!("unable to load scramble image {}: {}", path.display(), e);
                None
            }
        }
    });

    Ok(Scramble {
        word: doc.word,
        scrambled,
        description: doc.description,
        image,
    })
}

fn require(field: &'static str, value: &str) -> Result<(), LoadError> {
    if value.trim().is_empty() {
        return Err(LoadError::EmptyField(field));
    }
    Ok(())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

/// The `*.toml` files in `dir`, creating the directory if it is missing
fn toml_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("unable to create content directory {}: {}", dir.display(), e);
        }
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("unable to read content directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    files
}
