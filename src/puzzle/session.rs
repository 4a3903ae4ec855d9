//! Puzzle game session: the unplayed pool plus at most one active round

use crate::content::{ContentPool, Puzzle};
use crate::puzzle::board::{TileBoard, TileLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One active picture-puzzle round
#[derive(Debug)]
pub struct PuzzleRound {
    pub puzzle: Puzzle,
    pub board: TileBoard,
}

/// Driver state for the puzzle game.
///
/// Tracks the pool of unplayed puzzles and the single active round; the
/// round is loaded by `next_round` and cleared by `finish_round`.
#[derive(Debug)]
pub struct PuzzleSession {
    pool: ContentPool<Puzzle>,
    layouts: Vec<TileLayout>,
    rng: StdRng,
    current: Option<PuzzleRound>,
}

impl PuzzleSession {
    pub fn new(puzzles: Vec<Puzzle>, layouts: Vec<TileLayout>) -> Self {
        Self::with_rng(puzzles, layouts, StdRng::from_entropy())
    }

    /// Deterministic session for replays and tests
    pub fn with_seed(puzzles: Vec<Puzzle>, layouts: Vec<TileLayout>, seed: u64) -> Self {
        Self::with_rng(puzzles, layouts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(puzzles: Vec<Puzzle>, layouts: Vec<TileLayout>, rng: StdRng) -> Self {
        let layouts = if layouts.is_empty() {
            tracing::warn!("no tile layouts supplied, falling back to 3x4");
            vec![TileLayout::new(3, 4)]
        } else {
            layouts
        };
        Self {
            pool: ContentPool::new(puzzles),
            layouts,
            rng,
            current: None,
        }
    }

    /// Puzzles still waiting to be played
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn current(&self) -> Option<&PuzzleRound> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut PuzzleRound> {
        self.current.as_mut()
    }

    /// Draw a random unplayed puzzle and install it as the active round.
    ///
    /// Returns None once the pool is exhausted. If a round is still
    /// active the call is logged and the active round kept.
    pub fn next_round(&mut self) -> Option<&PuzzleRound> {
        if self.current.is_some() {
            tracing::error!("next_round called while a puzzle was still loaded");
            return self.current.as_ref();
        }

        let puzzle = self.pool.draw(&mut self.rng)?;
        let layout = self.layouts[self.rng.gen_range(0..self.layouts.len())];
        let board = TileBoard::shuffled(layout, &mut self.rng);
        tracing::info!(
            "next puzzle '{}' on a {}x{} board ({} left in pool)",
            puzzle.name,
            layout.rows,
            layout.cols,
            self.pool.len()
        );

        self.current = Some(PuzzleRound { puzzle, board });
        self.current.as_ref()
    }

    /// Clear the active round, handing back the solved puzzle for the
    /// description dialog
    pub fn finish_round(&mut self) -> Option<Puzzle> {
        self.current.take().map(|round| round.puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn sample_puzzles(n: usize) -> Vec<Puzzle> {
        (0..n)
            .map(|i| Puzzle {
                name: format!("puzzle-{}", i),
                description: format!("description {}", i),
                image: DynamicImage::new_rgba8(8, 8),
            })
            .collect()
    }

    #[test]
    fn test_round_lifecycle() {
        let mut session =
            PuzzleSession::with_seed(sample_puzzles(2), vec![TileLayout::new(2, 2)], 5);
        assert!(session.current().is_none());

        session.next_round().unwrap();
        assert!(session.current().is_some());
        assert_eq!(session.remaining(), 1);

        let solved = session.finish_round().unwrap();
        assert!(solved.name.starts_with("puzzle-"));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_next_round_keeps_active_round() {
        let mut session =
            PuzzleSession::with_seed(sample_puzzles(3), vec![TileLayout::new(2, 2)], 5);

        let first = session.next_round().unwrap().puzzle.name.clone();
        // A second call while loaded must not draw from the pool
        let second = session.next_round().unwrap().puzzle.name.clone();
        assert_eq!(first, second);
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn test_pool_exhaustion_ends_game() {
        let mut session =
            PuzzleSession::with_seed(sample_puzzles(2), vec![TileLayout::new(2, 2)], 5);

        for _ in 0..2 {
            assert!(session.next_round().is_some());
            session.finish_round();
        }
        assert!(session.next_round().is_none());
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_each_puzzle_played_once() {
        let mut session =
            PuzzleSession::with_seed(sample_puzzles(5), vec![TileLayout::new(2, 3)], 5);

        let mut names = Vec::new();
        while session.next_round().is_some() {
            names.push(session.finish_round().unwrap().name);
        }

        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_empty_layout_fallback() {
        let mut session = PuzzleSession::with_seed(sample_puzzles(1), Vec::new(), 5);
        let round = session.next_round().unwrap();
        assert_eq!(round.board.layout(), TileLayout::new(3, 4));
    }
}
