//! Tile arrangement for one puzzle round

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle attempts before forcing a swap on a still-solved board
const MAX_SHUFFLE_ATTEMPTS: usize = 16;

/// Grid dimensions a puzzle image is cut into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub rows: usize,
    pub cols: usize,
}

impl TileLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// The tile permutation for one round.
///
/// `tile_at(pos)` is the index of the tile currently sitting at grid
/// position `pos` (row-major). The board is solved when every position
/// holds its own tile.
#[derive(Debug, Clone)]
pub struct TileBoard {
    layout: TileLayout,
    tiles: Vec<usize>,
    swaps: u32,
}

impl TileBoard {
    /// A board in the solved arrangement
    pub fn solved(layout: TileLayout) -> Self {
        Self {
            layout,
            tiles: (0..layout.tile_count()).collect(),
            swaps: 0,
        }
    }

    /// A shuffled board, guaranteed unsolved for layouts with more than
    /// one tile
    pub fn shuffled<R: Rng + ?Sized>(layout: TileLayout, rng: &mut R) -> Self {
        let mut board = Self::solved(layout);
        if layout.tile_count() < 2 {
            return board;
        }

        for _ in 0..MAX_SHUFFLE_ATTEMPTS {
            board.tiles.shuffle(rng);
            if !board.is_solved() {
                return board;
            }
        }
        // Every attempt landed on the identity; force the issue
        board.tiles.swap(0, 1);
        board
    }

    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    /// Index of the tile at a row-major grid position
    pub fn tile_at(&self, pos: usize) -> usize {
        self.tiles[pos]
    }

    /// Swap the tiles at two grid positions
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.tiles.swap(a, b);
        self.swaps += 1;
    }

    /// Swaps performed so far this round
    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(pos, &tile)| pos == tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffled_board_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = TileBoard::shuffled(TileLayout::new(4, 6), &mut rng);

        let mut tiles: Vec<usize> = (0..24).map(|pos| board.tile_at(pos)).collect();
        tiles.sort_unstable();
        assert_eq!(tiles, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_board_never_starts_solved() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = TileBoard::shuffled(TileLayout::new(1, 2), &mut rng);
            assert!(!board.is_solved(), "seed {} produced a solved board", seed);
        }
    }

    #[test]
    fn test_single_tile_board_is_solved() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = TileBoard::shuffled(TileLayout::new(1, 1), &mut rng);
        assert!(board.is_solved());
    }

    #[test]
    fn test_swapping_back_solves() {
        let mut board = TileBoard::solved(TileLayout::new(2, 2));
        board.swap(0, 3);
        assert!(!board.is_solved());
        assert_eq!(board.tile_at(0), 3);

        board.swap(0, 3);
        assert!(board.is_solved());
        assert_eq!(board.swaps(), 2);
    }

    #[test]
    fn test_self_swap_is_ignored() {
        let mut board = TileBoard::solved(TileLayout::new(2, 2));
        board.swap(1, 1);
        assert!(board.is_solved());
        assert_eq!(board.swaps(), 0);
    }

    #[test]
    fn test_solving_a_shuffled_board() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = TileBoard::shuffled(TileLayout::new(3, 4), &mut rng);

        // Selection-sort the tiles back into place
        for pos in 0..board.layout().tile_count() {
            if board.tile_at(pos) != pos {
                let from = (0..board.layout().tile_count())
                    .find(|&p| board.tile_at(p) == pos)
                    .unwrap();
                board.swap(pos, from);
            }
        }
        assert!(board.is_solved());
    }
}
