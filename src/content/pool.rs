//! Pool of not-yet-played content

use rand::Rng;

/// Holds the content items that have not been played yet.
///
/// Drawing picks uniformly at random and removes the item, so a round is
/// never repeated within one game.
#[derive(Debug, Clone)]
pub struct ContentPool<T> {
    items: Vec<T>,
}

impl<T> ContentPool<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove and return a random item, or None once the pool is spent
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.items.len());
        Some(self.items.remove(index))
    }
}

impl<T> From<Vec<T>> for ContentPool<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_removes_item() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = ContentPool::new(vec!["a", "b", "c"]);

        let first = pool.draw(&mut rng).unwrap();
        assert_eq!(pool.len(), 2);

        let second = pool.draw(&mut rng).unwrap();
        assert_ne!(first, second);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_pool_drains_without_repeats() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = ContentPool::new((0..20).collect::<Vec<_>>());

        let mut seen = Vec::new();
        while let Some(item) = pool.draw(&mut rng) {
            seen.push(item);
        }

        assert!(pool.is_empty());
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_pool_draws_none() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool: ContentPool<i32> = ContentPool::new(Vec::new());
        assert!(pool.draw(&mut rng).is_none());
    }
}
