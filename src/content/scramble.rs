//! Word-scramble content records and the letter shuffle

use image::DynamicImage;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Shuffle attempts before accepting a result equal to the input
const MAX_SCRAMBLE_ATTEMPTS: usize = 16;

/// A word scramble: the answer, its scrambled presentation, and the
/// description (plus optional picture) revealed on success.
#[derive(Debug, Clone)]
pub struct Scramble {
    pub word: String,
    pub scrambled: String,
    pub description: String,
    pub image: Option<DynamicImage>,
}

/// On-disk form of a scramble document
///
/// `scrambled` and `image` are optional; a missing scramble is generated
/// at load time.
///
/// ```toml
/// word = "volcano"
/// description = "A volcano is an opening in the crust of a planet."
/// image = "../images/volcano.png"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScrambleDoc {
    pub word: String,
    pub scrambled: Option<String>,
    pub image: Option<PathBuf>,
    pub description: String,
}

/// Shuffle the letters of a word into a scrambled presentation.
///
/// For words with at least two distinct characters the result is
/// guaranteed to differ from the input, retrying the shuffle a bounded
/// number of times.
pub fn scramble_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    let mut distinct = chars.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return word.to_string();
    }

    let mut scrambled = String::new();
    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        chars.shuffle(rng);
        scrambled = chars.iter().collect();
        if scrambled != word {
            break;
        }
    }
    tracing::debug!("scrambled '{}' into '{}'", word, scrambled);
    scrambled
}

/// True when `a` and `b` contain the same multiset of characters
pub fn is_char_permutation(a: &str, b: &str) -> bool {
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts.values().all(|&n| n == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scramble_preserves_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let scrambled = scramble_word("lighthouse", &mut rng);
        assert!(is_char_permutation("lighthouse", &scrambled));
    }

    #[test]
    fn test_scramble_differs_from_word() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["ab", "volcano", "telescope"] {
            for _ in 0..50 {
                assert_ne!(scramble_word(word, &mut rng), word);
            }
        }
    }

    #[test]
    fn test_degenerate_words_pass_through() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scramble_word("", &mut rng), "");
        assert_eq!(scramble_word("a", &mut rng), "a");
        assert_eq!(scramble_word("aaaa", &mut rng), "aaaa");
    }

    #[test]
    fn test_is_char_permutation() {
        assert!(is_char_permutation("listen", "silent"));
        assert!(is_char_permutation("", ""));
        assert!(!is_char_permutation("aab", "abb"));
        assert!(!is_char_permutation("ab", "abc"));
    }

    proptest! {
        #[test]
        fn prop_scramble_is_permutation(word in "[a-z]{0,12}", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let scrambled = scramble_word(&word, &mut rng);
            prop_assert!(is_char_permutation(&word, &scrambled));
        }
    }
}
