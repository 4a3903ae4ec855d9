//! Integration tests for full game-session flows

use image::DynamicImage;
use parlor::content::{Puzzle, Scramble};
use parlor::puzzle::{PuzzleSession, TileLayout};
use parlor::scramble::{GuessOutcome, ScrambleSession};

fn sample_puzzles(n: usize) -> Vec<Puzzle> {
    (0..n)
        .map(|i| Puzzle {
            name: format!("picture-{}", i),
            description: format!("A description of picture {}.", i),
            image: DynamicImage::new_rgba8(24, 16),
        })
        .collect()
}

fn sample_scrambles() -> Vec<Scramble> {
    [("listen", "silent"), ("volcano", "clavono"), ("planet", "nalpet")]
        .into_iter()
        .map(|(word, scrambled)| Scramble {
            word: word.to_string(),
            scrambled: scrambled.to_string(),
            description: format!("All about {}.", word),
            image: None,
        })
        .collect()
}

#[test]
fn test_puzzle_game_plays_every_puzzle_once() {
    let mut session = PuzzleSession::with_seed(sample_puzzles(4), vec![TileLayout::new(2, 3)], 21);

    let mut played = Vec::new();
    while session.next_round().is_some() {
        // Solve the board by selection-sorting tiles into place
        let tile_count = {
            let round = session.current().expect("round should be loaded");
            round.board.layout().tile_count()
        };
        let round = session.current_mut().expect("round should be loaded");
        for pos in 0..tile_count {
            if round.board.tile_at(pos) != pos {
                let from = (0..tile_count)
                    .find(|&p| round.board.tile_at(p) == pos)
                    .expect("boards hold a permutation");
                round.board.swap(pos, from);
            }
        }
        assert!(round.board.is_solved());

        played.push(session.finish_round().expect("solved round hands back its puzzle").name);
    }

    played.sort();
    played.dedup();
    assert_eq!(played.len(), 4, "every puzzle is played exactly once");
    assert_eq!(session.remaining(), 0);
}

#[test]
fn test_scramble_game_guess_flow() {
    let mut session = ScrambleSession::with_seed(sample_scrambles(), 8);

    let mut solved = 0;
    while session.next_round().is_some() {
        let round = session.current_mut().expect("round should be loaded");
        let word = round.word().to_string();

        // A wrong full-length guess is flagged, then the answer lands
        let mut wrong: String = word.chars().rev().collect();
        if wrong == word {
            wrong = format!("{}x", &word[1..]);
        }
        assert_eq!(round.submit_guess(&wrong), GuessOutcome::Wrong);
        assert_eq!(round.submit_guess(&word.to_uppercase()), GuessOutcome::Correct);

        let scramble = session.finish_round().expect("solved round hands back its scramble");
        assert_eq!(scramble.word, word);
        solved += 1;
    }

    assert_eq!(solved, 3);
    assert!(session.next_round().is_none());
}

#[test]
fn test_scramble_hints_never_reveal_the_last_letter() {
    let mut session = ScrambleSession::with_seed(sample_scrambles(), 8);
    session.next_round().expect("pool is not empty");

    let round = session.current_mut().expect("round should be loaded");
    let len = round.word().chars().count();
    for _ in 0..len * 2 {
        round.reveal_hint();
    }

    assert_eq!(round.hints_revealed(), len - 1);
    assert!(round.hint_text().ends_with('_'));
}

#[test]
fn test_sessions_survive_double_load_calls() {
    let mut session = ScrambleSession::with_seed(sample_scrambles(), 8);

    session.next_round().expect("pool is not empty");
    let before = session.remaining();
    // A stray second call must not consume another scramble
    session.next_round().expect("active round is kept");
    assert_eq!(session.remaining(), before);
}
