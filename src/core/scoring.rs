//! Letter-by-letter scoring of a guess against the target word
//!
//! Each target letter can satisfy at most one guess position. Positions are
//! resolved in four passes of decreasing strictness, and a position resolved
//! by an earlier pass is never revisited:
//!
//! 1. Exact: same letter at the same position
//! 2. Displaced: same letter at the earliest unconsumed target position
//! 3. Deviated in place: letter within the threshold of the target letter at
//!    the same (unconsumed) position
//! 4. Deviated displaced: letter within the threshold of the earliest
//!    unconsumed target letter
//!
//! Whatever remains is a wrong letter.

use super::{Feedback, MatchResult};
use thiserror::Error;

/// Guess and target differ in length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Guess has {guess_len} letters but the word has {target_len}")]
pub struct UnequalLengthError {
    pub guess_len: usize,
    pub target_len: usize,
}

/// Classify every letter of `guess` against `target`
///
/// Two letters are "deviated" when their character codes differ by at most
/// `deviation_threshold`. A threshold of 0 disables deviated results.
///
/// # Errors
///
/// Returns `UnequalLengthError` if the strings differ in length (in
/// characters). The check happens before any comparison.
///
/// # Examples
/// ```
/// use trivia_wordle::core::{classify, MatchResult};
///
/// let feedback = classify("APPLE", "SPORT", 4).unwrap();
/// assert_eq!(feedback.as_slice()[1], MatchResult::CorrectLetterCorrectPosition);
/// assert_eq!(feedback.as_slice()[2], MatchResult::DeviatedLetterCorrectPosition);
///
/// assert!(classify("APPLES", "SPORT", 4).is_err());
/// ```
pub fn classify(
    guess: &str,
    target: &str,
    deviation_threshold: u32,
) -> Result<Feedback, UnequalLengthError> {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();

    if guess.len() != target.len() {
        return Err(UnequalLengthError {
            guess_len: guess.len(),
            target_len: target.len(),
        });
    }

    let n = guess.len();
    let mut results = vec![MatchResult::WrongLetter; n];
    let mut consumed = vec![false; n];
    let mut resolved = vec![false; n];

    // Allow: Index needed to address guess[i], target[i] and both masks
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        if guess[i] == target[i] {
            consumed[i] = true;
            resolved[i] = true;
            results[i] = MatchResult::CorrectLetterCorrectPosition;
        }
    }

    for i in 0..n {
        if resolved[i] {
            continue;
        }
        if let Some(j) = (0..n).find(|&j| !consumed[j] && target[j] == guess[i]) {
            consumed[j] = true;
            resolved[i] = true;
            results[i] = MatchResult::CorrectLetterWrongPosition;
        }
    }

    for i in 0..n {
        if resolved[i] || consumed[i] {
            continue;
        }
        if is_deviated(guess[i], target[i], deviation_threshold) {
            consumed[i] = true;
            resolved[i] = true;
            results[i] = MatchResult::DeviatedLetterCorrectPosition;
        }
    }

    for i in 0..n {
        if resolved[i] {
            continue;
        }
        if let Some(j) =
            (0..n).find(|&j| !consumed[j] && is_deviated(guess[i], target[j], deviation_threshold))
        {
            consumed[j] = true;
            resolved[i] = true;
            results[i] = MatchResult::DeviatedLetterWrongPosition;
        }
    }

    Ok(Feedback::new(results))
}

#[inline]
fn is_deviated(a: char, b: char, threshold: u32) -> bool {
    (a as u32).abs_diff(b as u32) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchResult::{
        CorrectLetterCorrectPosition as GRN, CorrectLetterWrongPosition as YLW,
        DeviatedLetterCorrectPosition as BLU, DeviatedLetterWrongPosition as PRL,
        WrongLetter as RED,
    };

    const THRESHOLD: u32 = 4;

    fn results(guess: &str, target: &str, threshold: u32) -> Vec<MatchResult> {
        classify(guess, target, threshold).unwrap().as_slice().to_vec()
    }

    #[test]
    fn known_classifications() {
        // Only one P in SPORT: the second P of APPLE is merely close to O,
        // and that consumes the O so L is not close to anything left.
        let test_cases = [
            ("APPLE", "SPORT", vec![RED, GRN, BLU, RED, RED]),
            ("GYPSY", "SPORT", vec![RED, RED, YLW, YLW, RED]),
            ("SPORT", "SPORT", vec![GRN, GRN, GRN, GRN, GRN]),
            ("AAAAA", "ABCXY", vec![GRN, BLU, BLU, RED, RED]),
            ("MMBBB", "AAZZZ", vec![RED, RED, PRL, PRL, RED]),
        ];

        for (guess, target, expected) in test_cases {
            assert_eq!(
                results(guess, target, THRESHOLD),
                expected,
                "classify({guess}, {target})"
            );
        }
    }

    #[test]
    fn unequal_length_is_rejected() {
        for guess in ["ASDF", "QWERTY", ""] {
            assert_eq!(
                classify(guess, "HELLO", THRESHOLD),
                Err(UnequalLengthError {
                    guess_len: guess.len(),
                    target_len: 5
                })
            );
        }
    }

    #[test]
    fn length_counts_characters() {
        assert!(classify("ÉCOLE", "HELLO", THRESHOLD).is_ok());
        assert!(classify("HELLO", "HÉLLO", THRESHOLD).is_ok());
    }

    #[test]
    fn exact_match_for_any_threshold() {
        for threshold in [0, 1, 4, 25, u32::MAX] {
            let feedback = classify("HELLO", "HELLO", threshold).unwrap();
            assert!(feedback.is_win(), "threshold {threshold}");
        }
    }

    #[test]
    fn threshold_zero_never_deviates() {
        let pairs = [("ZEHFQ", "HELLO"), ("MMBBB", "AAZZZ"), ("APPLE", "SPORT")];
        for (guess, target) in pairs {
            assert!(
                classify(guess, target, 0)
                    .unwrap()
                    .iter()
                    .all(|r| !r.is_deviated()),
                "{guess} vs {target}"
            );
        }
    }

    #[test]
    fn threshold_one_marks_neighbours() {
        assert_eq!(results("XORRY", "WORRY", 1)[0], BLU);
        assert_eq!(results("VORRY", "WORRY", 1)[0], BLU);
        assert_eq!(results("ZOMMM", "WORRY", 1)[0], PRL);
        assert_eq!(results("AORRY", "WORRY", 1)[0], RED);
    }

    #[test]
    fn deviation_is_inclusive() {
        // M -> Q is exactly 4 apart
        assert_eq!(results("QBBBB", "MCCCC", 4)[0], BLU);
        assert_eq!(results("RBBBB", "MCCCC", 4)[0], RED);
    }

    #[test]
    fn displaced_takes_earliest_unconsumed_target() {
        // Both Ls of the guess are displaced; each consumes a different L.
        assert_eq!(results("LLABC", "DEFLL", 0), vec![YLW, YLW, RED, RED, RED]);
        // Exact matches consume first; the one O left is credited once.
        assert_eq!(results("OOXXO", "OXXOY", 0), vec![GRN, YLW, GRN, YLW, RED]);
    }

    #[test]
    fn deviated_in_place_beats_deviated_elsewhere() {
        // Each B is one away from the letter in its own column.
        assert_eq!(results("BBZZZ", "ACMMM", 1), vec![BLU, BLU, RED, RED, RED]);
    }

    #[test]
    fn classification_is_deterministic() {
        let pairs = [("GYPSY", "SPORT"), ("MMBBB", "AAZZZ"), ("ZEHFQ", "HELLO")];
        for (guess, target) in pairs {
            let first = classify(guess, target, THRESHOLD).unwrap();
            for _ in 0..10 {
                assert_eq!(classify(guess, target, THRESHOLD).unwrap(), first);
            }
        }
    }

    #[test]
    fn never_double_credits_a_letter() {
        let pairs = [
            ("APPLE", "SPORT"),
            ("SPEED", "ERASE"),
            ("ROBOT", "FLOOR"),
            ("LLAMA", "ALPHA"),
            ("EEEEE", "HELLO"),
            ("BANANAS", "ANAGRAM"),
        ];
        for (guess, target) in pairs {
            let feedback = classify(guess, target, THRESHOLD).unwrap();

            for letter in guess.chars() {
                let credited = guess
                    .chars()
                    .zip(feedback.iter())
                    .filter(|&(g, r)| g == letter && r.is_correct_letter())
                    .count();
                let present = target.chars().filter(|&t| t == letter).count();
                assert!(
                    credited <= present,
                    "{guess} vs {target}: {letter} credited {credited} times, present {present}"
                );
            }
        }
    }

    #[test]
    fn raising_threshold_keeps_correct_letters() {
        let pairs = [
            ("APPLE", "SPORT"),
            ("GYPSY", "SPORT"),
            ("AAAAA", "ABCXY"),
            ("MMBBB", "AAZZZ"),
            ("QUARTZ", "WIZARD"),
        ];
        for (guess, target) in pairs {
            let mut previous = results(guess, target, 0);
            for threshold in 1..=26 {
                let current = results(guess, target, threshold);
                for (before, after) in previous.iter().zip(&current) {
                    if before.is_correct_letter() {
                        assert_eq!(before, after, "{guess} vs {target} at {threshold}");
                    } else {
                        assert!(!after.is_correct_letter(), "{guess} vs {target} at {threshold}");
                    }
                }
                previous = current;
            }
        }
    }

    #[test]
    fn output_length_matches_guess() {
        for (guess, target) in [("ABCDEFGHIJKLMNO", "ONMLKJIHGFEDCBA"), ("HELLO", "WORLD")] {
            assert_eq!(classify(guess, target, THRESHOLD).unwrap().len(), guess.len());
        }
    }
}
