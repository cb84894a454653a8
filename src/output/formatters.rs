//! Formatting utilities for terminal output

use crate::core::{Feedback, MatchResult};
use colored::{ColoredString, Colorize};

/// Emoji shown for a single letter result
#[must_use]
pub const fn heart(result: MatchResult) -> &'static str {
    match result {
        MatchResult::CorrectLetterCorrectPosition => "💚",
        MatchResult::CorrectLetterWrongPosition => "💛",
        MatchResult::DeviatedLetterCorrectPosition => "💙",
        MatchResult::DeviatedLetterWrongPosition => "💜",
        MatchResult::WrongLetter => "❤️",
    }
}

/// Format feedback as a row of hearts
#[must_use]
pub fn feedback_to_hearts(feedback: &Feedback) -> String {
    feedback.iter().map(heart).collect::<Vec<_>>().join(" ")
}

/// Spread the letters of a word so they line up with its hearts
///
/// A heart is two columns wide plus one separator, so letters sit three
/// columns apart.
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join("  ")
}

/// Color one letter by its result
#[must_use]
pub fn colored_letter(letter: char, result: MatchResult) -> ColoredString {
    let text = letter.to_string();
    match result {
        MatchResult::CorrectLetterCorrectPosition => text.green().bold(),
        MatchResult::CorrectLetterWrongPosition => text.yellow().bold(),
        MatchResult::DeviatedLetterCorrectPosition => text.blue().bold(),
        MatchResult::DeviatedLetterWrongPosition => text.magenta().bold(),
        MatchResult::WrongLetter => text.red(),
    }
}

/// A word with each letter colored by its result
#[must_use]
pub fn colored_word(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.iter())
        .map(|(letter, result)| colored_letter(letter, result).to_string())
        .collect()
}

/// Label of the n-th trivia choice: A, B, C, ...
#[must_use]
pub fn choice_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_follow_result_order() {
        let feedback: Feedback = "01234".parse().unwrap();
        assert_eq!(feedback_to_hearts(&feedback), "💚 💛 💙 💜 ❤️");
    }

    #[test]
    fn hearts_for_empty_feedback() {
        assert_eq!(feedback_to_hearts(&Feedback::new(Vec::new())), "");
    }

    #[test]
    fn letters_line_up_with_hearts() {
        assert_eq!(spaced_letters("HELLO"), "H  E  L  L  O");
        assert_eq!(spaced_letters("A"), "A");
        assert!(!spaced_letters("CASTLE").ends_with(' '));
    }

    #[test]
    fn colored_word_keeps_letters() {
        colored::control::set_override(false);
        let feedback: Feedback = "04000".parse().unwrap();
        assert_eq!(colored_word("HELLO", &feedback), "HELLO");
    }

    #[test]
    fn choice_labels() {
        assert_eq!(choice_label(0), 'A');
        assert_eq!(choice_label(3), 'D');
        assert_eq!(choice_label(25), 'Z');
        assert_eq!(choice_label(26), '?');
        assert_eq!(choice_label(1000), '?');
    }
}
