//! Display functions for game events and command results

use super::formatters::{choice_label, colored_word, feedback_to_hearts, heart, spaced_letters};
use crate::commands::{CheckResult, GenerateResult, ScoreResult};
use crate::core::MatchResult;
use crate::game::{Guess, Hint, Session};
use crate::trivia::TriviaQuestion;
use colored::Colorize;

/// Print the welcome banner and the meaning of each heart
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Trivia Wordle                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word. After every wrong guess, answer a trivia question");
    println!("to earn the next one.\n");
    print_legend();
    println!("\nCommands: /hint, /guesses, /end (reveal the word), /quit\n");
}

/// Print what each heart means
pub fn print_legend() {
    let legend = [
        (MatchResult::CorrectLetterCorrectPosition, "right letter, right place"),
        (MatchResult::CorrectLetterWrongPosition, "right letter, wrong place"),
        (MatchResult::DeviatedLetterCorrectPosition, "close letter, right place"),
        (MatchResult::DeviatedLetterWrongPosition, "close letter, wrong place"),
        (MatchResult::WrongLetter, "wrong letter"),
    ];
    for (result, meaning) in legend {
        println!("  {} {meaning}", heart(result));
    }
}

/// Announce a new or resumed game
pub fn print_game_start(session: &Session, resumed: bool) {
    let verb = if resumed { "Resuming" } else { "New game" };
    println!("{}", "─".repeat(60).cyan());
    println!(
        "{verb}: {} letters, {} difficulty",
        session.word.len().to_string().bright_yellow().bold(),
        session.difficulty
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one scored guess
pub fn print_guess(guess: &Guess) {
    println!(
        "\n{} {}",
        format!("Guess #{}", guess.number).bright_black(),
        colored_word(&guess.content, &guess.result)
    );
    println!("  {}", spaced_letters(&guess.content));
    println!("  {}", feedback_to_hearts(&guess.result));
}

/// Print every guess of a game under the player's name
pub fn print_board(display_name: &str, guesses: &[Guess]) {
    println!("\n{}", format!("{display_name}'s Wordle Guess").bright_white().bold());
    if guesses.is_empty() {
        println!("No guesses yet.");
        return;
    }
    for guess in guesses {
        print_guess(guess);
    }
    println!();
}

/// Print a trivia question with lettered choices
pub fn print_trivia(question: &TriviaQuestion, choices: &[&str]) {
    println!("\n❓ {}", question.question.bright_cyan().bold());
    for (index, choice) in choices.iter().enumerate() {
        println!("   {}) {choice}", choice_label(index));
    }
}

pub fn print_trivia_verdict(correct: bool, question: &TriviaQuestion) {
    if correct {
        println!("{}", "✅ Correct! Make your next guess.".green().bold());
    } else {
        println!(
            "{} The answer was {}.",
            "❌ Wrong.".red().bold(),
            question.correct_answer.bright_white()
        );
    }
}

pub fn print_hint(hint: &Hint) {
    println!("💡 {hint}");
}

/// Celebrate a win
pub fn print_win(session_word: &str, guesses: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("    🎉  {session_word} in {guesses} {}!  🎉", plural(guesses))
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Reveal the word of an ended game
pub fn print_ended(session: &Session) {
    println!(
        "\nGame over. The word was {}.",
        session.word.bright_yellow().bold()
    );
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {} (threshold {})",
        colored_word(&result.guess, &result.feedback),
        result.target.bright_white().bold(),
        result.threshold
    );
    println!("  {}", spaced_letters(&result.guess));
    println!("  {}", feedback_to_hearts(&result.feedback));
    println!("  {}", result.feedback.encode().bright_black());
}

/// Print the result of the check command
pub fn print_check_result(result: &CheckResult) {
    if result.valid {
        println!("{} {}", "✅".green(), result.word.bright_white().bold());
    } else {
        println!("{} {} is not a valid word", "❌".red(), result.word);
        return;
    }

    if let Some(definition) = &result.info.definition {
        println!("   Definition: {definition}");
    }
    if !result.info.synonyms.is_empty() {
        let synonyms: Vec<&str> = result.info.synonyms.iter().map(String::as_str).collect();
        println!("   Synonyms:   {}", synonyms.join(", "));
    }
}

/// Print a word drawn by the generate command
pub fn print_generate_result(result: &GenerateResult) {
    println!(
        "🎲 {} ({} letters, {})",
        result.word.bright_yellow().bold(),
        result.word.len(),
        result.difficulty
    );
    match &result.info.definition {
        Some(definition) => println!("   {definition}"),
        None => println!("   {}", "No definition known.".bright_black()),
    }
    if !result.info.synonyms.is_empty() {
        let synonyms: Vec<&str> = result.info.synonyms.iter().map(String::as_str).collect();
        println!("   Synonyms: {}", synonyms.join(", "));
    }
}

const fn plural(guesses: usize) -> &'static str {
    if guesses == 1 { "guess" } else { "guesses" }
}
