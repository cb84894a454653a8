//! Interactive terminal game
//!
//! Text-based game loop on top of [`GameEngine`]. Input is read line by line
//! so the loop can be driven by any reader.

use crate::game::{
    GameEngine, GuessOutcome, Player, Session, SessionStatus, StartOptions, TriviaResolution,
};
use crate::output::display::{
    print_banner, print_board, print_ended, print_game_start, print_guess, print_hint,
    print_trivia, print_trivia_verdict, print_win,
};
use crate::trivia::TriviaQuestion;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// How a single game finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Won { guesses: usize },
    /// Ended with `/end`; the word was revealed
    Revealed { word: String },
    /// Left with `/quit`; the game stays open
    Quit,
    /// Input closed
    Closed,
}

enum Command {
    Hint,
    Guesses,
    End,
    Quit,
    Unknown,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        let name = input.strip_prefix('/')?;
        Some(match name.trim().to_ascii_lowercase().as_str() {
            "hint" | "h" => Self::Hint,
            "guesses" | "g" => Self::Guesses,
            "end" | "reveal" => Self::End,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown,
        })
    }
}

/// Run the interactive game on stdin until the player leaves
///
/// # Errors
///
/// Returns an error on I/O failure or when a collaborator of the engine
/// fails.
pub async fn run_play(engine: &GameEngine, player: &Player, options: StartOptions) -> Result<()> {
    print_banner();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        match play_game(engine, player, options, &mut input).await? {
            GameEnd::Quit | GameEnd::Closed => break,
            GameEnd::Won { .. } | GameEnd::Revealed { .. } => {}
        }

        let again = prompt(&mut input, "Play again? (yes/no)")?;
        if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Play one game, resuming the player's open game if there is one
///
/// # Errors
///
/// Returns an error on I/O failure or when a collaborator of the engine
/// fails. Mistakes of the player are reported and the game goes on.
pub async fn play_game<R: BufRead>(
    engine: &GameEngine,
    player: &Player,
    options: StartOptions,
    input: &mut R,
) -> Result<GameEnd> {
    let owner = player.username.as_str();
    let (session, mut pending) = open_game(engine, owner, options).await?;

    loop {
        if let Some(question) = pending.take() {
            let Some(next) = ask_trivia(engine, owner, &question, input).await? else {
                return Ok(GameEnd::Closed);
            };
            pending = next;
            continue;
        }

        let Some(line) = prompt(input, "Guess")? else {
            return Ok(GameEnd::Closed);
        };
        if line.is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(&line) {
            match command {
                Command::Hint => print_hint(&engine.hint(owner).await?),
                Command::Guesses => {
                    print_board(&player.display_name, &engine.guesses(owner).await?);
                }
                Command::End => {
                    let ended = engine.end(owner).await?;
                    print_ended(&ended);
                    return Ok(GameEnd::Revealed { word: ended.word });
                }
                Command::Quit => return Ok(GameEnd::Quit),
                Command::Unknown => println!("Unknown command. Try /hint, /guesses, /end or /quit."),
            }
            continue;
        }

        if !engine.check_valid_word(&line).await? {
            println!("❌ '{line}' is not a valid word.");
            continue;
        }

        match engine.submit_guess(owner, &line).await {
            Ok(GuessOutcome::Won { guess, guesses }) => {
                print_guess(&guess);
                print_win(&session.word, guesses);
                return Ok(GameEnd::Won { guesses });
            }
            Ok(GuessOutcome::Continue { guess, trivia }) => {
                print_guess(&guess);
                pending = Some(trivia);
            }
            Err(e) if e.is_user_error() => println!("❌ {e}"),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Start a game, or pick up the owner's open one
async fn open_game(
    engine: &GameEngine,
    owner: &str,
    options: StartOptions,
) -> Result<(Session, Option<TriviaQuestion>)> {
    let Some(session) = engine.current(owner).await? else {
        let session = engine.start(owner, options).await?;
        print_game_start(&session, false);
        return Ok((session, None));
    };

    print_game_start(&session, true);
    if session.status != SessionStatus::PendingTrivia {
        return Ok((session, None));
    }

    // The question of the interrupted game is not stored; ask a new one
    match engine.resolve_trivia(owner, false).await? {
        TriviaResolution::StillPending { trivia } => Ok((session, Some(trivia))),
        TriviaResolution::Resumed => Ok((session, None)),
    }
}

/// Ask one trivia question
///
/// Returns `None` when input closes, otherwise the next question to ask
/// (after a wrong answer) or no question (guessing resumes).
async fn ask_trivia<R: BufRead>(
    engine: &GameEngine,
    owner: &str,
    question: &TriviaQuestion,
    input: &mut R,
) -> Result<Option<Option<TriviaQuestion>>> {
    let choices = question.choices(&mut rand::rng());
    print_trivia(question, &choices);

    let Some(answer) = prompt(input, "Answer")? else {
        return Ok(None);
    };
    let correct = question.is_correct(resolve_choice(&answer, &choices));
    print_trivia_verdict(correct, question);

    match engine.resolve_trivia(owner, correct).await? {
        TriviaResolution::Resumed => Ok(Some(None)),
        TriviaResolution::StillPending { trivia } => Ok(Some(Some(trivia))),
    }
}

/// Map a choice letter to its answer; anything else is taken as typed
fn resolve_choice<'a>(answer: &'a str, choices: &[&'a str]) -> &'a str {
    let mut chars = answer.trim().chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            let index = usize::from(letter as u8 - b'A');
            if let Some(choice) = choices.get(index) {
                return choice;
            }
        }
    }
    answer
}

/// Read one trimmed line; `None` when input is closed
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
