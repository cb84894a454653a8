//! Trivia Wordle - CLI
//!
//! Play in the terminal, or score, check and generate words without
//! starting a game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use trivia_wordle::{
    commands::{check_word, generate_word, run_play, score_guess},
    config::{AppConfig, TriviaKind},
    game::{Difficulty, GameEngine, NewPlayer, Player, StartOptions},
    output::{print_check_result, print_generate_result, print_score_result},
    storage::{InMemoryPlayerStore, InMemorySessionStore, PlayerStore},
    trivia::{MathQuestions, QuestionBank, TriviaGate},
    wordlists::DictionaryWordSource,
};

#[derive(Parser)]
#[command(
    name = "trivia_wordle",
    about = "Wordle with near-letter hearts and a trivia question after every miss",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum character-code distance for a "close" letter
    #[arg(short, long, global = true)]
    threshold: Option<u32>,

    /// TSV dictionary to use instead of the embedded one
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Only accept dictionary words as guesses
    #[arg(long, global = true)]
    strict: bool,

    /// Trivia source: bank or math
    #[arg(long, global = true)]
    trivia: Option<TriviaKind>,

    /// Player username (default: $USER)
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Name shown on the board (default: the username)
    #[arg(long, global = true)]
    display_name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Word length, 5 to 15 (random when omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// easy, medium or hard
        #[arg(short = 'D', long, default_value = "medium")]
        difficulty: Difficulty,
    },

    /// Score a guess against a target word
    Score {
        guess: String,
        target: String,
    },

    /// Check whether a word may be guessed
    Check {
        word: String,
    },

    /// Draw a random word and show what the dictionary knows about it
    Generate {
        /// Word length, 5 to 15 (random when omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// easy, medium or hard
        #[arg(short = 'D', long, default_value = "medium")]
        difficulty: Difficulty,
    },
}

/// Merge the config file with command-line overrides
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(threshold) = cli.threshold {
        config.engine.deviation_threshold = threshold;
    }
    if let Some(dictionary) = &cli.dictionary {
        config.dictionary = Some(dictionary.clone());
    }
    if cli.strict {
        config.strict_words = true;
    }
    if let Some(trivia) = cli.trivia {
        config.trivia = trivia;
    }

    Ok(config)
}

fn word_source(config: &AppConfig) -> Result<DictionaryWordSource> {
    let source = match &config.dictionary {
        Some(path) => DictionaryWordSource::from_file(path)?,
        None => DictionaryWordSource::embedded(),
    };
    Ok(source.with_strict(config.strict_words))
}

fn trivia_gate(kind: TriviaKind) -> Arc<dyn TriviaGate> {
    match kind {
        TriviaKind::Bank => Arc::new(QuestionBank::new()),
        TriviaKind::Math => Arc::new(MathQuestions::new()),
    }
}

fn player_name(cli: &Cli) -> String {
    cli.player
        .clone()
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "local".to_string())
}

async fn register_player(cli: &Cli, players: &dyn PlayerStore) -> Result<Player> {
    let new = NewPlayer::new(&player_name(cli), cli.display_name.as_deref());
    let player = players
        .register(new)
        .await
        .context("Failed to register player")?;
    tracing::info!(player_id = %player.id, username = %player.username, "player ready");
    Ok(player)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        length: None,
        difficulty: Difficulty::Medium,
    });

    match command {
        Commands::Play { length, difficulty } => {
            let players = InMemoryPlayerStore::new();
            let player = register_player(&cli, &players).await?;
            let options = StartOptions { length, difficulty };
            run_play_command(&config, &player, options).await
        }
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target, config.engine.deviation_threshold)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Check { word } => {
            let source = word_source(&config)?;
            let result = check_word(&source, &word).await?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Generate { length, difficulty } => {
            let source = word_source(&config)?;
            let result = generate_word(&source, length, difficulty).await?;
            print_generate_result(&result);
            Ok(())
        }
    }
}

async fn run_play_command(config: &AppConfig, player: &Player, options: StartOptions) -> Result<()> {
    config.engine.validate()?;

    let engine = GameEngine::new(
        Arc::new(word_source(config)?),
        Arc::new(InMemorySessionStore::new()),
        trivia_gate(config.trivia),
        config.engine,
    );

    run_play(&engine, player, options).await
}
