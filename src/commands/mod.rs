//! Command implementations

pub mod check;
pub mod generate;
pub mod play;
pub mod score;

pub use check::{CheckResult, check_word};
pub use generate::{GenerateResult, generate_word};
pub use play::{GameEnd, play_game, run_play};
pub use score::{ScoreResult, score_guess};
