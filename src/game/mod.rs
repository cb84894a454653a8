//! Game sessions and the engine that drives them

mod engine;
mod error;
mod player;
mod session;

pub use engine::{GameEngine, GuessOutcome, Hint, StartOptions, TriviaResolution};
pub use error::GameError;
pub use player::{NewPlayer, Player, PlayerId};
pub use session::{
    Difficulty, Guess, GuessId, NewSession, Session, SessionId, SessionStatus,
};
