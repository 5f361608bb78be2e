//! Boundary layer: validated requests, completed-game records and game generation

pub mod constants;
mod completed;
mod errors;
mod play;
mod random;
mod request;

pub use completed::CompletedGame;
pub use errors::GameError;
pub use play::{play, play_batch};
pub use random::{generate_game, generate_random_game};
pub use request::GameRequest;
