mod board;
pub use board::Board;

mod player;
pub use player::PlayerCount;

pub mod position;
pub use position::Square;

mod error;
pub use error::GameError;

mod moves;
pub use moves::MovableTokens;

mod dice;
pub use dice::Die;
