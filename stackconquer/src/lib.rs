pub use board::*;
pub use errors::*;
pub use moves::*;
pub use player::*;
pub use player_state::*;
pub use protocol::*;
pub use rules::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod moves;
mod player;
mod player_state;
mod protocol;
mod rules;
mod turn;
mod visualization;
