mod fen;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use fen::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
