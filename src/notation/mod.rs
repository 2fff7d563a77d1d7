//! Move notation codecs
//!
//! Each codec turns a [`Move`] of a given [`Position`] into text and back.
//! Decoding never trusts markers written in the text: the token is matched
//! against the position's legal moves and the generator's move is returned.

use std::fmt;
use std::str::FromStr;

use crate::game_repr::{Move, Position};

mod algebraic;
mod coordinate;
mod error;
mod long_algebraic;
pub mod matching;

pub use algebraic::AlgebraicNotation;
pub use coordinate::CoordinateNotation;
pub use error::{NotationError, UnknownNotationKind};
pub use long_algebraic::LongAlgebraicNotation;
pub use matching::MoveQuery;

#[cfg(test)]
mod tests;

/// Encoder/decoder pair for one textual move format.
///
/// Implementations hold no state; one instance may serve any number of
/// threads.
pub trait Notation: Send + Sync {
    /// Renders `mv`, which should be one of `position`'s legal moves.
    fn encode(&self, position: &Position, mv: &Move) -> Result<String, NotationError>;

    /// Resolves `text` against the legal moves of `position`.
    ///
    /// Syntax is checked first, so malformed text fails the same way with or
    /// without a position.
    fn decode(&self, position: Option<&Position>, text: &str) -> Result<Move, NotationError>;
}

/// Enumeration of the available notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotationKind {
    /// `e2e4`, `a7a8q`
    #[default]
    Coordinate,
    /// `Nf3`, `exd5`, `O-O`
    Algebraic,
    /// `Ng1f3`, `e4xd5`
    LongAlgebraic,
}

impl NotationKind {
    pub fn all() -> &'static [NotationKind] {
        &[
            NotationKind::Coordinate,
            NotationKind::Algebraic,
            NotationKind::LongAlgebraic,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotationKind::Coordinate => "Coordinate",
            NotationKind::Algebraic => "Algebraic",
            NotationKind::LongAlgebraic => "Long algebraic",
        }
    }

    /// Shared codec for this notation
    pub fn notation(&self) -> &'static dyn Notation {
        match self {
            NotationKind::Coordinate => &CoordinateNotation,
            NotationKind::Algebraic => &AlgebraicNotation,
            NotationKind::LongAlgebraic => &LongAlgebraicNotation,
        }
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NotationKind {
    type Err = UnknownNotationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uci" | "coordinate" => Ok(NotationKind::Coordinate),
            "san" | "algebraic" => Ok(NotationKind::Algebraic),
            "lan" | "long-algebraic" => Ok(NotationKind::LongAlgebraic),
            _ => Err(UnknownNotationKind(s.to_string())),
        }
    }
}
