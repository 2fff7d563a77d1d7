use thiserror::Error;

use crate::game_repr::Move;

/// Failure of a notation codec. Decode errors carry the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid move syntax {0:?}")]
    InvalidSyntax(String),
    #[error("invalid promotion piece {0:?}")]
    InvalidPromotionPiece(char),
    #[error("a position is required to resolve the move")]
    PositionRequired,
    #[error("no legal move matches {0:?}")]
    NoLegalMove(String),
    #[error("{text:?} is ambiguous between {} legal moves", .candidates.len())]
    AmbiguousMove { text: String, candidates: Vec<Move> },
    #[error("move {mv} does not fit the position: {reason}")]
    InconsistentMove { mv: Move, reason: String },
}

impl NotationError {
    pub(crate) fn syntax(text: &str) -> NotationError {
        NotationError::InvalidSyntax(text.to_string())
    }

    pub(crate) fn inconsistent(mv: &Move, reason: impl Into<String>) -> NotationError {
        NotationError::InconsistentMove {
            mv: mv.clone(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notation {0:?}, expected one of uci, san, lan")]
pub struct UnknownNotationKind(pub String);
