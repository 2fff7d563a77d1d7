use smallvec::SmallVec;

use super::NotationError;
use crate::game_repr::{CastleSide, Move, PieceKind, Position, Square};

/// Constraints a decoded token places on the move it names.
///
/// Every `Some` field must hold for a legal move to survive. `promotion` is
/// always compared, so a query without one never matches a promotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveQuery {
    /// Kind of the piece standing on the source square
    pub piece: Option<PieceKind>,
    pub destination: Option<Square>,
    pub source: Option<Square>,
    pub source_file: Option<u8>,
    pub source_rank: Option<u8>,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
}

pub type Candidates = SmallVec<[Move; 4]>;

impl MoveQuery {
    pub fn castle(side: CastleSide) -> MoveQuery {
        MoveQuery {
            castle: Some(side),
            ..MoveQuery::default()
        }
    }

    pub fn matches(&self, position: &Position, mv: &Move) -> bool {
        if let Some(side) = self.castle {
            if !mv.has_tag(side.tag()) {
                return false;
            }
        }
        if self.destination.is_some_and(|sq| sq != mv.destination())
            || self.source.is_some_and(|sq| sq != mv.source())
            || self.source_file.is_some_and(|file| file != mv.source().file())
            || self.source_rank.is_some_and(|rank| rank != mv.source().rank())
            || self.promotion != mv.promotion()
        {
            return false;
        }
        match self.piece {
            Some(kind) => position.piece_at(mv.source()).is_some_and(|p| p.kind == kind),
            None => true,
        }
    }
}

/// Every move of `legal` consistent with `query`
pub fn candidates(position: &Position, legal: &[Move], query: &MoveQuery) -> Candidates {
    legal
        .iter()
        .filter(|mv| query.matches(position, mv))
        .cloned()
        .collect()
}

/// Resolves `query` to exactly one legal move of `position`.
///
/// The returned move is the generator's own, tags included, with the position
/// it leads to attached. `text` is only used for errors and logging.
pub fn resolve(
    position: Option<&Position>,
    query: &MoveQuery,
    text: &str,
) -> Result<Move, NotationError> {
    let position = position.ok_or(NotationError::PositionRequired)?;
    let legal = position.legal_moves();
    let found = candidates(position, &legal, query);
    log::trace!(
        "{text:?}: {query:?} matched {} of {} legal moves",
        found.len(),
        legal.len()
    );

    match found.len() {
        0 => {
            log::debug!("{text:?} is not legal in {position}");
            Err(NotationError::NoLegalMove(text.to_string()))
        }
        1 => {
            let mv = &found[0];
            Ok(mv.clone().attach_position(position.apply(mv)))
        }
        _ => {
            log::debug!("{text:?} is ambiguous in {position}: {found:?}");
            Err(NotationError::AmbiguousMove {
                text: text.to_string(),
                candidates: found.into_vec(),
            })
        }
    }
}
