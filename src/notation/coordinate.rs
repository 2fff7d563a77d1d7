use super::matching::{resolve, MoveQuery};
use super::{Notation, NotationError};
use crate::game_repr::{Move, PieceKind, Position, Square};

/// Source and destination labels plus an optional lower-case promotion
/// letter: `e2e4`, `a7a8q`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoordinateNotation;

impl CoordinateNotation {
    /// Writes the move without looking at any position. Illegal moves still
    /// transcribe.
    pub fn transcribe(mv: &Move) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&mv.source().to_string());
        out.push_str(&mv.destination().to_string());
        if let Some(letter) = mv.promotion().and_then(PieceKind::san_letter) {
            out.push(letter.to_ascii_lowercase());
        }
        out
    }

    fn parse(text: &str) -> Result<MoveQuery, NotationError> {
        let bytes = text.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(NotationError::syntax(text));
        }

        let square = |file: u8, rank: u8| {
            let file = Square::file_from_char(file as char)?;
            let rank = Square::rank_from_char(rank as char)?;
            Some(Square::new(file, rank))
        };
        let source = square(bytes[0], bytes[1]).ok_or_else(|| NotationError::syntax(text))?;
        let destination = square(bytes[2], bytes[3]).ok_or_else(|| NotationError::syntax(text))?;

        let promotion = match bytes.get(4) {
            None => None,
            Some(&letter) => {
                let letter = letter as char;
                let kind = PieceKind::from_promotion_letter(letter.to_ascii_uppercase())
                    .filter(|_| letter.is_ascii_lowercase())
                    .ok_or(NotationError::InvalidPromotionPiece(letter))?;
                Some(kind)
            }
        };

        Ok(MoveQuery {
            source: Some(source),
            destination: Some(destination),
            promotion,
            ..MoveQuery::default()
        })
    }
}

impl Notation for CoordinateNotation {
    fn encode(&self, _position: &Position, mv: &Move) -> Result<String, NotationError> {
        Ok(Self::transcribe(mv))
    }

    fn decode(&self, position: Option<&Position>, text: &str) -> Result<Move, NotationError> {
        let query = Self::parse(text)?;
        resolve(position, &query, text)
    }
}
