use super::algebraic::{castle_side, moving_piece, note_capture_marker, push_castle, push_check, push_tail, strip_suffixes};
use super::matching::{resolve, MoveQuery};
use super::{Notation, NotationError};
use crate::game_repr::{Move, MoveTag, PieceKind, Position, Square};

/// Long algebraic notation: the full source square is always written,
/// `Ng1f3`, `e4xd5`, `b7b8=Q+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LongAlgebraicNotation;

impl LongAlgebraicNotation {
    fn parse(text: &str) -> Result<(MoveQuery, bool), NotationError> {
        let stripped = strip_suffixes(text)?;
        if let Some(side) = stripped.castle {
            return Ok((MoveQuery::castle(side), false));
        }

        let body = stripped.body;
        let (piece, squares) = match body.chars().next() {
            Some(letter) if letter.is_ascii_uppercase() => (
                PieceKind::from_san_letter(letter).ok_or_else(|| NotationError::syntax(text))?,
                &body[1..],
            ),
            _ => (PieceKind::Pawn, body),
        };

        let (source, capture, destination) = match squares.len() {
            4 => (&squares[..2], false, &squares[2..]),
            5 if &squares[2..3] == "x" => (&squares[..2], true, &squares[3..]),
            _ => return Err(NotationError::syntax(text)),
        };
        let source = Square::parse(source).ok_or_else(|| NotationError::syntax(text))?;
        let destination = Square::parse(destination).ok_or_else(|| NotationError::syntax(text))?;

        let query = MoveQuery {
            piece: Some(piece),
            source: Some(source),
            destination: Some(destination),
            promotion: stripped.promotion,
            ..MoveQuery::default()
        };
        Ok((query, capture))
    }
}

impl Notation for LongAlgebraicNotation {
    fn encode(&self, position: &Position, mv: &Move) -> Result<String, NotationError> {
        let piece = moving_piece(position, mv)?;
        let mut out = String::with_capacity(10);

        if let Some(side) = castle_side(piece, mv) {
            push_castle(&mut out, side);
            push_check(&mut out, mv);
            return Ok(out);
        }

        if let Some(letter) = piece.kind.san_letter() {
            out.push(letter);
        }
        out.push_str(&mv.source().to_string());
        if mv.has_tag(MoveTag::Capture) {
            out.push('x');
        }
        push_tail(&mut out, mv);
        Ok(out)
    }

    fn decode(&self, position: Option<&Position>, text: &str) -> Result<Move, NotationError> {
        let (query, capture) = Self::parse(text)?;
        let mv = resolve(position, &query, text)?;
        if query.castle.is_none() {
            note_capture_marker(text, capture, &mv);
        }
        Ok(mv)
    }
}
