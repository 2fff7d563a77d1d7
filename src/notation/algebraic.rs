use smallvec::SmallVec;

use super::matching::{resolve, MoveQuery};
use super::{Notation, NotationError};
use crate::game_repr::{CastleSide, Move, MoveList, MoveTag, Piece, PieceKind, Position, Square};

/// Standard algebraic notation: `Nf3`, `exd5`, `R1e2`, `b8=Q+`, `O-O-O`.
///
/// Encoding adds the least source information that keeps the move unique
/// among the position's legal moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlgebraicNotation;

/// Token with its check suffix and promotion suffix removed
pub(super) struct Stripped<'a> {
    pub body: &'a str,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
}

/// Splits off the `+`/`#` and `=X` suffixes shared by SAN and LAN and
/// recognises the two castle tokens.
pub(super) fn strip_suffixes(text: &str) -> Result<Stripped<'_>, NotationError> {
    if !text.is_ascii() {
        return Err(NotationError::syntax(text));
    }
    let body = text
        .strip_suffix('+')
        .or_else(|| text.strip_suffix('#'))
        .unwrap_or(text);

    if body.starts_with('O') {
        let side = match body {
            "O-O" => CastleSide::King,
            "O-O-O" => CastleSide::Queen,
            _ => return Err(NotationError::syntax(text)),
        };
        return Ok(Stripped {
            body,
            promotion: None,
            castle: Some(side),
        });
    }

    let (body, promotion) = match body.split_once('=') {
        None => (body, None),
        Some((body, suffix)) => {
            let mut letters = suffix.chars();
            let (Some(letter), None) = (letters.next(), letters.next()) else {
                return Err(NotationError::syntax(text));
            };
            let kind = PieceKind::from_promotion_letter(letter)
                .ok_or(NotationError::InvalidPromotionPiece(letter))?;
            (body, Some(kind))
        }
    };

    Ok(Stripped {
        body,
        promotion,
        castle: None,
    })
}

/// The piece of the side to move standing on the move's source square.
/// Promotions are only accepted for pawns reaching the last rank.
pub(super) fn moving_piece(position: &Position, mv: &Move) -> Result<Piece, NotationError> {
    let piece = position
        .piece_at(mv.source())
        .filter(|p| p.is(position.side_to_move()))
        .ok_or_else(|| {
            NotationError::inconsistent(mv, format!("no piece of the side to move on {}", mv.source()))
        })?;

    if let Some(kind) = mv.promotion() {
        if piece.kind != PieceKind::Pawn {
            return Err(NotationError::inconsistent(mv, "only pawns promote"));
        }
        if !kind.is_promotion_target() {
            return Err(NotationError::inconsistent(mv, format!("cannot promote to {kind:?}")));
        }
        if mv.destination().rank() != piece.color.promotion_rank() {
            return Err(NotationError::inconsistent(mv, "promotion away from the last rank"));
        }
    }
    Ok(piece)
}

/// Castle side of a move, from its tags or from a two-file king step
pub(super) fn castle_side(piece: Piece, mv: &Move) -> Option<CastleSide> {
    if mv.has_tag(MoveTag::KingSideCastle) {
        return Some(CastleSide::King);
    }
    if mv.has_tag(MoveTag::QueenSideCastle) {
        return Some(CastleSide::Queen);
    }
    if piece.kind != PieceKind::King || mv.source().file().abs_diff(mv.destination().file()) != 2 {
        return None;
    }
    if mv.destination().file() > mv.source().file() {
        Some(CastleSide::King)
    } else {
        Some(CastleSide::Queen)
    }
}

pub(super) fn push_castle(out: &mut String, side: CastleSide) {
    out.push_str(match side {
        CastleSide::King => "O-O",
        CastleSide::Queen => "O-O-O",
    });
}

/// Destination, promotion suffix and check suffix, in that order
pub(super) fn push_tail(out: &mut String, mv: &Move) {
    out.push_str(&mv.destination().to_string());
    if let Some(letter) = mv.promotion().and_then(PieceKind::san_letter) {
        out.push('=');
        out.push(letter);
    }
    push_check(out, mv);
}

pub(super) fn push_check(out: &mut String, mv: &Move) {
    if mv.has_tag(MoveTag::Checkmate) {
        out.push('#');
    } else if mv.has_tag(MoveTag::Check) {
        out.push('+');
    }
}

/// Logs when the text's capture marker disagrees with the resolved move.
/// The marker does not take part in matching.
pub(super) fn note_capture_marker(text: &str, marked: bool, mv: &Move) {
    if marked != mv.has_tag(MoveTag::Capture) {
        log::debug!(
            "{text:?}: capture marker {} but {mv} {} a capture",
            if marked { "present" } else { "absent" },
            if mv.has_tag(MoveTag::Capture) { "is" } else { "is not" },
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Disambiguation {
    file: bool,
    rank: bool,
}

impl AlgebraicNotation {
    /// Minimal source hint separating `mv` from same-kind rivals reaching the
    /// same destination.
    fn disambiguation(position: &Position, mv: &Move, kind: PieceKind) -> Disambiguation {
        let mut legal = MoveList::new();
        position.legal_moves_untagged_into(&mut legal);

        let rivals: SmallVec<[Square; 4]> = legal
            .iter()
            .filter(|other| other.destination() == mv.destination() && other.source() != mv.source())
            .map(|other| other.source())
            .filter(|&source| position.piece_at(source).is_some_and(|p| p.kind == kind))
            .collect();

        if rivals.is_empty() {
            return Disambiguation { file: false, rank: false };
        }
        let shares_file = rivals.iter().any(|sq| sq.file() == mv.source().file());
        let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.source().rank());
        match (shares_file, shares_rank) {
            (false, _) => Disambiguation { file: true, rank: false },
            (true, false) => Disambiguation { file: false, rank: true },
            (true, true) => Disambiguation { file: true, rank: true },
        }
    }

    fn parse(text: &str) -> Result<(MoveQuery, bool), NotationError> {
        let stripped = strip_suffixes(text)?;
        if let Some(side) = stripped.castle {
            return Ok((MoveQuery::castle(side), false));
        }

        let body = stripped.body;
        if body.len() < 2 {
            return Err(NotationError::syntax(text));
        }
        let (prefix, destination) = body.split_at(body.len() - 2);
        let destination = Square::parse(destination).ok_or_else(|| NotationError::syntax(text))?;

        let (prefix, capture) = match prefix.strip_suffix('x') {
            Some(prefix) => (prefix, true),
            None => (prefix, false),
        };

        let mut query = MoveQuery {
            destination: Some(destination),
            promotion: stripped.promotion,
            ..MoveQuery::default()
        };

        let mut chars = prefix.chars();
        match chars.next() {
            Some(letter) if letter.is_ascii_uppercase() => {
                query.piece =
                    Some(PieceKind::from_san_letter(letter).ok_or_else(|| NotationError::syntax(text))?);
                let hints = chars.as_str();
                let mut hint_chars = hints.chars().peekable();
                if let Some(file) = hint_chars.peek().and_then(|&c| Square::file_from_char(c)) {
                    query.source_file = Some(file);
                    hint_chars.next();
                }
                if let Some(rank) = hint_chars.peek().and_then(|&c| Square::rank_from_char(c)) {
                    query.source_rank = Some(rank);
                    hint_chars.next();
                }
                if hint_chars.next().is_some() {
                    return Err(NotationError::syntax(text));
                }
            }
            Some(letter) => {
                // Pawn capture: the prefix is exactly the source file
                let file = Square::file_from_char(letter).ok_or_else(|| NotationError::syntax(text))?;
                if !capture || chars.next().is_some() {
                    return Err(NotationError::syntax(text));
                }
                query.piece = Some(PieceKind::Pawn);
                query.source_file = Some(file);
            }
            None => query.piece = Some(PieceKind::Pawn),
        }

        Ok((query, capture))
    }
}

impl Notation for AlgebraicNotation {
    fn encode(&self, position: &Position, mv: &Move) -> Result<String, NotationError> {
        let piece = moving_piece(position, mv)?;
        let mut out = String::with_capacity(8);

        if let Some(side) = castle_side(piece, mv) {
            push_castle(&mut out, side);
            push_check(&mut out, mv);
            return Ok(out);
        }

        let capture = mv.has_tag(MoveTag::Capture);
        match piece.kind.san_letter() {
            None => {
                if capture {
                    out.push(mv.source().file_char());
                }
            }
            Some(letter) => {
                out.push(letter);
                let hint = Self::disambiguation(position, mv, piece.kind);
                if hint.file {
                    out.push(mv.source().file_char());
                }
                if hint.rank {
                    out.push(mv.source().rank_char());
                }
            }
        }
        if capture {
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
