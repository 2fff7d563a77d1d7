use thiserror::Error;

use super::{CastleSide, CastlingRights, Color, Piece, Position, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is empty")]
    MissingPlacement,
    #[error("expected 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("rank {0} does not describe exactly 8 squares")]
    BadRankLength(u8),
    #[error("unknown piece character {0:?}")]
    UnknownPiece(char),
    #[error("invalid side to move {0:?}")]
    BadSide(String),
    #[error("invalid castling field {0:?}")]
    BadCastling(String),
    #[error("invalid en passant square {0:?}")]
    BadEnPassant(String),
    #[error("invalid move counter {0:?}")]
    BadCounter(String),
}

impl Position {
    /// Parses a FEN record. Fields after the piece placement are optional and
    /// default to `w - - 0 1`.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let mut fields = fen_str.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingPlacement)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as u8 - b'0',
                    _ => {
                        let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece(c))?;
                        if file >= 8 {
                            return Err(FenError::BadRankLength(rank + 1));
                        }
                        board[Square::new(file, rank).index()] = Some(piece);
                        file += 1;
                    }
                }
                if file > 8 {
                    return Err(FenError::BadRankLength(rank + 1));
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength(rank + 1));
            }
        }

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::BadSide(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        match fields.next() {
            None | Some("-") => {}
            Some(field) => {
                for c in field.chars() {
                    let (color, side) = match c {
                        'K' => (Color::White, CastleSide::King),
                        'Q' => (Color::White, CastleSide::Queen),
                        'k' => (Color::Black, CastleSide::King),
                        'q' => (Color::Black, CastleSide::Queen),
                        _ => return Err(FenError::BadCastling(field.to_string())),
                    };
                    castling.set(color, side, true);
                }
            }
        }

        let en_passant = match fields.next() {
            None | Some("-") => None,
            Some(field) => Some(
                Square::parse(field)
                    .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                    .ok_or_else(|| FenError::BadEnPassant(field.to_string()))?,
            ),
        };

        let halfmove_clock = parse_counter(fields.next(), 0)?;
        let fullmove_number = parse_counter(fields.next(), 1)?;

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement (starting from rank 8 down to rank 1)
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::new(file, rank)) {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling.is_empty() {
            fen.push('-');
        } else {
            for (c, color, side) in [
                ('K', Color::White, CastleSide::King),
                ('Q', Color::White, CastleSide::Queen),
                ('k', Color::Black, CastleSide::King),
                ('q', Color::Black, CastleSide::Queen),
            ] {
                if self.castling.has(color, side) {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::BadCounter(text.to_string())),
    }
}
