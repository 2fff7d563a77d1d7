use crate::game_repr::bitboards::{pop_lsb, tables::PAWN_ATTACKS};
use crate::game_repr::{Color, Move, MoveList, MoveTag, Piece, PieceKind, Position, Square};

impl Position {
    pub(crate) fn pawn_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let (Some(pawn), Some(source)) = (self.board[idx], Square::from_index(idx)) else {
            return;
        };
        let color = pawn.color;
        let forward: i8 = match color {
            Color::White => 1,
            Color::Black => -1,
        };

        // Pushes
        let one_rank = source.rank() as i8 + forward;
        if (0..8).contains(&one_rank) {
            let one = Square::new(source.file(), one_rank as u8);
            if self.board[one.index()].is_none() {
                push_pawn_move(color, Move::new(source, one), moves);

                if source.rank() == color.pawn_rank() {
                    let two = Square::new(source.file(), (one_rank + forward) as u8);
                    if self.board[two.index()].is_none() {
                        moves.push(Move::new(source, two));
                    }
                }
            }
        }

        // Captures
        let attacks = PAWN_ATTACKS[color.index()][idx];
        let mut targets = attacks & self.bitboards.occupied_by_color(color.opposite());
        while targets != 0 {
            if let Some(destination) = Square::from_index(pop_lsb(&mut targets)) {
                push_pawn_move(color, Move::new(source, destination).with_tag(MoveTag::Capture), moves);
            }
        }

        // En passant: the pawn that just double-pushed stands beside us
        if let Some(ep) = self.en_passant {
            let victim = Square::new(ep.file(), source.rank());
            if attacks & ep.bit() != 0
                && self.board[ep.index()].is_none()
                && self.board[victim.index()] == Some(Piece::new(color.opposite(), PieceKind::Pawn))
            {
                moves.push(Move::new(source, ep).with_tags(MoveTag::Capture | MoveTag::EnPassant));
            }
        }
    }
}

/// Expands a move onto the last rank into one move per promotion piece
fn push_pawn_move(color: Color, mv: Move, moves: &mut MoveList) {
    if mv.destination().rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(mv.clone().with_promotion(kind));
        }
    } else {
        moves.push(mv);
    }
}
