use crate::game_repr::bitboards::tables::KING_ATTACKS;
use crate::game_repr::{CastleSide, Move, MoveList, Piece, PieceKind, Position, Square};

impl Position {
    pub(crate) fn king_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let targets = KING_ATTACKS[idx] & !self.friendly_of(idx);
        self.push_targets(idx, targets, moves);

        let (Some(king), Some(source)) = (self.board[idx], Square::from_index(idx)) else {
            return;
        };
        let color = king.color;
        let rank = color.back_rank();

        // Castling needs the king on its starting square and not in check
        if source != Square::new(4, rank) {
            return;
        }
        if !self.castling.has(color, CastleSide::King) && !self.castling.has(color, CastleSide::Queen) {
            return;
        }
        if self.king_in_check(color) {
            return;
        }

        for side in [CastleSide::King, CastleSide::Queen] {
            if !self.castling.has(color, side) {
                continue;
            }

            let (king_to, rook_from, _) = side.files();
            if self.board[Square::new(rook_from, rank).index()] != Some(Piece::new(color, PieceKind::Rook)) {
                continue;
            }

            // Squares between king and rook must be empty
            let between = if rook_from > 4 { 5..rook_from } else { rook_from + 1..4 };
            if between.into_iter().any(|file| self.board[Square::new(file, rank).index()].is_some()) {
                continue;
            }

            // King must not pass through or land on an attacked square
            let path = if king_to > 4 { [5, 6] } else { [3, 2] };
            if path
                .iter()
                .any(|&file| self.is_square_attacked(Square::new(file, rank).index(), color.opposite()))
            {
                continue;
            }

            moves.push(Move::new(source, Square::new(king_to, rank)).with_tag(side.tag()));
        }
    }
}
