mod pawn;
mod knight;
mod bishop;
mod rook;
mod queen;
mod king;

use super::bitboards::pop_lsb;
use super::{Move, MoveList, MoveTag, PieceKind, Position, Square};

impl Position {
    /// Generate pseudo-legal moves of the piece on `idx` into the buffer.
    /// The buffer is NOT cleared before adding moves.
    pub(crate) fn pseudo_moves_into(&self, idx: usize, kind: PieceKind, moves: &mut MoveList) {
        match kind {
            PieceKind::Pawn   => self.pawn_moves_into(idx, moves),
            PieceKind::Knight => self.knight_moves_into(idx, moves),
            PieceKind::Bishop => self.bishop_moves_into(idx, moves),
            PieceKind::Rook   => self.rook_moves_into(idx, moves),
            PieceKind::Queen  => self.queen_moves_into(idx, moves),
            PieceKind::King   => self.king_moves_into(idx, moves),
        }
    }

    /// Friendly pieces of the piece standing on `idx`
    fn friendly_of(&self, idx: usize) -> u64 {
        match self.board[idx] {
            Some(piece) => self.bitboards.occupied_by_color(piece.color),
            None => 0,
        }
    }

    /// One move per set bit of `targets`, tagged as a capture when the target is occupied
    fn push_targets(&self, idx: usize, mut targets: u64, moves: &mut MoveList) {
        let Some(source) = Square::from_index(idx) else {
            return;
        };
        while targets != 0 {
            let target_sq = pop_lsb(&mut targets);
            let Some(destination) = Square::from_index(target_sq) else {
                continue;
            };
            let mut mv = Move::new(source, destination);
            if self.board[target_sq].is_some() {
                mv.add_tag(MoveTag::Capture);
            }
            moves.push(mv);
        }
    }
}
