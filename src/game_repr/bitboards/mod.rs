use super::{Color, Piece, PieceKind};

pub mod tables;
pub use tables::*;

/// Bitboard representation using 12 u64 values (6 piece kinds × 2 colors)
/// Each bit represents presence/absence of a piece on that square (0-63)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitboards {
    /// 12 piece-specific bitboards indexed by [color * 6 + kind]
    /// White: 0=Pawn, 1=Knight, 2=Bishop, 3=Rook, 4=Queen, 5=King
    /// Black: 6=Pawn, 7=Knight, 8=Bishop, 9=Rook, 10=Queen, 11=King
    pieces: [u64; 12],
}

impl Bitboards {
    pub fn empty() -> Self {
        Self { pieces: [0; 12] }
    }

    /// Convert from 64-element mailbox to bitboards
    pub fn from_array(board: &[Option<Piece>; 64]) -> Self {
        let mut bitboards = Self::empty();
        for (idx, piece) in board.iter().enumerate() {
            if let Some(piece) = piece {
                bitboards.add_piece(piece.color, piece.kind, idx);
            }
        }
        bitboards
    }

    /// Get bitboard for a specific piece kind and color
    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[piece_index(color, kind)]
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        let base = color.index() * 6;
        self.pieces[base..base + 6].iter().fold(0, |acc, bb| acc | bb)
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White) | self.occupied_by_color(Color::Black)
    }

    pub fn remove_piece(&mut self, color: Color, kind: PieceKind, square: usize) {
        self.pieces[piece_index(color, kind)] &= !(1u64 << square);
    }

    pub fn add_piece(&mut self, color: Color, kind: PieceKind, square: usize) {
        self.pieces[piece_index(color, kind)] |= 1u64 << square;
    }
}

#[inline(always)]
fn piece_index(color: Color, kind: PieceKind) -> usize {
    color.index() * 6 + kind.index()
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}

/// Find the index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

/// Find the index of the most significant bit
#[inline(always)]
pub fn bitscan_reverse(bb: u64) -> usize {
    63 - bb.leading_zeros() as usize
}

/// Squares reached along each direction up to and including the first blocker
pub fn sliding_attacks(square: usize, occupied: u64, directions: &[usize]) -> u64 {
    let mut attacks = 0u64;
    for &direction in directions {
        let mut ray = RAYS[direction][square];
        let blockers = ray & occupied;
        if blockers != 0 {
            let blocker_sq = if is_positive(direction) {
                bitscan_forward(blockers)
            } else {
                bitscan_reverse(blockers)
            };
            // Mask out squares beyond the blocker
            ray &= !RAYS[direction][blocker_sq];
        }
        attacks |= ray;
    }
    attacks
}
