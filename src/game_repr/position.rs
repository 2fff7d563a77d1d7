use std::fmt;

use super::bitboards::{bitscan_forward, pop_lsb, sliding_attacks, Bitboards};
use super::bitboards::tables::*;
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub fn tag(self) -> MoveTag {
        match self {
            CastleSide::King => MoveTag::KingSideCastle,
            CastleSide::Queen => MoveTag::QueenSideCastle,
        }
    }

    /// (king destination file, rook origin file, rook destination file)
    pub(crate) fn files(self) -> (u8, u8, u8) {
        match self {
            CastleSide::King => (6, 7, 5),
            CastleSide::Queen => (2, 0, 3),
        }
    }
}

/// Castling availability, indexed by [color * 2 + side]
/// White O-O | White O-O-O | Black O-O | Black O-O-O
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights([bool; 4]);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights([false; 4]);
    pub const ALL: CastlingRights = CastlingRights([true; 4]);

    #[inline]
    fn slot(color: Color, side: CastleSide) -> usize {
        color.index() * 2
            + match side {
                CastleSide::King => 0,
                CastleSide::Queen => 1,
            }
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.0[Self::slot(color, side)]
    }

    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        self.0[Self::slot(color, side)] = allowed;
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&r| r)
    }

    /// Revoke whatever right depends on a piece standing on `square`
    fn touch(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.rank() != color.back_rank() {
                continue;
            }
            match square.file() {
                4 => {
                    self.set(color, CastleSide::King, false);
                    self.set(color, CastleSide::Queen, false);
                }
                7 => self.set(color, CastleSide::King, false),
                0 => self.set(color, CastleSide::Queen, false),
                _ => {}
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Bitboard representation for fast move generation
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation for fast piece lookup (kept in sync with bitboards)
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// Square skipped by the last double pawn push
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    pub fn starting() -> Position {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = [None; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board[file] = Some(Piece::new(Color::White, kind));
            board[8 + file] = Some(Piece::new(Color::White, Pawn));
            board[48 + file] = Some(Piece::new(Color::Black, Pawn));
            board[56 + file] = Some(Piece::new(Color::Black, kind));
        }

        Self::from_parts(board, Color::White, CastlingRights::ALL, None, 0, 1)
    }

    pub(crate) fn from_parts(
        board: [Option<Piece>; 64],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Position {
        Position {
            bitboards: Bitboards::from_array(&board),
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    fn put(&mut self, idx: usize, piece: Piece) {
        if let Some(old) = self.board[idx] {
            self.bitboards.remove_piece(old.color, old.kind, idx);
        }
        self.bitboards.add_piece(piece.color, piece.kind, idx);
        self.board[idx] = Some(piece);
    }

    fn take(&mut self, idx: usize) -> Option<Piece> {
        let piece = self.board[idx].take()?;
        self.bitboards.remove_piece(piece.color, piece.kind, idx);
        Some(piece)
    }

    /// Returns the position reached by playing `mv`. `self` is left untouched.
    ///
    /// The move is expected to come from this position's legal moves; castling
    /// and en passant are recognised from the board, not from the move's tags.
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        let from = mv.source();
        let to = mv.destination();

        let Some(moving) = self.board[from.index()] else {
            log::warn!("apply: no piece on {} in {}", from, self.to_fen());
            return next;
        };

        let is_pawn = moving.kind == PieceKind::Pawn;
        let is_en_passant = is_pawn
            && Some(to) == self.en_passant
            && from.file() != to.file()
            && self.board[to.index()].is_none();

        let mut captured = next.take(to.index());
        if is_en_passant {
            captured = next.take(Square::new(to.file(), from.rank()).index());
        }

        next.take(from.index());
        let placed = match mv.promotion() {
            Some(kind) if is_pawn => Piece::new(moving.color, kind),
            _ => moving,
        };
        next.put(to.index(), placed);

        if moving.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            let side = if to.file() > from.file() { CastleSide::King } else { CastleSide::Queen };
            let (_, rook_from, rook_to) = side.files();
            let rank = from.rank();
            if let Some(rook) = next.take(Square::new(rook_from, rank).index()) {
                next.put(Square::new(rook_to, rank).index(), rook);
            }
        }

        next.castling.touch(from);
        next.castling.touch(to);

        next.en_passant = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::new(from.file(), (from.rank() + to.rank()) / 2))
        } else {
            None
        };

        next.halfmove_clock = if is_pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.opposite();

        next
    }

    /// Checks if a square is under attack by any piece of the given color
    pub fn is_square_attacked(&self, square: usize, by_color: Color) -> bool {
        let occupied = self.bitboards.all_occupied();
        let bb = &self.bitboards;

        // A pawn of `by_color` attacks `square` from where the opposite color's pawn would attack
        let pawn_sources = PAWN_ATTACKS[by_color.opposite().index()][square];
        if pawn_sources & bb.pieces_of_type(by_color, PieceKind::Pawn) != 0 {
            return true;
        }

        if KNIGHT_ATTACKS[square] & bb.pieces_of_type(by_color, PieceKind::Knight) != 0 {
            return true;
        }

        if KING_ATTACKS[square] & bb.pieces_of_type(by_color, PieceKind::King) != 0 {
            return true;
        }

        let queens = bb.pieces_of_type(by_color, PieceKind::Queen);
        let diagonal = bb.pieces_of_type(by_color, PieceKind::Bishop) | queens;
        if sliding_attacks(square, occupied, &DIAGONAL) & diagonal != 0 {
            return true;
        }

        let orthogonal = bb.pieces_of_type(by_color, PieceKind::Rook) | queens;
        sliding_attacks(square, occupied, &ORTHOGONAL) & orthogonal != 0
    }

    /// Checks if the king of the given color is attacked.
    /// Positions without such a king are never in check.
    pub fn king_in_check(&self, color: Color) -> bool {
        let king_bb = self.bitboards.pieces_of_type(color, PieceKind::King);
        if king_bb == 0 {
            return false;
        }
        self.is_square_attacked(bitscan_forward(king_bb), color.opposite())
    }

    /// Checks if the side to move is in check
    pub fn is_in_check(&self) -> bool {
        self.king_in_check(self.side_to_move)
    }

    /// In check AND no legal moves
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    /// NOT in check AND no legal moves
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut moves = MoveList::new();
        self.legal_moves_untagged_into(&mut moves);
        !moves.is_empty()
    }

    /// Legal moves for the side to move, without Check/Checkmate tags.
    /// The buffer is cleared before adding moves.
    pub(crate) fn legal_moves_untagged_into(&self, moves: &mut MoveList) {
        moves.clear();
        let us = self.side_to_move;

        for kind in PieceKind::ALL {
            let mut pieces_bb = self.bitboards.pieces_of_type(us, kind);
            while pieces_bb != 0 {
                let square = pop_lsb(&mut pieces_bb);
                self.pseudo_moves_into(square, kind, moves);
            }
        }

        moves.retain(|mv| !self.apply(mv).king_in_check(us));
    }

    /// All legal moves for the side to move, each carrying its full tag set
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_untagged_into(&mut moves);

        for mv in moves.iter_mut() {
            let next = self.apply(mv);
            if next.is_in_check() {
                mv.add_tag(MoveTag::Check);
                if !next.has_legal_moves() {
                    mv.add_tag(MoveTag::Checkmate);
                }
            }
        }

        moves
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.legal_moves_untagged_into(&mut moves);

        // Bulk counting at depth 1
        if depth == 1 {
            return moves.len() as u64;
        }

        moves.iter().map(|mv| self.apply(mv).perft(depth - 1)).sum()
    }

    /// Human-readable board, rank 8 at the top
    pub fn draw(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            out.push((b'1' + rank) as char);
            out.push_str(" |");
            for file in 0..8u8 {
                out.push(' ');
                out.push(self.piece_at(Square::new(file, rank)).map_or('.', |p| p.to_char()));
            }
            out.push('\n');
        }
        out.push_str("    a b c d e f g h\n");
        out
    }
}

/// FEN of the position
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}
