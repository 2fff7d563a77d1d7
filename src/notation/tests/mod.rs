use super::*;
use crate::game_repr::{MoveTag, MoveTags, PieceKind, Square};

// ==================== HELPER FUNCTIONS ====================

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sq(label: &str) -> Square {
    Square::parse(label).expect("valid square label")
}

pub fn fen(fen_str: &str) -> Position {
    Position::from_fen(fen_str).expect("valid FEN")
}

/// The legal move `from`-`to` of `pos`, tags included
pub fn legal(pos: &Position, from: &str, to: &str) -> Move {
    pos.legal_moves()
        .into_iter()
        .find(|m| m.source() == sq(from) && m.destination() == sq(to) && m.promotion().is_none())
        .unwrap_or_else(|| panic!("{from}{to} is not legal in\n{}", pos.draw()))
}

pub fn legal_promotion(pos: &Position, from: &str, to: &str, kind: PieceKind) -> Move {
    pos.legal_moves()
        .into_iter()
        .find(|m| m.source() == sq(from) && m.destination() == sq(to) && m.promotion() == Some(kind))
        .unwrap_or_else(|| panic!("{from}{to}={kind:?} is not legal in\n{}", pos.draw()))
}

pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const COMPLEX: &str = "r1n1k2r/pP1pqpb1/b3pnp1/2pPN3/1p2P3/2N2Q1p/PP1BBPPP/R3K2R w KQkq c6 0 2";
pub const PROMOTION: &str = "8/1P2k3/8/8/8/8/8/8 w - - 0 1";
pub const CASTLE_CHECK: &str = "r4b1r/ppp3pp/8/4p3/2Pq4/3P1Q2/PP3PPP/1k2K2R w K - 2 19";
pub const EN_PASSANT: &str = "rnbqkbnr/ppp2ppp/4p3/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
/// Black knights on b8 and f6 both reach d7
pub const TWO_KNIGHTS: &str = "rn1qkb1r/pp3ppp/2p1pn2/3p4/2PP4/2NQPN2/PP3PPP/R1B1K2R b KQkq - 0 7";

// ==================== TEST MODULES ====================

mod coordinate;
