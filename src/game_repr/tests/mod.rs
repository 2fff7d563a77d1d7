use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn sq(label: &str) -> Square {
    Square::parse(label).expect("valid square label")
}

pub fn fen(fen_str: &str) -> Position {
    Position::from_fen(fen_str).expect("valid FEN")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    find_move(moves, from, to).is_some()
}

pub fn find_move<'a>(moves: &'a [Move], from: &str, to: &str) -> Option<&'a Move> {
    moves
        .iter()
        .find(|m| m.source() == sq(from) && m.destination() == sq(to))
}

/// Plays the legal move `from`-`to`, promoting to a queen where needed
pub fn play(pos: &Position, from: &str, to: &str) -> Position {
    let moves = pos.legal_moves();
    let mv = moves
        .iter()
        .find(|m| {
            m.source() == sq(from)
                && m.destination() == sq(to)
                && m.promotion().map_or(true, |k| k == PieceKind::Queen)
        })
        .unwrap_or_else(|| panic!("{from}{to} is not legal in\n{}", pos.draw()));
    pos.apply(mv)
}

// ==================== TEST MODULES ====================

mod perft;
