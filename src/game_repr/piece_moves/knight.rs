use crate::game_repr::bitboards::tables::KNIGHT_ATTACKS;
use crate::game_repr::{MoveList, Position};

impl Position {
    pub(crate) fn knight_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let targets = KNIGHT_ATTACKS[idx] & !self.friendly_of(idx);
        self.push_targets(idx, targets, moves);
    }
}
