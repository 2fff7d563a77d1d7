use crate::game_repr::bitboards::{sliding_attacks, tables::DIAGONAL};
use crate::game_repr::{MoveList, Position};

impl Position {
    pub(crate) fn bishop_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let occupied = self.bitboards.all_occupied();
        let targets = sliding_attacks(idx, occupied, &DIAGONAL) & !self.friendly_of(idx);
        self.push_targets(idx, targets, moves);
    }
}
