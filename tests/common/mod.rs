//! Helpers shared by the integration tests

use chess_notation::game_repr::Position;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const PLAYOUT_STARTS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r1n1k2r/pP1pqpb1/b3pnp1/2pPN3/1p2P3/2N2Q1p/PP1BBPPP/R3K2R w KQkq c6 0 2",
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Positions visited by random games from each of `PLAYOUT_STARTS`.
/// The same seed always yields the same positions.
pub fn playout_positions(seed: u64, max_plies: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut visited = Vec::new();

    for fen in PLAYOUT_STARTS {
        let mut pos = Position::from_fen(fen).expect("valid FEN");
        for _ in 0..max_plies {
            let moves = pos.legal_moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            let next = pos.apply(mv);
            visited.push(pos);
            pos = next;
        }
    }
    visited
}
