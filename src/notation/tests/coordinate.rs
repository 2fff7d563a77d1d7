use super::*;

// ==================== ENCODING ====================

#[test]
fn test_encode_plain_move() {
    let mv = Move::new(sq("e2"), sq("e4"));
    assert_eq!(CoordinateNotation.encode(&fen(START), &mv).unwrap(), "e2e4");
}

#[test]
fn test_encode_promotion_letter_is_lowercase() {
    let pos = fen("8/P7/8/8/8/8/8/8 w - - 0 1");
    let mv = Move::new(sq("a7"), sq("a8")).with_promotion(PieceKind::Queen);
    assert_eq!(CoordinateNotation.encode(&pos, &mv).unwrap(), "a7a8q");

    let mv = Move::new(sq("a7"), sq("a8")).with_promotion(PieceKind::Knight);
    assert_eq!(CoordinateNotation::transcribe(&mv), "a7a8n");
}

#[test]
fn test_encode_ignores_legality() {
    let mv = Move::new(sq("e2"), sq("e5"));
    assert_eq!(CoordinateNotation.encode(&fen(START), &mv).unwrap(), "e2e5");
}

// ==================== DECODING ====================

/// (position, text, expected tags, FEN after the move)
const DECODE_CASES: &[(&str, &str, &[MoveTag], &str)] = &[
    (
        START,
        "e2e4",
        &[],
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    ),
    (
        "8/P7/8/8/8/8/8/8 w - - 0 1",
        "a7a8q",
        &[],
        "Q7/8/8/8/8/8/8/8 b - - 0 1",
    ),
    (
        "rnbqkb1r/ppp2ppp/3p1n2/4P3/4P3/2N5/PPP2PPP/R1BQKBNR b KQkq - 0 4",
        "d6e5",
        &[MoveTag::Capture],
        "rnbqkb1r/ppp2ppp/5n2/4p3/4P3/2N5/PPP2PPP/R1BQKBNR w KQkq - 0 5",
    ),
    (
        "rnbqkb1r/ppp2ppp/5n2/4p3/4P3/2N5/PPP2PPP/R1BQKBNR w KQkq - 0 5",
        "f1b5",
        &[MoveTag::Check],
        "rnbqkb1r/ppp2ppp/5n2/1B2p3/4P3/2N5/PPP2PPP/R1BQK1NR b KQkq - 1 5",
    ),
    (
        "rnbqkb1r/ppp2ppp/5n2/4p3/4P3/2N5/PPP2PPP/R1BQKBNR w KQkq - 0 5",
        "d1d8",
        &[MoveTag::Check, MoveTag::Capture],
        "rnbQkb1r/ppp2ppp/5n2/4p3/4P3/2N5/PPP2PPP/R1B1KBNR b KQkq - 0 5",
    ),
    (
        CASTLE_CHECK,
        "e1g1",
        &[MoveTag::Check, MoveTag::KingSideCastle],
        "r4b1r/ppp3pp/8/4p3/2Pq4/3P1Q2/PP3PPP/1k3RK1 b - - 3 19",
    ),
    (
        "r3k1r1/pbppqpb1/1pn3p1/7p/1N2pPn1/1PP4N/PB1P2PP/2QRK1R1 b q f3 0 2",
        "e4f3",
        &[MoveTag::Check, MoveTag::EnPassant, MoveTag::Capture],
        "r3k1r1/pbppqpb1/1pn3p1/7p/1N4n1/1PP2p1N/PB1P2PP/2QRK1R1 w q - 0 3",
    ),
    (
        EN_PASSANT,
        "e5d6",
        &[MoveTag::EnPassant, MoveTag::Capture],
        "rnbqkbnr/ppp2ppp/3Pp3/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3",
    ),
];

#[test]
fn test_decode_derives_tags_and_position() {
    init_logging();
    for &(before, text, tags, after) in DECODE_CASES {
        let pos = fen(before);
        let mv = CoordinateNotation
            .decode(Some(&pos), text)
            .unwrap_or_else(|e| panic!("{text}: {e}"));

        let expected = tags.iter().fold(MoveTags::EMPTY, |acc, &t| acc | t);
        assert_eq!(mv.tags(), expected, "tags of {text}");
        assert_eq!(CoordinateNotation::transcribe(&mv), text);
        let next = mv.resulting_position().expect("decode attaches the resulting position");
        assert_eq!(next.to_fen(), after, "position after {text}");
    }
}

#[test]
fn test_decode_returns_generator_move() {
    let pos = fen(EN_PASSANT);
    let decoded = CoordinateNotation.decode(Some(&pos), "e5d6").unwrap();
    assert_eq!(decoded, legal(&pos, "e5", "d6"));
}

#[test]
fn test_decode_does_not_touch_input_position() {
    let pos = fen(START);
    let snapshot = pos.clone();
    CoordinateNotation.decode(Some(&pos), "g1f3").unwrap();
    assert_eq!(pos, snapshot);
}

#[test]
fn test_decode_requires_exact_promotion() {
    let pos = fen("8/P7/8/8/8/8/8/8 w - - 0 1");
    assert_eq!(
        CoordinateNotation.decode(Some(&pos), "a7a8"),
        Err(NotationError::NoLegalMove("a7a8".to_string()))
    );

    let knight = CoordinateNotation.decode(Some(&pos), "a7a8n").unwrap();
    assert_eq!(knight.promotion(), Some(PieceKind::Knight));
}

#[test]
fn test_decode_syntax_errors_come_first() {
    for text in ["e2e", "e9e4", "i2e4", "e2e4e5", "", "E2E4", "e2é4"] {
        assert_eq!(
            CoordinateNotation.decode(None, text),
            Err(NotationError::InvalidSyntax(text.to_string())),
            "{text:?}"
        );
    }
    assert_eq!(
        CoordinateNotation.decode(None, "a7a8x"),
        Err(NotationError::InvalidPromotionPiece('x'))
    );
    assert_eq!(
        CoordinateNotation.decode(None, "a7a8Q"),
        Err(NotationError::InvalidPromotionPiece('Q'))
    );
    assert_eq!(
        CoordinateNotation.decode(None, "a7a8k"),
        Err(NotationError::InvalidPromotionPiece('k'))
    );
}

#[test]
fn test_decode_without_position() {
    assert_eq!(
        CoordinateNotation.decode(None, "e2e4"),
        Err(NotationError::PositionRequired)
    );
}

#[test]
fn test_decode_illegal_move() {
    let pos = fen(START);
    for text in ["e2e5", "e7e5", "e1e2"] {
        assert_eq!(
            CoordinateNotation.decode(Some(&pos), text),
            Err(NotationError::NoLegalMove(text.to_string()))
        );
    }
}
