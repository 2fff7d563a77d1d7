//! Chess move notation.
//!
//! [`game_repr`] holds the board, legal-move generation and FEN handling.
//! [`notation`] converts between its [`Move`](game_repr::Move)s and
//! coordinate (`e2e4`), standard algebraic (`Nf3`) and long algebraic
//! (`Ng1f3`) text.
//!
//! ```
//! use chess_notation::game_repr::Position;
//! use chess_notation::notation::{AlgebraicNotation, CoordinateNotation, Notation};
//!
//! let start = Position::default();
//! let mv = AlgebraicNotation.decode(Some(&start), "Nf3").unwrap();
//! assert_eq!(CoordinateNotation.encode(&start, &mv).unwrap(), "g1f3");
//! ```

pub mod game_repr;
pub mod notation;
