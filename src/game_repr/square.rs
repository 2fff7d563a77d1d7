use std::fmt;
use std::str::FromStr;

/// A board square, stored as `rank * 8 + file` (a1 = 0, h8 = 63)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square label {0:?}")]
pub struct SquareParseError(pub String);

impl Square {
    /// # Panics
    /// When `file` or `rank` is outside `0..8`.
    pub fn new(file: u8, rank: u8) -> Square {
        assert!(file < 8 && rank < 8, "square out of range: {file},{rank}");
        Square(rank * 8 + file)
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        (idx < 64).then(|| Square(idx as u8))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline(always)]
    pub(crate) fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Parses a file letter `a`..`h`
    pub fn file_from_char(c: char) -> Option<u8> {
        matches!(c, 'a'..='h').then(|| c as u8 - b'a')
    }

    /// Parses a rank digit `1`..`8`
    pub fn rank_from_char(c: char) -> Option<u8> {
        matches!(c, '1'..='8').then(|| c as u8 - b'1')
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Parses exactly two characters: a file letter then a rank digit
    pub fn parse(label: &str) -> Option<Square> {
        let mut chars = label.chars();
        let file = Self::file_from_char(chars.next()?)?;
        let rank = Self::rank_from_char(chars.next()?)?;
        match chars.next() {
            None => Some(Square::new(file, rank)),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s).ok_or_else(|| SquareParseError(s.to_string()))
    }
}
