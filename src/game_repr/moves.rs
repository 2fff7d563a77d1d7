use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::Arc;

use smallvec::SmallVec;

use super::{PieceKind, Position, Square};

/*-------TAG LAYOUT--------*/

// | 1 bit   | 1 bit | 1 bit     | 1 bit     | 1 bit   | 1 bit    |
// | Capture | Check | Checkmate | EnPassant | O-O     | O-O-O    |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTag {
    Capture         = 1 << 0,
    Check           = 1 << 1,
    Checkmate       = 1 << 2,
    EnPassant       = 1 << 3,
    KingSideCastle  = 1 << 4,
    QueenSideCastle = 1 << 5,
}

impl MoveTag {
    pub const ALL: [MoveTag; 6] = [
        MoveTag::Capture,
        MoveTag::Check,
        MoveTag::Checkmate,
        MoveTag::EnPassant,
        MoveTag::KingSideCastle,
        MoveTag::QueenSideCastle,
    ];
}

/// Set of [`MoveTag`]s attached to a move
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveTags(u8);

impl MoveTags {
    pub const EMPTY: MoveTags = MoveTags(0);

    #[inline]
    pub fn contains(self, tag: MoveTag) -> bool {
        self.0 & tag as u8 != 0
    }

    #[inline]
    pub fn insert(&mut self, tag: MoveTag) {
        self.0 |= tag as u8;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = MoveTag> {
        MoveTag::ALL.into_iter().filter(move |&t| self.contains(t))
    }
}

impl From<MoveTag> for MoveTags {
    fn from(tag: MoveTag) -> Self {
        MoveTags(tag as u8)
    }
}

impl BitOr for MoveTag {
    type Output = MoveTags;

    fn bitor(self, rhs: MoveTag) -> MoveTags {
        MoveTags(self as u8 | rhs as u8)
    }
}

impl BitOr<MoveTag> for MoveTags {
    type Output = MoveTags;

    fn bitor(self, rhs: MoveTag) -> MoveTags {
        MoveTags(self.0 | rhs as u8)
    }
}

impl BitOrAssign<MoveTag> for MoveTags {
    fn bitor_assign(&mut self, rhs: MoveTag) {
        self.insert(rhs);
    }
}

impl fmt::Debug for MoveTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A move from `source` to `destination`.
///
/// Moves handed out by [`Position::legal_moves`] carry their full tag set.
/// Moves returned by a notation decoder additionally hold a snapshot of the
/// position the move leads to; the snapshot is not part of equality.
#[derive(Clone)]
pub struct Move {
    source: Square,
    destination: Square,
    promotion: Option<PieceKind>,
    tags: MoveTags,
    position: Option<Arc<Position>>,
}

pub type MoveList = SmallVec<[Move; 64]>;

impl Move {
    pub fn new(source: Square, destination: Square) -> Move {
        Move {
            source,
            destination,
            promotion: None,
            tags: MoveTags::EMPTY,
            position: None,
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Move {
        self.promotion = Some(kind);
        self
    }

    pub fn with_tags(mut self, tags: impl Into<MoveTags>) -> Move {
        self.tags = tags.into();
        self
    }

    pub fn with_tag(mut self, tag: MoveTag) -> Move {
        self.tags.insert(tag);
        self
    }

    #[inline]
    pub fn source(&self) -> Square {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.destination
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub fn tags(&self) -> MoveTags {
        self.tags
    }

    #[inline]
    pub fn has_tag(&self, tag: MoveTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_castle(&self) -> bool {
        self.has_tag(MoveTag::KingSideCastle) || self.has_tag(MoveTag::QueenSideCastle)
    }

    /// Position reached by playing this move, present on decoded moves only
    pub fn resulting_position(&self) -> Option<&Position> {
        self.position.as_deref()
    }

    pub(crate) fn add_tag(&mut self, tag: MoveTag) {
        self.tags.insert(tag);
    }

    pub(crate) fn attach_position(mut self, position: Position) -> Move {
        self.position = Some(Arc::new(position));
        self
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.promotion == other.promotion
            && self.tags == other.tags
    }
}

impl Eq for Move {}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("promotion", &self.promotion)
            .field("tags", &self.tags)
            .field("position", &self.position.as_ref().map(|p| p.to_fen()))
            .finish()
    }
}

/// Source and destination labels, e.g. `e2e4`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)
    }
}
