//! Board coordinates and the fixed 8x8 spatial index
//!
//! A [`Square`] is a (file, rank) coordinate in chess notation; a
//! [`BoardIndex`] maps squares to occupying piece ids with O(1) lookup and
//! update. The index is a pure spatial structure: it knows nothing about
//! chess legality and is mutated only by the replay engine.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::pieces::PieceId;

/// Board files `a` through `h`, queenside to kingside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// All files in board order, for iteration when drawing or indexing.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Zero-based column index (`a` = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.index() as u8) as char)
    }
}

/// A board coordinate in chess notation, e.g. `e4`.
///
/// Rank is 1..=8 counted from White's side. Equality is structural, and the
/// coordinate text form (`"e4"`) is used for parsing, display, and
/// serialization in game definition files.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: u8,
}

/// Error parsing coordinate text like `"e4"` into a [`Square`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square notation: {0:?}")]
pub struct ParseSquareError(pub String);

impl Square {
    /// Build a square from a file and a rank in 1..=8.
    pub fn new(file: File, rank: u8) -> Square {
        debug_assert!((1..=8).contains(&rank), "rank out of range: {rank}");
        Square { file, rank }
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Index into a 64-slot board array (a1 = 0, h8 = 63).
    pub fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + self.file.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (File::from_char(f), r.to_digit(10)),
            _ => (None, None),
        };
        match (file, rank) {
            (Some(file), Some(rank @ 1..=8)) => Ok(Square::new(file, rank as u8)),
            _ => Err(ParseSquareError(s.to_string())),
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Spatial index from squares to occupying pieces.
///
/// A flat 64-slot array rather than an associative map: every lookup and
/// update is O(1) and the whole index fits in a cache line's worth of slots.
/// At most one piece occupies a square; `place` asserts that in debug builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardIndex {
    squares: [Option<PieceId>; 64],
}

impl BoardIndex {
    pub fn empty() -> BoardIndex {
        BoardIndex {
            squares: [None; 64],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.squares[square.index()]
    }

    pub fn place(&mut self, id: PieceId, square: Square) {
        debug_assert!(
            self.squares[square.index()].is_none(),
            "square {square} already occupied"
        );
        self.squares[square.index()] = Some(id);
    }

    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        self.squares[square.index()].take()
    }

    /// Iterate occupied squares with their piece ids.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.squares.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|id| (Square::new(File::ALL[i % 8], (i / 8) as u8 + 1), id))
        })
    }
}

impl Default for BoardIndex {
    fn default() -> Self {
        BoardIndex::empty()
    }
}
