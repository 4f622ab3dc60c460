//! Piece identity, kinds, colors, and the standard chess set
//!
//! Pieces are plain data: a stable id, a kind, a color, and a current
//! position that is `None` exactly while the piece is captured. The kind is
//! a tagged variant carrying its display data (algebraic letter, Unicode
//! glyph) through methods rather than a class hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{File, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six chess piece kinds.
///
/// Serialized as the algebraic letter (`"N"` for knight) to match the game
/// definition schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "K")]
    King,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "R")]
    Rook,
    #[serde(rename = "B")]
    Bishop,
    #[serde(rename = "N")]
    Knight,
    #[serde(rename = "P")]
    Pawn,
}

impl PieceKind {
    /// Algebraic letter used in move notation. Pawns have no letter there;
    /// callers that need the distinction use [`PieceKind::notation_letter`].
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Letter prefix for standard algebraic notation ("" for pawns).
    pub fn notation_letter(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Pawn => "",
        }
    }

    /// Unicode chess glyph for this kind in the given color.
    pub fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265A}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{name}")
    }
}

/// Stable identifier for one of the 32 pieces of a viewing session.
///
/// Ids index into the owning [`ChessSet`] and remain valid for the whole
/// session; capture clears a piece's position but never invalidates its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    /// Current square, or `None` while captured.
    pub position: Option<Square>,
}

/// The 32 pieces of a game, constructed once on their home squares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessSet {
    pieces: Vec<Piece>,
}

/// Standard back-rank layout, queenside rook to kingside rook.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl ChessSet {
    /// Build the full set on its starting squares: white on ranks 1-2,
    /// black on ranks 7-8.
    pub fn standard() -> ChessSet {
        let mut pieces = Vec::with_capacity(32);
        let mut push = |kind: PieceKind, color: Color, file: File, rank: u8| {
            let id = PieceId(pieces.len());
            pieces.push(Piece {
                id,
                kind,
                color,
                position: Some(Square::new(file, rank)),
            });
        };

        for (file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
            push(kind, Color::White, *file, 1);
        }
        for file in File::ALL {
            push(PieceKind::Pawn, Color::White, file, 2);
        }
        for (file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
            push(kind, Color::Black, *file, 8);
        }
        for file in File::ALL {
            push(PieceKind::Pawn, Color::Black, file, 7);
        }

        ChessSet { pieces }
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}
