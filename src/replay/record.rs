//! Move records and game definitions
//!
//! A game definition is an ordered, immutable list of move records plus
//! title and player metadata. Definitions are plain data loaded once at
//! startup - from a bundled asset or a user-supplied JSON file - and only
//! ever read afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Square;
use crate::pieces::{Color, PieceKind};
use crate::replay::error::{ReplayError, ReplayResult};

/// Check/checkmate annotation attached to a move record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackAnnotation {
    #[default]
    None,
    Check,
    Checkmate,
}

impl AttackAnnotation {
    /// Notation suffix: `+` for check, `#` for checkmate.
    pub fn suffix(self) -> &'static str {
        match self {
            AttackAnnotation::None => "",
            AttackAnnotation::Check => "+",
            AttackAnnotation::Checkmate => "#",
        }
    }
}

/// One ply of a recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    #[serde(default)]
    pub attack: AttackAnnotation,
    #[serde(default)]
    pub comment: String,
}

/// A complete recorded game: metadata plus the ordered move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    pub title: String,
    #[serde(default)]
    pub white_player: String,
    #[serde(default)]
    pub black_player: String,
    pub moves: Vec<MoveRecord>,
}

impl GameDefinition {
    /// Parse a game definition from JSON text.
    pub fn from_json(text: &str) -> ReplayResult<GameDefinition> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a game definition from a file.
    pub fn load(path: &Path) -> ReplayResult<GameDefinition> {
        let text = fs::read_to_string(path).map_err(|source| ReplayError::GameRead {
            path: path.to_path_buf(),
            source,
        })?;
        GameDefinition::from_json(&text)
    }
}
