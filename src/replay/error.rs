//! Error types for the replay core
//!
//! Provides custom error types for replay transitions and game definition
//! loading. A transition error means the board index no longer agrees with
//! what the move record expects - a corrupted game definition or an engine
//! bug - and is not recoverable; the engine guarantees no mutation has
//! happened when one is returned.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Square;
use crate::pieces::{Color, PieceKind};

/// Errors that can occur while replaying or loading a game
#[derive(Debug, Error)]
pub enum ReplayError {
    /// A move record names a source square with no piece on it
    #[error("ply {ply}: no piece on {square} to replay")]
    EmptySourceSquare { ply: usize, square: Square },

    /// The piece found on the board does not match the move record
    #[error(
        "ply {ply}: expected {expected_color} {expected_kind} on {square}, \
         found {found_color} {found_kind}"
    )]
    PieceMismatch {
        ply: usize,
        square: Square,
        expected_kind: PieceKind,
        expected_color: Color,
        found_kind: PieceKind,
        found_color: Color,
    },

    /// Game definition JSON could not be parsed
    #[error("failed to parse game definition: {0}")]
    GameParse(#[from] serde_json::Error),

    /// Game definition file could not be read
    #[error("failed to read game file {path}: {source}")]
    GameRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for replay operations
pub type ReplayResult<T> = Result<T, ReplayError>;
