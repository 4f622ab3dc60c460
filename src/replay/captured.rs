//! Captured pieces ledger
//!
//! Tracks pieces currently off the board, per color, in the order they were
//! captured. Each entry is tagged with the ply at which the capture happened
//! so that stepping backward can reinstate exactly the piece taken at that
//! ply. Insertion order is display order for the captured-piece trays and is
//! never reordered.

use crate::pieces::{Color, PieceId};

/// One captured piece and the ply at which it was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureEntry {
    pub piece: PieceId,
    pub ply: usize,
}

/// Per-color, append-only record of captured pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    white: Vec<CaptureEntry>,
    black: Vec<CaptureEntry>,
}

impl CaptureLedger {
    /// Record a capture under the captured piece's own color.
    pub fn record(&mut self, piece: PieceId, color: Color, ply: usize) {
        self.lane_mut(color).push(CaptureEntry { piece, ply });
    }

    /// Remove and return the piece captured at exactly `ply`, if any.
    ///
    /// At most one capture happens per ply, so the match is unambiguous.
    pub fn revert(&mut self, ply: usize) -> Option<PieceId> {
        for color in [Color::White, Color::Black] {
            let lane = self.lane_mut(color);
            if let Some(index) = lane.iter().rposition(|entry| entry.ply == ply) {
                return Some(lane.remove(index).piece);
            }
        }
        None
    }

    /// The piece captured at `ply`, without removing it.
    pub fn captured_at(&self, ply: usize) -> Option<PieceId> {
        self.white
            .iter()
            .chain(self.black.iter())
            .find(|entry| entry.ply == ply)
            .map(|entry| entry.piece)
    }

    /// Captured pieces of one color, in capture order.
    pub fn entries_for(&self, color: Color) -> &[CaptureEntry] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    fn lane_mut(&mut self, color: Color) -> &mut Vec<CaptureEntry> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
