//! The move-replay state machine
//!
//! [`ReplayEngine`] owns the game definition, the chess set, the board
//! index, and the capture ledger, and is their sole mutator. The number of
//! applied plies is the single source of truth; board occupancy, piece
//! positions, and the ledger are kept consistent with it transactionally on
//! every transition.
//!
//! # Transitions
//!
//! - [`advance`](ReplayEngine::advance) applies the next move: the piece on
//!   the record's source square (checked against the record's kind and
//!   color) moves to the destination, capturing any occupant there.
//! - [`retreat`](ReplayEngine::retreat) reverts the last applied move and
//!   reinstates a piece captured at that ply, if any.
//!
//! Both are silent no-ops at their boundary and return `Ok(false)` there.
//! A consistency failure is reported before anything is mutated, so state
//! always reflects the last successful transition.

use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::board::{BoardIndex, Square};
use crate::pieces::{ChessSet, Color, Piece, PieceId, PieceKind};
use crate::replay::captured::CaptureLedger;
use crate::replay::error::{ReplayError, ReplayResult};
use crate::replay::events::{EventBus, ReplayEvent};
use crate::replay::record::{GameDefinition, MoveRecord};

pub struct ReplayEngine {
    game: GameDefinition,
    set: ChessSet,
    board: BoardIndex,
    ledger: CaptureLedger,
    /// Number of applied plies, 0..=game.moves.len().
    applied: usize,
    events: EventBus,
}

impl ReplayEngine {
    /// Build an engine at the initial position of `game`: all 32 pieces on
    /// their home squares, nothing captured, no moves applied.
    pub fn new(game: GameDefinition) -> ReplayEngine {
        let set = ChessSet::standard();
        let mut board = BoardIndex::empty();
        for piece in set.pieces() {
            if let Some(square) = piece.position {
                board.place(piece.id, square);
            }
        }

        info!(
            "[REPLAY] loaded \"{}\": {} plies",
            game.title,
            game.moves.len()
        );
        ReplayEngine {
            game,
            set,
            board,
            ledger: CaptureLedger::default(),
            applied: 0,
            events: EventBus::default(),
        }
    }

    /// Apply the next move. Returns `Ok(false)` when already at the end.
    pub fn advance(&mut self) -> ReplayResult<bool> {
        if self.at_end() {
            return Ok(false);
        }
        let ply = self.applied;
        let record = &self.game.moves[ply];
        let (kind, color, from, to) = (record.piece, record.color, record.from, record.to);

        // Validate before mutating anything.
        let mover = self.expect_piece(ply, from, kind, color)?;

        let captured = self.board.remove(to);
        if let Some(captured_id) = captured {
            let victim_color = self.set.piece(captured_id).color;
            self.set.piece_mut(captured_id).position = None;
            self.ledger.record(captured_id, victim_color, ply);
            debug!(
                "[REPLAY] ply {ply}: {victim_color} {} captured on {to}",
                self.set.piece(captured_id).kind
            );
        }

        self.board.remove(from);
        self.board.place(mover, to);
        self.set.piece_mut(mover).position = Some(to);
        self.applied += 1;

        debug!("[REPLAY] ply {ply}: {color} {kind} {from} -> {to}");
        self.events.publish(ReplayEvent::Advanced {
            ply,
            captured: captured.is_some(),
        });
        Ok(true)
    }

    /// Revert the last applied move. Returns `Ok(false)` when at the start.
    pub fn retreat(&mut self) -> ReplayResult<bool> {
        if self.at_start() {
            return Ok(false);
        }
        let ply = self.applied - 1;
        let record = &self.game.moves[ply];
        let (kind, color, from, to) = (record.piece, record.color, record.from, record.to);

        // The moved piece must be sitting on the record's destination.
        let mover = self.expect_piece(ply, to, kind, color)?;

        self.board.remove(to);
        self.board.place(mover, from);
        self.set.piece_mut(mover).position = Some(from);

        let restored = self.ledger.revert(ply);
        if let Some(restored_id) = restored {
            self.set.piece_mut(restored_id).position = Some(to);
            self.board.place(restored_id, to);
        }
        self.applied -= 1;

        debug!("[REPLAY] ply {ply}: reverted {color} {kind} {to} -> {from}");
        self.events.publish(ReplayEvent::Retreated {
            ply: self.current_ply(),
            restored: restored.is_some(),
        });
        Ok(true)
    }

    /// The move the replay is currently on, or `None` at the initial
    /// position.
    pub fn current_move(&self) -> Option<&MoveRecord> {
        self.current_ply().map(|ply| &self.game.moves[ply])
    }

    /// Index of the last applied ply, or `None` at the initial position.
    pub fn current_ply(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn at_start(&self) -> bool {
        self.applied == 0
    }

    pub fn at_end(&self) -> bool {
        self.applied == self.game.moves.len()
    }

    pub fn ply_count(&self) -> usize {
        self.game.moves.len()
    }

    pub fn game(&self) -> &GameDefinition {
        &self.game
    }

    pub fn board(&self) -> &BoardIndex {
        &self.board
    }

    pub fn ledger(&self) -> &CaptureLedger {
        &self.ledger
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        self.set.piece(id)
    }

    pub fn pieces(&self) -> &[Piece] {
        self.set.pieces()
    }

    /// Subscribe to transition notifications.
    pub fn subscribe(&mut self) -> Receiver<ReplayEvent> {
        self.events.subscribe()
    }

    fn expect_piece(
        &self,
        ply: usize,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> ReplayResult<PieceId> {
        let Some(id) = self.board.piece_at(square) else {
            return Err(ReplayError::EmptySourceSquare { ply, square });
        };
        let piece = self.set.piece(id);
        if piece.kind != kind || piece.color != color {
            return Err(ReplayError::PieceMismatch {
                ply,
                square,
                expected_kind: kind,
                expected_color: color,
                found_kind: piece.kind,
                found_color: piece.color,
            });
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::record::AttackAnnotation;

    fn record(piece: PieceKind, color: Color, from: &str, to: &str) -> MoveRecord {
        MoveRecord {
            piece,
            color,
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
            attack: AttackAnnotation::None,
            comment: String::new(),
        }
    }

    fn game(moves: Vec<MoveRecord>) -> GameDefinition {
        GameDefinition {
            title: "test game".to_string(),
            white_player: String::new(),
            black_player: String::new(),
            moves,
        }
    }

    #[test]
    fn test_new_engine_is_at_initial_position() {
        let engine = ReplayEngine::new(game(vec![]));
        assert!(engine.at_start());
        assert!(engine.at_end(), "empty game is at both boundaries");
        assert_eq!(engine.current_ply(), None);
        assert!(engine.current_move().is_none());
        assert!(engine.ledger().is_empty());
        assert_eq!(engine.board().occupied().count(), 32);
    }

    #[test]
    fn test_advance_moves_the_recorded_piece() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e2",
            "e4",
        )]));

        assert_eq!(engine.advance().unwrap(), true);
        assert!(engine.at_end());
        assert_eq!(engine.current_ply(), Some(0));

        let e4 = engine.board().piece_at("e4".parse().unwrap()).unwrap();
        assert_eq!(engine.piece(e4).kind, PieceKind::Pawn);
        assert_eq!(engine.piece(e4).color, Color::White);
        assert!(engine
            .board()
            .piece_at("e2".parse().unwrap())
            .is_none());
    }

    #[test]
    fn test_advance_at_end_is_a_no_op() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e2",
            "e4",
        )]));
        engine.advance().unwrap();

        assert_eq!(engine.advance().unwrap(), false);
        assert_eq!(engine.current_ply(), Some(0), "cursor unchanged");
    }

    #[test]
    fn test_retreat_at_start_is_a_no_op() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e2",
            "e4",
        )]));
        assert_eq!(engine.retreat().unwrap(), false);
        assert_eq!(engine.current_ply(), None);
    }

    #[test]
    fn test_advance_rejects_empty_source_square() {
        //! A record pointing at an empty square fails without mutating state
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e4",
            "e5",
        )]));

        let err = engine.advance().unwrap_err();
        assert!(matches!(
            err,
            ReplayError::EmptySourceSquare { ply: 0, .. }
        ));
        assert_eq!(engine.current_ply(), None, "no ply applied");
        assert_eq!(engine.board().occupied().count(), 32);
    }

    #[test]
    fn test_advance_rejects_wrong_piece() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Knight,
            Color::White,
            "e2",
            "e4",
        )]));

        let err = engine.advance().unwrap_err();
        match err {
            ReplayError::PieceMismatch {
                expected_kind,
                found_kind,
                ..
            } => {
                assert_eq!(expected_kind, PieceKind::Knight);
                assert_eq!(found_kind, PieceKind::Pawn);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(engine.at_start());
    }

    #[test]
    fn test_advance_rejects_wrong_color() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::Black,
            "e2",
            "e4",
        )]));
        assert!(matches!(
            engine.advance().unwrap_err(),
            ReplayError::PieceMismatch { .. }
        ));
    }

    #[test]
    fn test_capture_clears_position_and_fills_ledger() {
        // White pawn runs e2-e4, black pawn d7-d5, then exd5.
        let mut engine = ReplayEngine::new(game(vec![
            record(PieceKind::Pawn, Color::White, "e2", "e4"),
            record(PieceKind::Pawn, Color::Black, "d7", "d5"),
            record(PieceKind::Pawn, Color::White, "e4", "d5"),
        ]));
        engine.advance().unwrap();
        engine.advance().unwrap();

        let victim = engine.board().piece_at("d5".parse().unwrap()).unwrap();
        engine.advance().unwrap();

        assert_eq!(engine.piece(victim).position, None);
        let black_tray = engine.ledger().entries_for(Color::Black);
        assert_eq!(black_tray.len(), 1);
        assert_eq!(black_tray[0].piece, victim);
        assert_eq!(black_tray[0].ply, 2);

        let on_d5 = engine.board().piece_at("d5".parse().unwrap()).unwrap();
        assert_eq!(engine.piece(on_d5).color, Color::White);
    }

    #[test]
    fn test_retreat_restores_captured_piece() {
        let mut engine = ReplayEngine::new(game(vec![
            record(PieceKind::Pawn, Color::White, "e2", "e4"),
            record(PieceKind::Pawn, Color::Black, "d7", "d5"),
            record(PieceKind::Pawn, Color::White, "e4", "d5"),
        ]));
        for _ in 0..3 {
            engine.advance().unwrap();
        }
        let victim = engine.ledger().entries_for(Color::Black)[0].piece;

        engine.retreat().unwrap();

        assert_eq!(
            engine.piece(victim).position,
            Some("d5".parse().unwrap()),
            "captured pawn back on the square it was taken at"
        );
        assert_eq!(engine.board().piece_at("d5".parse().unwrap()), Some(victim));
        assert!(engine.ledger().is_empty());

        let mover = engine.board().piece_at("e4".parse().unwrap()).unwrap();
        assert_eq!(engine.piece(mover).color, Color::White);
    }

    #[test]
    fn test_events_fire_only_on_successful_transitions() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e2",
            "e4",
        )]));
        let events = engine.subscribe();

        engine.advance().unwrap();
        assert_eq!(
            events.try_recv(),
            Ok(ReplayEvent::Advanced {
                ply: 0,
                captured: false
            })
        );

        engine.advance().unwrap(); // boundary no-op
        assert!(events.try_recv().is_err(), "no event for a no-op");

        engine.retreat().unwrap();
        assert_eq!(
            events.try_recv(),
            Ok(ReplayEvent::Retreated {
                ply: None,
                restored: false
            })
        );
    }

    #[test]
    fn test_dropped_subscriber_does_not_break_transitions() {
        let mut engine = ReplayEngine::new(game(vec![record(
            PieceKind::Pawn,
            Color::White,
            "e2",
            "e4",
        )]));
        drop(engine.subscribe());
        assert_eq!(engine.advance().unwrap(), true);
    }
}
