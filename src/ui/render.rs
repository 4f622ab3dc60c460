//! Terminal rendering of the replay state
//!
//! Pure functions from engine state to text: the board grid with rank and
//! file labels, the captured-piece trays in capture order, and the current
//! move's notation, annotation, and commentary. Everything here reads
//! engine state through its public accessors; nothing mutates.

use std::fmt::Write;

use crate::board::{File, Square};
use crate::pieces::{Color, PieceKind};
use crate::replay::{AutoplayScheduler, MoveRecord, ReplayEngine};

const EMPTY_SQUARE: char = '\u{00B7}';

/// Render the full viewer screen for the current engine state.
pub fn render(engine: &ReplayEngine, scheduler: &AutoplayScheduler) -> String {
    let game = engine.game();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", game.title);
    if !game.white_player.is_empty() || !game.black_player.is_empty() {
        let _ = writeln!(out, "{} vs {}", game.white_player, game.black_player);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "  captured: {}", tray_line(engine, Color::Black));
    for rank in (1..=8).rev() {
        let _ = write!(out, "{rank} ");
        for file in File::ALL {
            let square = Square::new(file, rank);
            let glyph = match engine.board().piece_at(square) {
                Some(id) => {
                    let piece = engine.piece(id);
                    piece.kind.glyph(piece.color)
                }
                None => EMPTY_SQUARE,
            };
            let _ = write!(out, "{glyph} ");
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "  a b c d e f g h");
    let _ = writeln!(out, "  captured: {}", tray_line(engine, Color::White));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", status_line(engine, scheduler));
    if let Some(record) = engine.current_move() {
        let captured = engine
            .current_ply()
            .and_then(|ply| engine.ledger().captured_at(ply))
            .is_some();
        let _ = writeln!(out, "last move: {}", move_notation(record, captured));
        if !record.comment.is_empty() {
            let _ = writeln!(out, "  {}", record.comment);
        }
    }
    out
}

/// Captured pieces of one color as a glyph row, in capture order.
fn tray_line(engine: &ReplayEngine, color: Color) -> String {
    let glyphs: Vec<String> = engine
        .ledger()
        .entries_for(color)
        .iter()
        .map(|entry| engine.piece(entry.piece).kind.glyph(color).to_string())
        .collect();
    if glyphs.is_empty() {
        "-".to_string()
    } else {
        glyphs.join(" ")
    }
}

fn status_line(engine: &ReplayEngine, scheduler: &AutoplayScheduler) -> String {
    let position = match engine.current_ply() {
        Some(ply) => format!("ply {}/{}", ply + 1, engine.ply_count()),
        None => format!("start of game ({} plies)", engine.ply_count()),
    };
    let mut line = position;
    if engine.at_end() {
        line.push_str(" (end)");
    }
    if scheduler.playing() {
        line.push_str(" [autoplay]");
    }
    line
}

/// Long algebraic notation for a replayed move.
///
/// Pawns get no letter prefix but show their source file on captures;
/// check/checkmate annotations append `+`/`#`.
pub fn move_notation(record: &MoveRecord, captured: bool) -> String {
    let mut notation = String::new();
    notation.push_str(record.piece.notation_letter());
    if record.piece == PieceKind::Pawn && captured {
        notation.push((b'a' + record.from.file().index() as u8) as char);
    }
    if captured {
        notation.push('x');
    }
    notation.push_str(&record.to.to_string());
    notation.push_str(record.attack.suffix());
    notation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{AttackAnnotation, GameDefinition, DEFAULT_AUTOPLAY_INTERVAL};

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

    #[test]
    fn test_move_notation_shapes() {
        let pawn = record(PieceKind::Pawn, Color::White, "e2", "e4");
        assert_eq!(move_notation(&pawn, false), "e4");

        let pawn_capture = record(PieceKind::Pawn, Color::White, "e4", "d5");
        assert_eq!(move_notation(&pawn_capture, true), "exd5");

        let mut queen_mate = record(PieceKind::Queen, Color::White, "f3", "f7");
        queen_mate.attack = AttackAnnotation::Checkmate;
        assert_eq!(move_notation(&queen_mate, true), "Qxf7#");

        let mut knight_check = record(PieceKind::Knight, Color::White, "f5", "g7");
        knight_check.attack = AttackAnnotation::Check;
        assert_eq!(move_notation(&knight_check, false), "Ng7+");
    }

    #[test]
    fn test_render_shows_initial_board() {
        let game = GameDefinition {
            title: "Render Check".to_string(),
            white_player: "A".to_string(),
            black_player: "B".to_string(),
            moves: vec![record(PieceKind::Pawn, Color::White, "e2", "e4")],
        };
        let engine = ReplayEngine::new(game);
        let scheduler = AutoplayScheduler::new(DEFAULT_AUTOPLAY_INTERVAL);

        let screen = render(&engine, &scheduler);
        assert!(screen.contains("Render Check"));
        assert!(screen.contains("A vs B"));
        assert!(screen.contains('♖'), "white rook rendered");
        assert!(screen.contains('♟'), "black pawn rendered");
        assert!(screen.contains("start of game (1 plies)"));
        assert!(!screen.contains("[autoplay]"));
    }

    #[test]
    fn test_render_shows_move_comment_and_tray() {
        let mut queen_mate = record(PieceKind::Queen, Color::White, "d1", "d7");
        queen_mate.comment = "A blunder punished.".to_string();
        let game = GameDefinition {
            title: "t".to_string(),
            white_player: String::new(),
            black_player: String::new(),
            moves: vec![queen_mate],
        };
        let mut engine = ReplayEngine::new(game);
        engine.advance().unwrap();

        let screen = render(&engine, &AutoplayScheduler::new(DEFAULT_AUTOPLAY_INTERVAL));
        assert!(screen.contains("Qxd7"), "capture notation shown");
        assert!(screen.contains("A blunder punished."));
        assert!(screen.contains("captured: ♟"), "black tray holds the pawn");
        assert!(screen.contains("captured: -"), "white tray still empty");
        assert!(screen.contains("(end)"));
    }
}
