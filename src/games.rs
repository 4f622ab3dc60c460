//! Bundled demonstration games
//!
//! Two annotated games ship with the viewer as JSON assets: Anderssen vs
//! Kieseritzky 1851 ("The Immortal Game") and a seven-move scholar's-mate
//! miniature ("The Amateur Game"). Both are embedded at compile time and
//! parsed on demand.

use crate::replay::{GameDefinition, ReplayResult};

const IMMORTAL_GAME_JSON: &str = include_str!("../assets/games/immortal.json");
const AMATEUR_GAME_JSON: &str = include_str!("../assets/games/amateur.json");

/// The Immortal Game, annotated. 45 plies, White mates with Be7.
pub fn immortal_game() -> ReplayResult<GameDefinition> {
    GameDefinition::from_json(IMMORTAL_GAME_JSON)
}

/// The Amateur Game: a quick scholar's mate. 7 plies.
pub fn amateur_game() -> ReplayResult<GameDefinition> {
    GameDefinition::from_json(AMATEUR_GAME_JSON)
}
