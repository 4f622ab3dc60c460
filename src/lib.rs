//! Chess game replay viewer - core state machine and terminal shell
//!
//! Steps forward and backward through a fixed, annotated move list while
//! keeping piece positions, the board index, and the captured-piece ledger
//! consistent with a single replay cursor. The replay core is UI-agnostic;
//! the `ui` module wraps it in a terminal front end.
//!
//! # Module Organization
//!
//! - `board` - Square coordinates and the fixed 8x8 spatial index
//! - `pieces` - Piece identity, kinds, colors, and the standard chess set
//! - `replay` - The replay engine, capture ledger, events, and autoplay
//! - `games` - Bundled demonstration games embedded as JSON assets
//! - `ui` - Terminal renderer, command parser, and the viewer event loop

pub mod board;
pub mod games;
pub mod pieces;
pub mod replay;
pub mod ui;

pub use replay::{AutoplayScheduler, ReplayEngine, ReplayError, ReplayEvent, ReplayResult};
