//! Replay core - the state machine behind the viewer
//!
//! # Module Organization
//!
//! - `record` - Move records and game definitions (immutable input data)
//! - `engine` - The replay state machine owning all derived state
//! - `captured` - Per-color ledger of captured pieces
//! - `events` - Change notifications published after each transition
//! - `autoplay` - Timer-driven automatic stepping
//! - `error` - Error taxonomy and result alias
//!
//! # Ownership
//!
//! The engine is constructed explicitly from a [`GameDefinition`] and owned
//! by whoever composes the viewer; there is no process-wide controller. The
//! game definition is read-only after construction, and the ply cursor,
//! board index, and capture ledger are mutated only through the engine's
//! `advance`/`retreat` transitions.

pub mod autoplay;
pub mod captured;
pub mod engine;
pub mod error;
pub mod events;
pub mod record;

pub use autoplay::{AutoplayScheduler, DEFAULT_AUTOPLAY_INTERVAL};
pub use captured::{CaptureEntry, CaptureLedger};
pub use engine::ReplayEngine;
pub use error::{ReplayError, ReplayResult};
pub use events::ReplayEvent;
pub use record::{AttackAnnotation, GameDefinition, MoveRecord};
