//! Terminal viewer shell
//!
//! Presentational wiring around the replay core: text rendering, command
//! parsing, and the single-threaded event loop. The shell observes engine
//! state and invokes only the four public transitions (`advance`,
//! `retreat`, `play`, `pause`).

pub mod app;
pub mod command;
pub mod render;

pub use app::run;
pub use command::Command;
pub use render::{move_notation, render};
