//! Autoplay scheduler
//!
//! A two-state (idle/running) timer wrapper around the engine's `advance`.
//! `play` advances once immediately and starts a fresh periodic ticker;
//! `pause` drops the ticker, which synchronously guarantees that timer
//! instance fires no further advances. The scheduler keeps ticking at the
//! end of the game - advancing there is a safe no-op and the viewer simply
//! idles on the final position - but a replay error pauses it before being
//! propagated.
//!
//! The ticker is a channel receiver so the driving event loop can `select!`
//! over it next to user commands; all `advance` calls stay on that single
//! loop thread.

use std::time::{Duration, Instant};

use crossbeam_channel::{tick, Receiver};
use tracing::{error, info};

use crate::replay::engine::ReplayEngine;
use crate::replay::error::ReplayResult;

/// Interval between automatic advances unless overridden.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1500);

pub struct AutoplayScheduler {
    interval: Duration,
    ticker: Option<Receiver<Instant>>,
}

impl AutoplayScheduler {
    pub fn new(interval: Duration) -> AutoplayScheduler {
        AutoplayScheduler {
            interval,
            ticker: None,
        }
    }

    /// Whether the scheduler is currently driving the game forward.
    pub fn playing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start autoplay: advance once now, then once per interval.
    ///
    /// No-op when already running. If the immediate advance fails the
    /// scheduler stays idle and the error is propagated.
    pub fn play(&mut self, engine: &mut ReplayEngine) -> ReplayResult<bool> {
        if self.playing() {
            return Ok(false);
        }
        engine.advance()?;
        self.ticker = Some(tick(self.interval));
        info!("[AUTOPLAY] playing every {:?}", self.interval);
        Ok(true)
    }

    /// Stop autoplay. No-op when idle.
    ///
    /// Dropping the ticker here is what guarantees no further advances from
    /// this timer instance; a later `play` starts a fresh one.
    pub fn pause(&mut self) {
        if self.ticker.take().is_some() {
            info!("[AUTOPLAY] paused");
        }
    }

    /// The periodic trigger to `select!` over while playing.
    pub fn ticker(&self) -> Option<&Receiver<Instant>> {
        self.ticker.as_ref()
    }

    /// Handle one timer firing: a single advance.
    ///
    /// Reaching the end keeps the scheduler running (advance is a no-op
    /// there); a replay error converts running back to idle and propagates.
    pub fn on_tick(&mut self, engine: &mut ReplayEngine) -> ReplayResult<bool> {
        match engine.advance() {
            Ok(stepped) => Ok(stepped),
            Err(err) => {
                error!("[AUTOPLAY] halting on replay error: {err}");
                self.pause();
                Err(err)
            }
        }
    }
}
