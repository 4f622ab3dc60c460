//! The interactive viewer loop
//!
//! One thread owns the engine and the scheduler and serializes everything
//! through a single `select!`: user commands arrive on a channel fed by a
//! stdin reader thread, and autoplay ticks arrive on the scheduler's timer
//! channel. The reader thread never touches the engine, so user input and
//! timer firings can never race a transition.
//!
//! A replay error is terminal for the session: autoplay stops, the error is
//! reported, and further stepping commands are refused while quitting stays
//! available. Engine state stays exactly as of the last successful
//! transition.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::{never, select, unbounded, Receiver};
use tracing::{info, warn};

use crate::replay::{AutoplayScheduler, ReplayEngine, ReplayError, ReplayResult};
use crate::ui::command::Command;
use crate::ui::render::render;

/// Run the viewer until the user quits or input closes.
pub fn run(
    mut engine: ReplayEngine,
    mut scheduler: AutoplayScheduler,
    autostart: bool,
) -> ReplayResult<()> {
    let events = engine.subscribe();
    let commands = spawn_stdin_reader();

    println!("{}", Command::help_text());
    print!("{}", render(&engine, &scheduler));

    let mut failure: Option<ReplayError> = None;
    if autostart {
        scheduler.play(&mut engine)?;
    }

    loop {
        let ticker = scheduler.ticker().cloned().unwrap_or_else(never);
        let mut dirty = false;

        select! {
            recv(commands) -> line => {
                let Ok(line) = line else {
                    info!("[VIEWER] input closed, exiting");
                    break;
                };
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => println!("{}", Command::help_text()),
                    Some(command) if failure.is_some() => {
                        warn!("[VIEWER] ignoring {command:?} after replay failure");
                        println!("replay failed; only quit is available");
                    }
                    Some(Command::Next) => match engine.advance() {
                        Ok(_) => {}
                        Err(err) => report_failure(&mut failure, &mut scheduler, err),
                    },
                    Some(Command::Prev) => match engine.retreat() {
                        Ok(_) => {}
                        Err(err) => report_failure(&mut failure, &mut scheduler, err),
                    },
                    Some(Command::Play) => match scheduler.play(&mut engine) {
                        Ok(started) => dirty |= started,
                        Err(err) => report_failure(&mut failure, &mut scheduler, err),
                    },
                    Some(Command::Pause) => {
                        scheduler.pause();
                        dirty = true;
                    }
                    None => println!("{}", Command::help_text()),
                }
            }
            recv(ticker) -> _ => {
                if let Err(err) = scheduler.on_tick(&mut engine) {
                    report_failure(&mut failure, &mut scheduler, err);
                }
            }
        }

        while events.try_recv().is_ok() {
            dirty = true;
        }
        if dirty {
            print!("{}", render(&engine, &scheduler));
        }
    }
    Ok(())
}

/// Record a terminal replay failure: stop autoplay and tell the user.
fn report_failure(
    failure: &mut Option<ReplayError>,
    scheduler: &mut AutoplayScheduler,
    err: ReplayError,
) {
    scheduler.pause();
    println!("replay failed: {err}");
    *failure = Some(err);
}

/// Forward stdin lines into a channel from a dedicated thread.
///
/// The receiver closing ends the thread on its next send attempt.
fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
