//! Command handlers for the CLI.
//!
//! Every handler writes through a [`SharedOutput`] and returns the exit
//! code: [`EXIT_SUCCESS`] or [`EXIT_FAILURE`].

use phw_eval::{Engine, SharedOutput, StreamId};

mod check;
mod run;

pub use check::check_file;
pub use run::{run_code, run_file};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Write a line to `stream`. Failures are ignored; there is nowhere left to
/// report them.
fn report(output: &SharedOutput, stream: StreamId, message: &str) {
    let line = format!("{message}\n");
    if let Err(error) = output.write(stream, line.as_bytes()) {
        tracing::warn!(%error, "could not write message");
    }
}

/// An initialized engine writing to `output`, or `None` after reporting why.
fn start_engine(output: &SharedOutput) -> Option<Engine> {
    let mut engine = Engine::builder().output(SharedOutput::clone(output)).build();
    match engine.init() {
        Ok(()) => Some(engine),
        Err(error) => {
            tracing::debug!(%error, "engine init failed");
            report(output, StreamId::Stderr, "Failed to initialize engine");
            None
        }
    }
}

#[cfg(test)]
mod tests;
