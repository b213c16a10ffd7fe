//! Running a file or an inline snippet.

use phw_eval::{SharedOutput, StreamId};

use super::{report, start_engine, EXIT_FAILURE, EXIT_SUCCESS};

/// Execute the file at `path`.
pub fn run_file(path: &str, output: &SharedOutput) -> i32 {
    let Some(mut engine) = start_engine(output) else {
        return EXIT_FAILURE;
    };
    let result = engine.execute_file(path);
    engine.cleanup();

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            tracing::debug!(%error, path, "execution failed");
            report(output, StreamId::Stderr, &format!("Failed to execute {path}"));
            EXIT_FAILURE
        }
    }
}

/// Execute `code` given on the command line.
pub fn run_code(code: &str, output: &SharedOutput) -> i32 {
    let Some(mut engine) = start_engine(output) else {
        return EXIT_FAILURE;
    };
    let result = engine.execute(code);
    engine.cleanup();

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "execution failed");
            report(output, StreamId::Stderr, "Failed to execute code");
            EXIT_FAILURE
        }
    }
}
