//! The `-l` command: bracket-balance check of a file.

use phw_eval::{syntax_check_file, SharedOutput, StreamId};

use super::{report, EXIT_FAILURE, EXIT_SUCCESS};

/// Check `path` without executing it. An unreadable file counts as a
/// syntax error.
pub fn check_file(path: &str, output: &SharedOutput) -> i32 {
    match syntax_check_file(path) {
        Ok(true) => {
            report(
                output,
                StreamId::Stdout,
                &format!("No syntax errors detected in {path}"),
            );
            EXIT_SUCCESS
        }
        Ok(false) => {
            report(output, StreamId::Stderr, &format!("Syntax error in {path}"));
            EXIT_FAILURE
        }
        Err(error) => {
            tracing::debug!(%error, "could not read source");
            report(output, StreamId::Stderr, &format!("Syntax error in {path}"));
            EXIT_FAILURE
        }
    }
}
