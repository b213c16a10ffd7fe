//! Bracket-balance check.
//!
//! A line-based heuristic, not a parser. For each line, an open marker
//! (`<?php` or `<?`) switches scanning into the embedded-code region, then a
//! close marker `?>` switches it back out. If the line ends up inside the
//! region, every `{`, `}`, `(` and `)` on it is counted, including those in
//! string literals and comments. The source passes if both counts end at
//! exactly zero.

use std::path::Path;

use memchr::memmem;

use crate::{EngineError, EngineResult};

/// Running bracket counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Balance {
    braces: i64,
    parens: i64,
}

impl Balance {
    fn count(&mut self, line: &[u8]) {
        for &byte in line {
            match byte {
                b'{' => self.braces += 1,
                b'}' => self.braces -= 1,
                b'(' => self.parens += 1,
                b')' => self.parens -= 1,
                _ => {}
            }
        }
    }

    fn is_balanced(self) -> bool {
        self.braces == 0 && self.parens == 0
    }
}

/// Check bracket balance of `source`. Returns `true` on success.
pub fn syntax_check(source: &[u8]) -> bool {
    let mut inside = false;
    let mut balance = Balance::default();

    for line in source.split_inclusive(|&b| b == b'\n') {
        if memmem::find(line, b"<?").is_some() {
            inside = true;
        }
        if memmem::find(line, b"?>").is_some() {
            inside = false;
        }
        if inside {
            balance.count(line);
        }
    }

    tracing::trace!(?balance, "syntax check finished");
    balance.is_balanced()
}

/// Read `path` and run [`syntax_check`] on it.
pub fn syntax_check_file(path: impl AsRef<Path>) -> EngineResult<bool> {
    let path = path.as_ref();
    let source = std::fs::read(path).map_err(|e| EngineError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(syntax_check(&source))
}

#[cfg(test)]
mod tests;
