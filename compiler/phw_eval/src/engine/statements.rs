//! Statement-recognition scan.
//!
//! A single left-to-right pass over the source bytes, not a parse:
//!
//! - whitespace (space, `\t`, `\n`, `\r`) is skipped
//! - `<?php`, `<?` and `?>` markers are skipped
//! - `echo` or `print`, then spaces or tabs, then an optional quoted literal:
//!   the literal's text is emitted
//! - anything else is skipped up to the next `;` (consumed) or newline
//!
//! Keywords are matched as prefixes, so `echofoo 'x'` still emits `x`.
//! An unterminated literal emits everything up to the end of input.

use phw_lexer::scan_quoted;

const OPEN_TAG: &[u8] = b"<?php";
const SHORT_OPEN_TAG: &[u8] = b"<?";
const CLOSE_TAG: &[u8] = b"?>";
const OUTPUT_KEYWORDS: [&[u8]; 2] = [b"echo", b"print"];

#[inline]
fn is_statement_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Scan `source`, calling `emit` with each literal an output statement
/// produces.
pub(crate) fn scan(source: &[u8], mut emit: impl FnMut(&[u8])) {
    let len = source.len();
    let mut pos = 0;

    while pos < len {
        while pos < len && is_statement_space(source[pos]) {
            pos += 1;
        }
        if pos >= len {
            break;
        }

        let rest = &source[pos..];
        if let Some(tag) = [OPEN_TAG, SHORT_OPEN_TAG, CLOSE_TAG]
            .into_iter()
            .find(|tag| rest.starts_with(tag))
        {
            pos += tag.len();
            continue;
        }

        if let Some(keyword) = OUTPUT_KEYWORDS
            .into_iter()
            .find(|kw| rest.starts_with(kw))
        {
            pos += keyword.len();
            while pos < len && matches!(source[pos], b' ' | b'\t') {
                pos += 1;
            }
            if let Some(literal) = scan_quoted(source, pos) {
                tracing::trace!(pos, terminated = literal.terminated, "output statement");
                emit(&source[literal.content]);
                pos = literal.end;
            }
            continue;
        }

        // Unrecognized statement.
        pos += rest
            .iter()
            .position(|&b| b == b';' || b == b'\n')
            .unwrap_or(rest.len());
        if source.get(pos) == Some(&b';') {
            pos += 1;
        }
    }
}
