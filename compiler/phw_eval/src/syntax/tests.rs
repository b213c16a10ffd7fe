use super::*;
use std::io::Write;

#[test]
fn balanced_code_passes() {
    let source = b"<?php\nfunction f($a) {\n    return ($a);\n}\n?>\n";
    assert!(syntax_check(source));
}

#[test]
fn unmatched_brace_fails() {
    let source = b"<?php\nif (true) {\n    echo 'x';\n?>\n";
    assert!(!syntax_check(source));
}

#[test]
fn brace_inside_string_still_counts() {
    let source = b"<?php\necho \"{\";\n";
    assert!(!syntax_check(source));
}

#[test]
fn brace_inside_comment_still_counts() {
    assert!(!syntax_check(b"<?php\n// )\n"));
}

#[test]
fn text_outside_region_is_ignored() {
    let source = b"<html> { ( </html>\n<?php\necho 'ok';\n?>\n} ) trailing\n";
    assert!(syntax_check(source));
}

#[test]
fn marker_line_with_close_is_not_counted() {
    // Opened and closed on one line: the line is outside afterwards.
    assert!(syntax_check(b"<?php if (x) { ?>\n"));
}

#[test]
fn short_echo_marker_opens_region() {
    assert!(!syntax_check(b"<?= (\n"));
}

#[test]
fn no_markers_means_nothing_counted() {
    assert!(syntax_check(b"{{{ ((( \n"));
}

#[test]
fn closing_before_opening_counts_negative() {
    assert!(!syntax_check(b"<?php\n}\n"));
}

#[test]
fn empty_source_passes() {
    assert!(syntax_check(b""));
}

#[test]
fn check_file_reads_source() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("temp file: {e}"),
    };
    let _ = file.write_all(b"<?php\nfunction f() {\n");
    assert!(matches!(syntax_check_file(file.path()), Ok(false)));
}

#[test]
fn check_missing_file_is_io_error() {
    let result = syntax_check_file("/definitely/not/here.php");
    assert!(matches!(result, Err(EngineError::Io { .. })));
}
