use super::*;
use phw_eval::buffer_output;
use pretty_assertions::assert_eq;
use std::io::Write;

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("temp file: {e}"),
    };
    if let Err(e) = file.write_all(contents.as_bytes()) {
        panic!("write temp file: {e}");
    }
    file
}

fn path_of(file: &tempfile::NamedTempFile) -> String {
    file.path().display().to_string()
}

#[test]
fn run_code_writes_output() {
    let output = buffer_output();
    assert_eq!(run_code("echo 'hi'; print \"!\";", &output), EXIT_SUCCESS);
    assert_eq!(output.stdout_text(), "hi!");
    assert_eq!(output.stderr_text(), "");
}

#[test]
fn run_file_writes_output() {
    let file = source_file("<?php\necho \"Hello\";\n?>\n");
    let output = buffer_output();
    assert_eq!(run_file(&path_of(&file), &output), EXIT_SUCCESS);
    assert_eq!(output.stdout_text(), "Hello");
}

#[test]
fn run_missing_file_fails() {
    let output = buffer_output();
    assert_eq!(run_file("/no/such/script.php", &output), EXIT_FAILURE);
    let stderr = output.stderr_text();
    assert!(stderr.contains("Failed to open file /no/such/script.php"));
    assert!(stderr.ends_with("Failed to execute /no/such/script.php\n"));
}

#[test]
fn check_balanced_file() {
    let file = source_file("<?php\nif (true) {\n}\n?>\n");
    let path = path_of(&file);
    let output = buffer_output();
    assert_eq!(check_file(&path, &output), EXIT_SUCCESS);
    assert_eq!(
        output.stdout_text(),
        format!("No syntax errors detected in {path}\n")
    );
}

#[test]
fn check_unbalanced_file() {
    let file = source_file("<?php\necho \"{\";\n");
    let path = path_of(&file);
    let output = buffer_output();
    assert_eq!(check_file(&path, &output), EXIT_FAILURE);
    assert_eq!(output.stderr_text(), format!("Syntax error in {path}\n"));
    assert_eq!(output.stdout_text(), "");
}

#[test]
fn check_missing_file_is_syntax_error() {
    let output = buffer_output();
    assert_eq!(check_file("/no/such/file.php", &output), EXIT_FAILURE);
    assert_eq!(output.stderr_text(), "Syntax error in /no/such/file.php\n");
}
