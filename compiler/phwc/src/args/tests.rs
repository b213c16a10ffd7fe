use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<Invocation, String> {
    let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
    parse_args(&owned)
}

#[test]
fn positional_file_runs() {
    assert_eq!(parse(&["hello.php"]), Ok(Invocation::RunFile("hello.php".into())));
}

#[test]
fn dash_f_runs_file() {
    assert_eq!(parse(&["-f", "a.php"]), Ok(Invocation::RunFile("a.php".into())));
}

#[test]
fn dash_r_runs_code() {
    assert_eq!(
        parse(&["-r", "echo 'hi';"]),
        Ok(Invocation::RunCode("echo 'hi';".into()))
    );
}

#[test]
fn code_wins_over_file() {
    assert_eq!(
        parse(&["a.php", "-r", "echo 1;"]),
        Ok(Invocation::RunCode("echo 1;".into()))
    );
}

#[test]
fn dash_l_checks_file_in_either_order() {
    assert_eq!(parse(&["-l", "a.php"]), Ok(Invocation::CheckFile("a.php".into())));
    assert_eq!(parse(&["a.php", "-l"]), Ok(Invocation::CheckFile("a.php".into())));
    assert_eq!(parse(&["-l", "-f", "b.php"]), Ok(Invocation::CheckFile("b.php".into())));
}

#[test]
fn help_and_version() {
    assert_eq!(parse(&["-h"]), Ok(Invocation::Help));
    assert_eq!(parse(&["--version"]), Ok(Invocation::Version));
    assert_eq!(parse(&["-v", "a.php"]), Ok(Invocation::Version));
}

#[test]
fn missing_option_values() {
    assert_eq!(parse(&["-r"]), Err("Code required for -r option".into()));
    assert_eq!(parse(&["-f"]), Err("File required for -f option".into()));
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(parse(&["-x"]), Err("Unknown option: -x".into()));
}

#[test]
fn nothing_to_do() {
    assert_eq!(parse(&[]), Err("No input file specified".into()));
    assert_eq!(parse(&["-l"]), Err("No input file specified".into()));
}

#[test]
fn extra_positionals_are_ignored() {
    assert_eq!(
        parse(&["a.php", "arg1", "arg2"]),
        Ok(Invocation::RunFile("a.php".into()))
    );
}
