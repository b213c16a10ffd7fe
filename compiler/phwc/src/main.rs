//! phw - run embedded-script files and snippets.

use phwc::commands::{check_file, run_code, run_file, EXIT_FAILURE, EXIT_SUCCESS};
use phwc::{init_tracing, parse_args, Invocation};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_FAILURE);
        }
    };

    let output = phw_eval::stdio_output();
    let code = match invocation {
        Invocation::Help => {
            print_usage();
            EXIT_SUCCESS
        }
        Invocation::Version => {
            println!("phw {}", env!("CARGO_PKG_VERSION"));
            EXIT_SUCCESS
        }
        Invocation::RunCode(code) => run_code(&code, &output),
        Invocation::RunFile(path) => run_file(&path, &output),
        Invocation::CheckFile(path) => check_file(&path, &output),
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Usage: phw [options] <file> [args...]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -v, --version  Show version information");
    println!("  -r <code>      Run code from the command line");
    println!("  -f <file>      Parse and execute file");
    println!("  -l             Syntax check only");
    println!();
    println!("Examples:");
    println!("  phw script.php");
    println!("  phw -r 'echo \"Hello World\";'");
}
