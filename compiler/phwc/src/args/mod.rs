//! Hand-rolled argument parsing.

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    /// `-r <code>`
    RunCode(String),
    /// `<file>` or `-f <file>`
    RunFile(String),
    /// `-l <file>`
    CheckFile(String),
}

/// Parse arguments, excluding the program name.
///
/// `-h` and `-v` win as soon as they are seen. Inline code takes precedence
/// over a file. Returns the message to print on misuse.
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut code: Option<String> = None;
    let mut file: Option<String> = None;
    let mut lint = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-v" | "--version" => return Ok(Invocation::Version),
            "-r" => match iter.next() {
                Some(snippet) => code = Some(snippet.clone()),
                None => return Err("Code required for -r option".to_string()),
            },
            "-f" => match iter.next() {
                Some(path) => file = Some(path.clone()),
                None => return Err("File required for -f option".to_string()),
            },
            "-l" => lint = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("Unknown option: {other}"));
            }
            // Anything after the script path is left for the script.
            path => {
                if file.is_none() {
                    file = Some(path.to_string());
                }
            }
        }
    }

    match (code, file) {
        (Some(code), _) => Ok(Invocation::RunCode(code)),
        (None, Some(path)) if lint => Ok(Invocation::CheckFile(path)),
        (None, Some(path)) => Ok(Invocation::RunFile(path)),
        (None, None) => Err("No input file specified".to_string()),
    }
}

#[cfg(test)]
mod tests;
