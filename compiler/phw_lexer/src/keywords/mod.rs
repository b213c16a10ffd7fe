//! Reserved-word classification.
//!
//! An identifier is relabeled as a keyword after scanning if its text
//! exactly matches one of [`RESERVED_WORDS`]. Matching is case-sensitive.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (reserved words range from 2 to 12 bytes), then matches against the
//! words of that length.

/// Every reserved word, in no particular order.
pub const RESERVED_WORDS: &[&str] = &[
    "echo", "print", "if", "else", "elseif", "while", "for", "foreach",
    "function", "class", "interface", "trait", "namespace", "use",
    "return", "break", "continue", "switch", "case", "default",
    "try", "catch", "finally", "throw", "new", "clone", "instanceof",
    "public", "private", "protected", "static", "abstract", "final",
    "const", "var", "global", "unset", "isset", "empty",
    "include", "require", "include_once", "require_once",
    "and", "or", "xor", "not", "true", "false", "null",
    "array", "object", "string", "int", "float", "bool", "mixed",
    "void", "self", "parent", "this",
];

/// Returns `true` if `text` is a reserved word.
#[inline]
pub fn is_reserved(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all reserved words are 2-12 chars and start with a lowercase letter
    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "if" | "or"),
        3 => matches!(
            text,
            "for" | "use" | "try" | "new" | "var" | "and" | "xor" | "not" | "int"
        ),
        4 => matches!(
            text,
            "echo" | "else" | "case" | "this" | "true" | "null" | "bool" | "void" | "self"
        ),
        5 => matches!(
            text,
            "print"
                | "while"
                | "class"
                | "trait"
                | "break"
                | "catch"
                | "throw"
                | "clone"
                | "final"
                | "const"
                | "unset"
                | "isset"
                | "empty"
                | "false"
                | "array"
                | "float"
                | "mixed"
        ),
        6 => matches!(
            text,
            "elseif"
                | "return"
                | "switch"
                | "public"
                | "static"
                | "global"
                | "object"
                | "string"
                | "parent"
        ),
        7 => matches!(
            text,
            "foreach" | "default" | "finally" | "private" | "include" | "require"
        ),
        8 => matches!(text, "function" | "continue" | "abstract"),
        9 => matches!(text, "interface" | "namespace" | "protected"),
        10 => text == "instanceof",
        12 => matches!(text, "include_once" | "require_once"),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
