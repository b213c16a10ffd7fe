use super::*;

#[test]
fn every_listed_word_is_reserved() {
    for word in RESERVED_WORDS {
        assert!(is_reserved(word), "{word} should be reserved");
    }
}

#[test]
fn statement_keywords() {
    assert!(is_reserved("echo"));
    assert!(is_reserved("print"));
    assert!(is_reserved("if"));
    assert!(is_reserved("elseif"));
    assert!(is_reserved("foreach"));
    assert!(is_reserved("function"));
    assert!(is_reserved("return"));
}

#[test]
fn long_include_forms() {
    assert!(is_reserved("include_once"));
    assert!(is_reserved("require_once"));
    assert!(is_reserved("instanceof"));
}

#[test]
fn matching_is_case_sensitive() {
    assert!(!is_reserved("Echo"));
    assert!(!is_reserved("ECHO"));
    assert!(!is_reserved("True"));
}

#[test]
fn plain_identifiers_are_not_reserved() {
    assert!(!is_reserved("x"));
    assert!(!is_reserved("echoes"));
    assert!(!is_reserved("strlen"));
    assert!(!is_reserved("_if"));
    assert!(!is_reserved(""));
    assert!(!is_reserved("include_twice"));
}

#[test]
fn lookup_rejects_by_length() {
    assert!(!is_reserved("a"));
    assert!(!is_reserved("abcdefghijklm"));
}

#[test]
fn reserved_words_table_has_no_duplicates() {
    let mut words: Vec<&str> = RESERVED_WORDS.to_vec();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), RESERVED_WORDS.len());
}
