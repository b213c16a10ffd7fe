use super::*;
use pretty_assertions::assert_eq;

#[test]
fn double_quoted_literal() {
    let lit = scan_quoted(b"\"Hello\";", 0);
    assert_eq!(
        lit,
        Some(QuotedLiteral {
            quote: b'"',
            content: 1..6,
            end: 7,
            terminated: true,
        })
    );
}

#[test]
fn single_quoted_literal_at_offset() {
    let src = b"echo 'A';";
    let lit = scan_quoted(src, 5);
    let Some(lit) = lit else {
        panic!("expected a literal");
    };
    assert_eq!(&src[lit.content.clone()], b"A");
    assert_eq!(lit.end, 8);
}

#[test]
fn other_quote_kind_does_not_close() {
    let src = b"'it\"s'";
    let Some(lit) = scan_quoted(src, 0) else {
        panic!("expected a literal");
    };
    assert_eq!(&src[lit.content], b"it\"s");
    assert!(lit.terminated);
}

#[test]
fn backslash_is_not_an_escape() {
    let src = br#""a\"b""#;
    let Some(lit) = scan_quoted(src, 0) else {
        panic!("expected a literal");
    };
    assert_eq!(&src[lit.content], br"a\");
    assert_eq!(lit.end, 4);
}

#[test]
fn unterminated_runs_to_end() {
    let src = b"'abc";
    let Some(lit) = scan_quoted(src, 0) else {
        panic!("expected a literal");
    };
    assert_eq!(lit.content, 1..4);
    assert_eq!(lit.end, 4);
    assert!(!lit.terminated);
}

#[test]
fn lone_quote_at_end_is_empty_unterminated() {
    let Some(lit) = scan_quoted(b"\"", 0) else {
        panic!("expected a literal");
    };
    assert_eq!(lit.content, 1..1);
    assert!(!lit.terminated);
}

#[test]
fn non_quote_is_none() {
    assert_eq!(scan_quoted(b"abc", 0), None);
    assert_eq!(scan_quoted(b"", 0), None);
    assert_eq!(scan_quoted(b"'", 5), None);
}
