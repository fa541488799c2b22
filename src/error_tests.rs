use super::*;

#[test]
fn kind_codes_are_stable() {
    assert_eq!(ErrorKind::UnexpectedEnd.to_string(), "unexpected-end");
    assert_eq!(ErrorKind::EmptyTableName.to_string(), "empty-table-name");
    assert_eq!(
        ErrorKind::TableRedefined("a".into()).to_string(),
        "table-redefined"
    );
    assert_eq!(ErrorKind::KeyConflict("a".into()).to_string(), "key-conflict");
    assert_eq!(ErrorKind::DuplicateKey("a".into()).to_string(), "key-duplicate");
    assert_eq!(ErrorKind::MalformedNumber.to_string(), "malformed-number");
    assert_eq!(ErrorKind::MalformedDate.to_string(), "malformed-date");
    assert_eq!(ErrorKind::MalformedBool.to_string(), "malformed-bool");
    assert_eq!(ErrorKind::BadEscape('u').to_string(), "bad-escape");
    assert_eq!(ErrorKind::UnterminatedString.to_string(), "string-unterminated");
    assert_eq!(ErrorKind::UnterminatedArray.to_string(), "array-unterminated");
    assert_eq!(
        ErrorKind::HeterogeneousArray.to_string(),
        "array-heterogeneous"
    );
    assert_eq!(
        ErrorKind::UnterminatedInlineTable.to_string(),
        "inline-table-unterminated"
    );
    assert_eq!(
        ErrorKind::TrailingGarbage('x').to_string(),
        "trailing-garbage"
    );
    assert_eq!(ErrorKind::MergeConflict("k".into()).to_string(), "merge-conflict");
    assert_eq!(ErrorKind::Io("boom".into()).to_string(), "io");
}

#[test]
fn display_includes_position() {
    let err = crate::parse_str("a = 1\nb = \"oops").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnterminatedString);
    let text = err.to_string();
    assert!(text.contains("unterminated string"), "got {text:?}");
    assert!(text.contains("at line 2"), "got {text:?}");
}

#[test]
fn display_names_the_offending_key() {
    let err = crate::parse_str("[a]\nx = 1\n[a]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TableRedefined("a".into()));
    assert!(err.to_string().contains("`a`"));

    let err = crate::parse_str("k = 1\nk = 2").unwrap_err();
    assert!(err.to_string().contains("`k`"));
}

#[test]
fn io_errors_carry_no_position() {
    let io = std::io::Error::other("stream closed");
    let err = Error::from(io);
    assert_eq!(err.kind, ErrorKind::Io("stream closed".into()));
    assert!(err.line_info.is_none());
    assert!(err.line().is_none());
    assert_eq!(err.to_string(), "stream closed");
}
