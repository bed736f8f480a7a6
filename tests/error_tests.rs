use fmtkit::{format, FormatError, QueryError, RoundError};

#[test]
fn test_unknown_token_display() {
    let err = FormatError::UnknownToken {
        token: "ww".into(),
        position: 5,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'ww'"));
}

#[test]
fn test_timestamp_out_of_range() {
    let err = format(i64::MIN, None).unwrap_err();
    assert_eq!(err, FormatError::TimestampOutOfRange { millis: i64::MIN });
    assert!(err.to_string().contains(&i64::MIN.to_string()));
}

#[test]
fn test_round_error_display() {
    let err = RoundError::NotNumeric {
        input: "abc".into(),
    };
    assert_eq!(err.to_string(), "not a number: 'abc'");
}

#[test]
fn test_query_error_display() {
    assert!(QueryError::MissingPrefix.to_string().contains('?'));
    let err = QueryError::MalformedEscape { position: 3 };
    assert!(err.to_string().contains("position 3"));
}
