use super::*;

#[track_caller]
fn roundtrip(input: &str) {
    let parsed = DateTime::from_rfc3339(input)
        .unwrap_or_else(|| panic!("parse failed for {input:?}"));
    assert_eq!(parsed.to_string(), input, "roundtrip mismatch for {input:?}");
}

#[track_caller]
fn roundtrip_lossy(input: &str, expected: &str) {
    let parsed = DateTime::from_rfc3339(input)
        .unwrap_or_else(|| panic!("parse failed for {input:?}"));
    assert_eq!(parsed.to_string(), expected, "roundtrip mismatch for {input:?}");
}

#[track_caller]
fn expect_err(input: &str) {
    assert!(
        DateTime::from_rfc3339(input).is_none(),
        "expected error for {input:?}"
    );
}

#[test]
fn roundtrips() {
    for input in [
        "1979-05-27T07:32:00Z",
        "1979-05-27T00:32:00-07:00",
        "1979-05-27T00:32:00+21:20",
        "2000-12-17T00:32:00.123456-07:00",
        "2023-06-15T12:30:45.100000Z",
        "0000-01-01T00:00:00Z",
        "9999-12-31T23:59:59Z",
        "1979-05-27T07:32:00-00:30",
    ] {
        roundtrip(input);
    }
}

#[test]
fn lossy_roundtrips() {
    // a zero offset always prints as Z
    roundtrip_lossy("1979-05-27T07:32:00+00:00", "1979-05-27T07:32:00Z");
    roundtrip_lossy("1979-05-27T07:32:00-00:00", "1979-05-27T07:32:00Z");

    // fractional digits accumulate into one microsecond integer, printed
    // zero-padded to six digits
    roundtrip_lossy("1979-05-27T07:32:00.5Z", "1979-05-27T07:32:00.000005Z");
    roundtrip_lossy("1979-05-27T07:32:00.000000Z", "1979-05-27T07:32:00Z");
}

#[test]
fn parsed_fields() {
    let dt = DateTime::from_rfc3339("1979-05-27T07:32:13.25-08:30").unwrap();
    assert_eq!((dt.year, dt.month, dt.day), (1979, 5, 27));
    assert_eq!((dt.hour, dt.minute, dt.second), (7, 32, 13));
    assert_eq!(dt.microsecond, 25);
    assert_eq!((dt.hour_offset, dt.minute_offset), (-8, -30));

    let dt = DateTime::from_rfc3339("1979-05-27T07:32:00Z").unwrap();
    assert_eq!((dt.hour_offset, dt.minute_offset), (0, 0));
    assert_eq!(dt.microsecond, 0);
}

#[test]
fn rejects_malformed_input() {
    for input in [
        "",
        "1979-05-27",
        "07:32:00Z",
        // the offset is mandatory
        "1979-05-27T07:32:00",
        // fixed field widths
        "1979-5-27T07:32:00Z",
        "1979-05-27T7:32:00Z",
        "979-05-27T07:32:00Z",
        // separator shape
        "1979-05-27t07:32:00Z",
        "1979-05-27 07:32:00Z",
        "1979/05/27T07:32:00Z",
        // fraction needs at least one digit
        "1979-05-27T07:32:00.Z",
        "1979-05-27T07:32:00.",
        // offset shape
        "1979-05-27T07:32:00+07",
        "1979-05-27T07:32:00+0700",
        "1979-05-27T07:32:00+07:0",
        // nothing may trail the offset
        "1979-05-27T07:32:00Zx",
        "1979-05-27T07:32:00ZZ",
    ] {
        expect_err(input);
    }
}
