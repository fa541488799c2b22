use crate::table::Table;

#[track_caller]
fn parse_ok(input: &str) -> Table {
    crate::parse_str(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

/// Print, reparse, and require a structurally equal tree.
#[track_caller]
fn assert_round_trip(input: &str) {
    let first = parse_ok(input);
    let printed = first.to_string();
    let second = crate::parse_str(&printed)
        .unwrap_or_else(|e| panic!("reparse failed for {printed:?}: {e}"));
    assert_eq!(first, second, "round trip changed the tree for {input:?}");
}

#[test]
fn scalar_assignments() {
    let root = parse_ok("b = 1\na = \"x\"");
    assert_eq!(root.to_string(), "b = 1\na = \"x\"\n");

    assert_eq!(parse_ok("f = true").to_string(), "f = true\n");
    assert_eq!(
        parse_ok("t = 1979-05-27T07:32:00Z").to_string(),
        "t = 1979-05-27T07:32:00Z\n"
    );
    assert_eq!(
        parse_ok("t = 1979-05-27T07:32:00.5+07:30").to_string(),
        "t = 1979-05-27T07:32:00.000005+07:30\n"
    );
}

#[test]
fn floats_always_reparse_as_floats() {
    assert_eq!(parse_ok("pi = 3.14").to_string(), "pi = 3.14\n");
    // the shortest form of 3.0 would re-parse as an integer without the guard
    assert_eq!(parse_ok("x = 3.0").to_string(), "x = 3.0\n");
    assert_eq!(parse_ok("x = -1e3").to_string(), "x = -1000.0\n");
}

#[test]
fn string_escaping() {
    let mut root = Table::new();
    root.insert("s", "a\\b \"c\"\nd");
    assert_eq!(root.to_string(), "s = \"a\\\\b \\\"c\\\"\\nd\"\n");
    assert_round_trip(&root.to_string());
}

#[test]
fn arrays_print_inline() {
    assert_eq!(parse_ok("a = [1, 2, 3]").to_string(), "a = [ 1, 2, 3 ]\n");
    assert_eq!(
        parse_ok("a = [[1], [2, 3]]").to_string(),
        "a = [ [ 1 ], [ 2, 3 ] ]\n"
    );
}

#[test]
fn sub_tables_print_under_headers() {
    let root = parse_ok("x = 1\n[srv]\nhost = \"h\"\nport = 80");
    assert_eq!(
        root.to_string(),
        "x = 1\n[srv]\n\thost = \"h\"\n\tport = 80\n"
    );

    // direct entries always precede sub-table sections
    let root = parse_ok("[srv]\nhost = \"h\"\nx = 1");
    assert_eq!(root.to_string(), "x = 1\n[srv]\n\thost = \"h\"\n");

    // nested tables get dotted headers, one tab deeper per level
    let root = parse_ok("[a.b]\nk = 1");
    assert_eq!(root.to_string(), "[a]\n\t[a.b]\n\t\tk = 1\n");
}

#[test]
fn table_arrays_print_repeated_headers() {
    let root = parse_ok("[[p]]\nx = 1\n[[p]]\nx = 2");
    assert_eq!(root.to_string(), "[[p]]\n\tx = 1\n[[p]]\n\tx = 2\n");
}

#[test]
fn inline_tables_print_as_sections() {
    let root = parse_ok("t = {a = 1}");
    assert_eq!(root.to_string(), "[t]\n\ta = 1\n");
    assert_round_trip("t = {a = 1, b = \"x\"}");
}

#[test]
fn round_trips() {
    for input in [
        "",
        "a = 1",
        "s = \"quote \\\" backslash \\\\ newline \\n\"",
        "pi = 3.14\nbig = 1e200\nneg = -0.5",
        "flag = true\noff = false",
        "t = 1979-05-27T07:32:00Z\nu = 1979-05-27T07:32:00.25-06:00",
        "empty = []\nints = [1, 2, 3]\nnested = [[1], [\"x\", \"y\"]]",
        "[a.b.c]\nd = 1\n[a.x]\ny = 2",
        "[[pts]]\nx = 1\n[[pts]]\nx = 2\n[[pts]]\nx = 3",
        "[[fruit]]\nname = \"apple\"\n[fruit.physical]\ncolor = \"red\"",
        "root = 1\n[t]\nmid = 2\n[t.deep]\nleaf = [1, 2]",
    ] {
        assert_round_trip(input);
    }
}
