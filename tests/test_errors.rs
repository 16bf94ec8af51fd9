//! The error-reporting contract: positions, merging, and the exact
//! rendered text.

use presage::{parse, parse_with, parsers::*, Options};

#[test]
fn test_furthest_failure_wins() {
    // Both branches fail, but the first gets through "ab" before dying.
    // Its error, two columns in, beats the second branch's error at
    // column 1.
    let p = or(attempt(string("abc")), string("xyz"));
    let failure = parse(&p, "abq").unwrap_err();
    assert_eq!(failure.error.pos().line(), 1);
    assert_eq!(failure.error.pos().column(), 3);
    assert_eq!(
        failure.error.to_string(),
        "at line 1, column 3:\nunexpected \"q\"\nexpecting \"c\" in string \"abc\"",
    );
}

#[test]
fn test_ties_pool_their_expectations() {
    let p = choice((string("north"), string("south"), string("east"), string("west")));
    assert_eq!(
        parse(&p, "up").unwrap_err().error.to_string(),
        "at line 1, column 1:\nunexpected \"u\"\nexpecting \"east\" or \"north\" or \"south\" or \"west\"",
    );
}

#[test]
fn test_residue_from_successful_branches_survives() {
    // optional matched nothing, successfully; when the following parser
    // fails at the same spot, the report still mentions the sign.
    let p = with(optional(char('-')), digit());
    assert_eq!(
        parse(&p, "x").unwrap_err().error.to_string(),
        "at line 1, column 1:\nunexpected \"x\"\nexpecting \"-\" or digit",
    );
}

#[test]
fn test_many_residue_survives() {
    // many(alpha) ended at the '1'; the eof check fails there, and the
    // report offers both continuations.
    let p = skip(many(alpha()), eof());
    assert_eq!(
        parse(&p, "ab1").unwrap_err().error.to_string(),
        "at line 1, column 3:\nunexpected \"1\"\nexpecting end of input or letter",
    );
}

#[test]
fn test_end_of_input_phrasing() {
    assert_eq!(
        parse(&digit(), "").unwrap_err().error.to_string(),
        "at line 1, column 1:\nunexpected end of input\nexpecting digit",
    );
}

#[test]
fn test_positions_track_lines_and_tabs() {
    let p = (string("one"), newline(), string("two"));
    let failure = parse(&p, "one\ntwx").unwrap_err();
    assert_eq!(failure.error.pos().line(), 2);
    assert_eq!(failure.error.pos().column(), 3);

    // Tab advances to the next tab stop (default width 8).
    let p = (tab(), digit());
    let failure = parse(&p, "\tx").unwrap_err();
    assert_eq!(failure.error.pos().column(), 9);
}

#[test]
fn test_source_name_in_errors() {
    let failure = parse_with(
        &digit(),
        "oops",
        Options::default().source_name("numbers.txt"),
    )
    .unwrap_err();
    assert_eq!(
        failure.error.to_string(),
        "at numbers.txt, line 1, column 1:\nunexpected \"o\"\nexpecting digit",
    );
}

#[test]
fn test_fail_and_unexpected_builders() {
    let reject: FailParser<()> = fail("this grammar rejects everything");
    assert_eq!(
        parse(&reject, "anything").unwrap_err().error.to_string(),
        "at line 1, column 1:\nthis grammar rejects everything",
    );
    let comma: UnexpectedParser<()> = unexpected("trailing comma");
    assert_eq!(
        parse(&comma, ",").unwrap_err().error.to_string(),
        "at line 1, column 1:\nunexpected trailing comma",
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let p = choice((string("zebra"), string("aardvark"), string("zebra")));
    let first = parse(&p, "!").unwrap_err().error.to_string();
    for _ in 0..10 {
        assert_eq!(parse(&p, "!").unwrap_err().error.to_string(), first);
    }
    // Sorted and de-duplicated.
    assert_eq!(
        first,
        "at line 1, column 1:\nunexpected \"!\"\nexpecting \"aardvark\" or \"zebra\"",
    );
}
