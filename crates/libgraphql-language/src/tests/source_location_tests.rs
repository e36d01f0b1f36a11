//! Tests for `SourceLocation` and `highlight_source_at_location`.

use crate::GraphQLSource;
use crate::SourceLocation;
use crate::highlight_source_at_location;

#[test]
fn first_character_is_line_one_column_one() {
    assert_eq!(SourceLocation::from_offset("abc", 0), SourceLocation::new(1, 1));
    assert_eq!(SourceLocation::from_offset("abc", 2), SourceLocation::new(1, 3));
    assert_eq!(SourceLocation::from_offset("", 0), SourceLocation::new(1, 1));
}

#[test]
fn every_line_terminator_starts_a_new_line() {
    assert_eq!(SourceLocation::from_offset("a\nb", 2), SourceLocation::new(2, 1));
    assert_eq!(SourceLocation::from_offset("a\rb", 2), SourceLocation::new(2, 1));
    assert_eq!(SourceLocation::from_offset("a\r\nb", 3), SourceLocation::new(2, 1));
    assert_eq!(SourceLocation::from_offset("a\u{2028}b", 4), SourceLocation::new(2, 1));
    assert_eq!(SourceLocation::from_offset("a\u{2029}b", 4), SourceLocation::new(2, 1));
    assert_eq!(
        SourceLocation::from_offset("a\n\r\n\rb", 5),
        SourceLocation::new(4, 1),
    );
}

#[test]
fn terminator_at_the_offset_does_not_count() {
    assert_eq!(SourceLocation::from_offset("ab\ncd", 2), SourceLocation::new(1, 3));
}

#[test]
fn columns_count_characters_not_bytes() {
    // `é` is two bytes, `日` three.
    assert_eq!(SourceLocation::from_offset("é x", 3), SourceLocation::new(1, 3));
    assert_eq!(SourceLocation::from_offset("\n日本 y", 8), SourceLocation::new(2, 4));
}

#[test]
fn offsets_past_the_end_are_clamped() {
    assert_eq!(SourceLocation::from_offset("ab\ncd", 99), SourceLocation::new(2, 3));
}

#[test]
fn highlights_first_line_without_previous_line() {
    let source = GraphQLSource::new("query");
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(1, 6)),
        "1: query\n        ^\n",
    );
}

#[test]
fn highlights_previous_current_and_next_lines() {
    let source = GraphQLSource::new("a\r\nb\r\nc");
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(2, 1)),
        "1: a\n2: b\n   ^\n3: c\n",
    );
}

#[test]
fn gutter_is_as_wide_as_the_next_line_number() {
    let body = (1..=10)
        .map(|line| format!("line{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let source = GraphQLSource::new(body);
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(9, 3)),
        " 8: line8\n 9: line9\n      ^\n10: line10\n",
    );
}

#[test]
fn trailing_terminator_yields_an_empty_last_line() {
    let source = GraphQLSource::new("{\n");
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(1, 2)),
        "1: {\n    ^\n2: \n",
    );
}
