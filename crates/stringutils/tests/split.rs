//! Integration tests for splitting and joining.

use stringutils::{Delimiter, join, split};

// =============================================================================
// split
// =============================================================================

#[test]
fn test_split_char_delimiter() {
    assert_eq!(split("Hello, World!", ' '), vec!["Hello,", "World!"]);
}

#[test]
fn test_split_string_delimiter() {
    assert_eq!(
        split("Hello::World!::My:Darling", "::"),
        vec!["Hello", "World!", "My:Darling"]
    );
}

#[test]
fn test_split_trims_pieces() {
    assert_eq!(split("  a ,\tb  , c\r\n", ','), vec!["a", "b", "c"]);
}

#[test]
fn test_split_whitespace_only_is_empty() {
    assert!(split("", ',').is_empty());
    assert!(split(" \t\r\n ", ',').is_empty());
}

#[test]
fn test_split_without_delimiter_is_single_piece() {
    assert_eq!(split("  lonely  ", ','), vec!["lonely"]);
}

#[test]
fn test_split_trailing_delimiter_adds_nothing() {
    assert_eq!(split("a, b,", ','), vec!["a", "b"]);
}

#[test]
fn test_split_keeps_interior_empty_pieces() {
    assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
    assert_eq!(split("a, , b", ','), vec!["a", "", "b"]);
}

#[test]
fn test_split_leading_delimiter_yields_empty_first_piece() {
    assert_eq!(split(",a", ','), vec!["", "a"]);
}

#[test]
fn test_split_empty_string_delimiter_never_matches() {
    assert_eq!(split(" a b ", ""), vec!["a b"]);
}

#[test]
fn test_split_multibyte_delimiter() {
    assert_eq!(split("α→β→γ", '→'), vec!["α", "β", "γ"]);
}

#[test]
fn test_split_owned_string_delimiter() {
    let d = String::from("--");
    assert_eq!(split("x--y", &d), vec!["x", "y"]);
}

// =============================================================================
// join
// =============================================================================

#[test]
fn test_join_char_delimiter() {
    assert_eq!(join(["Hello", "World!"], '-'), "Hello-World!");
}

#[test]
fn test_join_string_delimiter() {
    assert_eq!(join(["Hello", "World!"], ", "), "Hello, World!");
}

#[test]
fn test_join_empty_and_single() {
    assert_eq!(join(Vec::<String>::new(), ','), "");
    assert_eq!(join(["only"], ','), "only");
}

#[test]
fn test_join_keeps_empty_pieces() {
    assert_eq!(join(["", "a", ""], ','), ",a,");
}

#[test]
fn test_join_accepts_delimiter_value() {
    assert_eq!(join(vec!["a".to_string(), "b".to_string()], Delimiter::Str("::")), "a::b");
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_split_join_reproduces_clean_pieces() {
    let pieces = vec!["alpha", "beta", "gamma"];
    assert_eq!(split(&join(&pieces, "::"), "::"), pieces);
}

#[test]
fn test_join_split_is_idempotent() {
    let once = join(split("  a ,b,  c ", ','), ',');
    assert_eq!(once, "a,b,c");
    assert_eq!(join(split(&once, ','), ','), once);
}
