// Utils module tests.

use super::*;

#[test]
fn test_char_len_counts_characters_not_bytes() {
    assert_eq!(char_len("café"), 4);
    assert_eq!("café".len(), 5);
    assert_eq!(char_len(""), 0);
}

#[test]
fn test_round1() {
    assert_eq!(round1(3.14159), 3.1);
    assert_eq!(round1(2.25), 2.3);
    assert_eq!(round1(0.0), 0.0);
    assert_eq!(round1(100.0), 100.0);
}

#[test]
fn test_deduct_floors_at_zero() {
    assert_eq!(deduct(100, 20), 80);
    assert_eq!(deduct(5, 20), 0);
    assert_eq!(deduct(0, 0), 0);
}

#[test]
fn test_plural() {
    assert_eq!(plural(0), "s");
    assert_eq!(plural(1), "");
    assert_eq!(plural(2), "s");
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  Main\n   heading\t "), "Main heading");
    assert_eq!(collapse_whitespace(" \n "), "");
}
