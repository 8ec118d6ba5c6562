use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tabula::{first, first_or, IterUtil};

#[test]
fn finds_first_match() {
    assert_eq!(assert_ok!(first([1, 2, 3, 4], |n| *n > 2)), 3);
}

#[test]
fn no_match_without_default_fails() {
    let err = assert_err!(first([1, 2, 3], |n| *n > 10));
    assert!(err.is_not_found());
}

#[test]
fn no_match_with_default_returns_default() {
    assert_eq!(first_or([1, 2, 3], |n| *n > 10, -1), -1);
}

#[test]
fn default_is_ignored_when_matched() {
    assert_eq!(first_or([1, 2, 3], |n| *n >= 2, -1), 2);
}

#[test]
fn falsy_default_is_returned_as_is() {
    let found = first_or(vec![Some(1), Some(2)], |n| *n == Some(9), None);
    assert_none!(found);

    assert_eq!(first_or(Vec::<i32>::new(), |_| true, 0), 0);
}

#[test]
fn empty_source_fails() {
    assert!(assert_err!(first(Vec::<i32>::new(), |_| true)).is_not_found());
}

#[test]
fn stops_at_first_match() {
    let mut pulled = 0;
    let found = (1..).inspect(|_| pulled += 1).first_match(|n| n % 5 == 0);

    assert_eq!(assert_ok!(found), 5);
    assert_eq!(pulled, 5);
}
