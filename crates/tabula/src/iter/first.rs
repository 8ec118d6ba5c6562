use crate::{Error, Result};

/// Returns the first item of `source` matching `predicate`.
///
/// Fails with a not-found error when nothing matches. Use [`first_or`] to
/// supply a fallback instead.
///
/// ```
/// let found = tabula::first([1, 2, 3, 4], |n| *n > 2).unwrap();
/// assert_eq!(found, 3);
///
/// assert!(tabula::first([1, 2, 3], |n| *n > 10).unwrap_err().is_not_found());
/// ```
pub fn first<I, P>(source: I, predicate: P) -> Result<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().find(predicate).ok_or_else(Error::not_found)
}

/// Returns the first item of `source` matching `predicate`, or `default`.
pub fn first_or<I, P>(source: I, predicate: P, default: I::Item) -> I::Item
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().find(predicate).unwrap_or(default)
}
