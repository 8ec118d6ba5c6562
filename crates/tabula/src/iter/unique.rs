use std::{collections::HashSet, hash::Hash, iter::FusedIterator};

/// An iterator that yields each distinct item of its source once.
///
/// Items are compared by equality, not position. Once the source returns
/// `None` it is dropped and never polled again, so a source that would
/// resume after exhaustion is treated as exhausted. The adapter is not
/// restartable.
///
/// ```
/// use tabula::Unique;
///
/// let items: Vec<_> = Unique::new([1, 2, 2, 3, 1, 4]).collect();
/// assert_eq!(items, [1, 2, 3, 4]);
/// ```
pub struct Unique<I: Iterator> {
    source: Option<I>,
    seen: HashSet<I::Item>,
}

impl<I> Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            source: Some(source.into_iter()),
            seen: HashSet::new(),
        }
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let source = self.source.as_mut()?;

        for item in source.by_ref() {
            if self.seen.contains(&item) {
                continue;
            }

            self.seen.insert(item.clone());
            return Some(item);
        }

        self.source = None;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
}
