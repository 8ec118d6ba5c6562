use std::iter::{Fuse, FusedIterator};

/// Groups `source` into chunks of exactly `size` items.
///
/// The last chunk is padded with clones of `fill` when the source length is
/// not a multiple of `size`.
///
/// # Panics
///
/// Panics if `size` is 0.
///
/// ```
/// let chunks: Vec<_> = tabula::in_chunks("ABCDEFG".chars(), 3, 'x').collect();
/// assert_eq!(chunks, [vec!['A', 'B', 'C'], vec!['D', 'E', 'F'], vec!['G', 'x', 'x']]);
/// ```
pub fn in_chunks<I>(source: I, size: usize, fill: I::Item) -> InChunks<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert!(size != 0, "chunk size must be non-zero");

    InChunks {
        source: source.into_iter().fuse(),
        size,
        fill,
    }
}

/// Iterator returned by [`in_chunks`].
pub struct InChunks<I: Iterator> {
    source: Fuse<I>,
    size: usize,
    fill: I::Item,
}

impl<I> Iterator for InChunks<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut chunk = Vec::with_capacity(self.size);
        chunk.extend(self.source.by_ref().take(self.size));

        if chunk.is_empty() {
            return None;
        }

        chunk.resize(self.size, self.fill.clone());
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I> FusedIterator for InChunks<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
