mod chunks;
pub use chunks::{in_chunks, InChunks};

mod first;
pub use first::{first, first_or};

mod unique;
pub use unique::Unique;

use std::hash::Hash;

/// Extension methods exposing the sequence helpers on any iterator.
pub trait IterUtil: Iterator + Sized {
    /// Skips items that were already yielded. See [`Unique`].
    fn unique(self) -> Unique<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Unique::new(self)
    }

    /// Groups items into chunks of exactly `size`. See [`in_chunks`].
    fn in_chunks(self, size: usize, fill: Self::Item) -> InChunks<Self>
    where
        Self::Item: Clone,
    {
        in_chunks(self, size, fill)
    }

    /// Returns the first item matching `predicate`. See [`first`].
    fn first_match<P>(self, predicate: P) -> crate::Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        first(self, predicate)
    }
}

impl<I: Iterator> IterUtil for I {}
