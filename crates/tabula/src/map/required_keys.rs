use crate::{Error, MissingKeysError, Result};

use indexmap::{map, IndexMap, IndexSet};
use std::{borrow::Borrow, fmt, hash::Hash};

/// Declares the keys a [`RequiredKeysMap`] must be built with.
///
/// ```
/// use indexmap::IndexSet;
/// use tabula::{RequiredKeys, RequiredKeysMap};
///
/// struct Credentials;
///
/// impl RequiredKeys for Credentials {
///     type Key = &'static str;
///
///     fn required_keys() -> IndexSet<&'static str> {
///         IndexSet::from(["user", "token"])
///     }
/// }
///
/// let err = RequiredKeysMap::for_schema::<Credentials>([("user", "ana")]).unwrap_err();
/// assert_eq!(err.keys(), &IndexSet::from(["token"]));
/// ```
pub trait RequiredKeys {
    type Key: Hash + Eq;

    fn required_keys() -> IndexSet<Self::Key>;
}

/// A mutable map that cannot be constructed without its required keys.
///
/// The check runs once, at construction. Later inserts and removals are not
/// re-checked; call [`validate`](Self::validate) to re-run it.
#[derive(Clone)]
pub struct RequiredKeysMap<K, V> {
    entries: IndexMap<K, V>,
    required: IndexSet<K>,
}

impl<K, V> RequiredKeysMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Builds the map, failing with the full set of absent required keys.
    pub fn new(
        required: impl IntoIterator<Item = K>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> core::result::Result<Self, MissingKeysError<K>> {
        let map = Self {
            entries: entries.into_iter().collect(),
            required: required.into_iter().collect(),
        };

        if let Err(err) = map.validate() {
            tracing::debug!(
                missing = err.keys().len(),
                required = map.required.len(),
                "rejected map with missing required keys"
            );
            return Err(err);
        }

        Ok(map)
    }

    /// Builds the map using the required keys declared by `S`.
    pub fn for_schema<S>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> core::result::Result<Self, MissingKeysError<K>>
    where
        S: RequiredKeys<Key = K>,
    {
        Self::new(S::required_keys(), entries)
    }

    /// Required keys currently absent from the entries.
    pub fn missing_keys(&self) -> IndexSet<K> {
        self.required
            .iter()
            .filter(|key| !self.entries.contains_key(*key))
            .cloned()
            .collect()
    }

    /// Checks that every required key is present.
    pub fn validate(&self) -> core::result::Result<(), MissingKeysError<K>> {
        let missing = self.missing_keys();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingKeysError::new(missing))
        }
    }
}

impl<K, V> RequiredKeysMap<K, V>
where
    K: Hash + Eq,
{
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Removes an entry. Removing a required key is allowed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.shift_remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V> RequiredKeysMap<K, V> {
    pub fn required_keys(&self) -> &IndexSet<K> {
        &self.required
    }

    pub fn entries(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for RequiredKeysMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq<IndexMap<K, V>> for RequiredKeysMap<K, V> {
    fn eq(&self, other: &IndexMap<K, V>) -> bool {
        self.entries == *other
    }
}

impl<'a, K, V> IntoIterator for &'a RequiredKeysMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RequiredKeysMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RequiredKeysMap(")?;
        f.debug_map().entries(self.entries.iter()).finish()?;
        f.write_str(")")
    }
}
