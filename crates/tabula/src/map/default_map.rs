use crate::{Error, Result};

use indexmap::{map, IndexMap, IndexSet};
use std::{borrow::Borrow, fmt, hash::Hash};

/// A map that can answer lookups for absent keys with a default value.
///
/// The default is only served for keys accepted by the valid-key set. When
/// no valid-key set is configured every key is accepted; an empty set accepts
/// none. A map built with [`read_only`](Self::read_only) rejects every
/// mutation.
///
/// ```
/// use tabula::DefaultMap;
///
/// let limits = DefaultMap::new([("burst", 20)])
///     .with_default(5)
///     .with_valid_keys(["burst", "steady"]);
///
/// assert_eq!(*limits.get("burst").unwrap(), 20);
/// assert_eq!(*limits.get("steady").unwrap(), 5);
/// assert!(limits.get("other").unwrap_err().is_key_not_found());
/// ```
#[derive(Clone)]
pub struct DefaultMap<K, V> {
    entries: IndexMap<K, V>,

    /// Keys allowed to receive the default. `None` allows every key.
    valid_keys: Option<IndexSet<K>>,

    /// `None` means no default is configured.
    default: Option<V>,

    read_only: bool,

    /// Container name used when rendering and in read-only errors.
    name: &'static str,
}

impl<K, V> DefaultMap<K, V>
where
    K: Hash + Eq,
{
    pub fn new(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            valid_keys: None,
            default: None,
            read_only: false,
            name: "DefaultMap",
        }
    }

    /// Sets the value returned for absent keys.
    pub fn with_default(mut self, default: V) -> Self {
        self.default = Some(default);
        self
    }

    /// Restricts the default to the given keys.
    pub fn with_valid_keys(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.valid_keys = Some(keys.into_iter().collect());
        self
    }

    /// Rejects all mutation from here on.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub(crate) fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Returns the entry for `key`, or the default when one is configured and
    /// `key` is valid.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        match self.entries.get(key) {
            Some(value) => Ok(value),
            None => self.missing(key),
        }
    }

    fn missing<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        match &self.default {
            Some(default) if self.is_valid_key(key) => {
                tracing::trace!(map = self.name, ?key, "serving default for absent key");
                Ok(default)
            }
            _ => Err(Error::key_not_found(key)),
        }
    }

    /// Inserts or overwrites an entry, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.check_writable()?;
        Ok(self.entries.insert(key, value))
    }

    /// Removes an entry, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.check_writable()?;
        Ok(self.entries.shift_remove(key))
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            tracing::debug!(map = self.name, "rejected write to read-only map");
            return Err(Error::read_only(self.name));
        }
        Ok(())
    }

    /// Returns `true` if `key` may receive the default.
    pub fn is_valid_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.valid_keys
            .as_ref()
            .map_or(true, |valid_keys| valid_keys.contains(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V> DefaultMap<K, V> {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    pub fn valid_keys(&self) -> Option<&IndexSet<K>> {
        self.valid_keys.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The stored entries. Defaults are never materialized here.
    pub fn entries(&self) -> &IndexMap<K, V> {
        &self.entries
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

    pub fn keys(&self) -> map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> map::Values<'_, K, V> {
        self.entries.values()
    }
}

impl<K, V> Default for DefaultMap<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            valid_keys: None,
            default: None,
            read_only: false,
            name: "DefaultMap",
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for DefaultMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, K, V> IntoIterator for &'a DefaultMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DefaultMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        f.debug_map().entries(self.entries.iter()).finish()?;
        f.write_str(", default=")?;
        match &self.default {
            Some(default) => fmt::Debug::fmt(default, f)?,
            None => f.write_str("<unset>")?,
        }
        f.write_str(")")
    }
}
