use super::{DefaultMap, EnumKey};
use crate::{Error, Result};

use indexmap::{map, IndexMap};
use std::fmt;

/// A read-only [`DefaultMap`] keyed by the members of an enumeration.
///
/// Lookups accept either a member or any raw value the enumeration can be
/// built from. A key that cannot be turned into a member is a miss, even when
/// a default is configured. The default only ever covers members.
pub struct EnumMap<E, V> {
    inner: DefaultMap<E, V>,
}

impl<E: EnumKey, V> EnumMap<E, V> {
    pub fn new(entries: impl IntoIterator<Item = (E, V)>) -> Self {
        Self::from_inner(DefaultMap::new(entries))
    }

    pub fn with_default(entries: impl IntoIterator<Item = (E, V)>, default: V) -> Self {
        Self::from_inner(DefaultMap::new(entries).with_default(default))
    }

    fn from_inner(inner: DefaultMap<E, V>) -> Self {
        let inner = inner
            .with_valid_keys(E::members().iter().copied())
            .named("EnumMap")
            .read_only();

        Self { inner }
    }

    /// Returns `true` if `key` is, or can be turned into, a member of `E`.
    pub fn is_valid_key<Q>(&self, key: Q) -> bool
    where
        Q: TryInto<E>,
    {
        TryInto::<E>::try_into(key).is_ok()
    }

    /// Looks up `key` after turning it into a member of `E`.
    ///
    /// Members without an entry fall back to the default, if any.
    pub fn get<Q>(&self, key: Q) -> Result<&V>
    where
        Q: TryInto<E> + fmt::Debug,
    {
        // Coercion consumes the key, so render it up front for the error.
        let rendered = format!("{key:?}");
        let Ok(member) = TryInto::<E>::try_into(key) else {
            return Err(Error::key_not_found_rendered(rendered));
        };

        self.inner.get(&member)
    }

    pub fn contains_key<Q>(&self, key: Q) -> bool
    where
        Q: TryInto<E>,
    {
        TryInto::<E>::try_into(key)
            .is_ok_and(|member| self.inner.contains_key(&member))
    }

    /// Always fails: enumeration maps are read-only.
    pub fn insert(&mut self, key: E, value: V) -> Result<Option<V>> {
        self.inner.insert(key, value)
    }

    /// Always fails: enumeration maps are read-only.
    pub fn remove(&mut self, key: E) -> Result<Option<V>> {
        self.inner.remove(&key)
    }
}

impl<E, V> EnumMap<E, V> {
    pub fn has_default(&self) -> bool {
        self.inner.has_default()
    }

    pub fn default_value(&self) -> Option<&V> {
        self.inner.default_value()
    }

    pub fn entries(&self) -> &IndexMap<E, V> {
        self.inner.entries()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, E, V> {
        self.inner.iter()
    }

    pub fn as_default_map(&self) -> &DefaultMap<E, V> {
        &self.inner
    }
}

impl<E: Clone, V: Clone> Clone for EnumMap<E, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: EnumKey, V> FromIterator<(E, V)> for EnumMap<E, V> {
    fn from_iter<T: IntoIterator<Item = (E, V)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, E, V> IntoIterator for &'a EnumMap<E, V> {
    type Item = (&'a E, &'a V);
    type IntoIter = map::Iter<'a, E, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: fmt::Debug, V: fmt::Debug> fmt::Debug for EnumMap<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
