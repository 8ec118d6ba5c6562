use super::Error;
use indexmap::IndexSet;
use std::{fmt, hash::Hash};

/// Error returned when a [`RequiredKeysMap`](crate::RequiredKeysMap) is built
/// without all of its required keys.
///
/// The missing keys stay available through [`keys`](Self::keys) so callers can
/// react to them without parsing the message.
#[derive(Clone)]
pub struct MissingKeysError<K> {
    keys: IndexSet<K>,
}

impl<K: Hash + Eq> MissingKeysError<K> {
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// The required keys that were absent.
    pub fn keys(&self) -> &IndexSet<K> {
        &self.keys
    }

    pub fn into_keys(self) -> IndexSet<K> {
        self.keys
    }
}

impl<K: Hash + Eq> PartialEq for MissingKeysError<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Hash + Eq> Eq for MissingKeysError<K> {}

impl<K: fmt::Debug> fmt::Debug for MissingKeysError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MissingKeysError")
            .field("keys", &self.keys)
            .finish()
    }
}

impl<K: fmt::Debug> fmt::Display for MissingKeysError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required keys: {:?}", self.keys)
    }
}

impl<K: fmt::Debug> std::error::Error for MissingKeysError<K> {}

/// Type-erased form stored inside [`Error`].
#[derive(Debug)]
pub(super) struct MissingKeys {
    message: Box<str>,
}

impl std::error::Error for MissingKeys {}

impl fmt::Display for MissingKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<K: fmt::Debug> From<MissingKeysError<K>> for Error {
    fn from(err: MissingKeysError<K>) -> Error {
        Error::from(super::ErrorKind::MissingKeys(MissingKeys {
            message: err.to_string().into(),
        }))
    }
}

impl Error {
    /// Returns `true` if this error came from a [`MissingKeysError`].
    pub fn is_missing_keys(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingKeys(_))
    }
}
