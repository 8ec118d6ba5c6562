use super::Error;

/// Error when a lookup finds neither an entry nor an applicable default.
#[derive(Debug)]
pub(super) struct KeyNotFoundError {
    key: Box<str>,
}

impl std::error::Error for KeyNotFoundError {}

impl core::fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "key not found: {}", self.key)
    }
}

impl Error {
    /// Creates a key-not-found error.
    ///
    /// The key is rendered with its `Debug` representation.
    pub fn key_not_found(key: impl core::fmt::Debug) -> Error {
        Error::key_not_found_rendered(format!("{key:?}"))
    }

    /// Same as [`key_not_found`](Self::key_not_found), for a key already
    /// rendered with `Debug`.
    pub(crate) fn key_not_found_rendered(key: String) -> Error {
        Error::from(super::ErrorKind::KeyNotFound(KeyNotFoundError {
            key: key.into(),
        }))
    }

    /// Returns `true` if this error is a key-not-found error.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyNotFound(_))
    }
}
