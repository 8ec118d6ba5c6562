mod key_not_found;
mod missing_keys;
mod not_found;
mod read_only;

use key_not_found::KeyNotFoundError;
use missing_keys::MissingKeys;
use not_found::NotFoundError;
use read_only::ReadOnlyError;
use std::sync::Arc;

pub use missing_keys::MissingKeysError;

/// An error returned by the tabula containers and sequence helpers.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    KeyNotFound(KeyNotFoundError),
    ReadOnly(ReadOnlyError),
    MissingKeys(MissingKeys),
    NotFound(NotFoundError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            KeyNotFound(err) => core::fmt::Display::fmt(err, f),
            ReadOnly(err) => core::fmt::Display::fmt(err, f),
            MissingKeys(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}
