use super::Error;

/// Error when a search over a sequence finds no matching element.
#[derive(Debug)]
pub(super) struct NotFoundError;

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no matching element")
    }
}

impl Error {
    /// Creates a not-found error.
    pub fn not_found() -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError))
    }

    /// Returns `true` if this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
