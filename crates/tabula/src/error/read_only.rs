use super::Error;

#[derive(Debug)]
pub(super) struct ReadOnlyError {
    container: &'static str,
}

impl std::error::Error for ReadOnlyError {}

impl core::fmt::Display for ReadOnlyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} is read-only", self.container)
    }
}

impl Error {
    /// Creates a read-only error.
    ///
    /// Returned when an insert or removal is attempted on a container that was
    /// built read-only. The container is left untouched.
    pub fn read_only(container: &'static str) -> Error {
        Error::from(super::ErrorKind::ReadOnly(ReadOnlyError { container }))
    }

    /// Returns `true` if this error is a read-only error.
    pub fn is_read_only(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ReadOnly(_))
    }
}
