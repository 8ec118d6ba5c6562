//! Small keyed containers with explicit lookup policies, plus a few
//! sequence helpers.
//!
//! [`DefaultMap`] serves a default for absent keys, optionally only for a
//! whitelist of keys. [`EnumMap`] scopes that whitelist to the members of an
//! enumeration. [`RequiredKeysMap`] refuses to be built without its required
//! keys.

#[macro_use]
mod macros;

mod error;
pub use error::{Error, MissingKeysError};

pub mod iter;
pub use iter::{first, first_or, in_chunks, InChunks, IterUtil, Unique};

pub mod map;
pub use map::{DefaultMap, EnumKey, EnumMap, RequiredKeys, RequiredKeysMap};

/// A Result type alias that uses tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
