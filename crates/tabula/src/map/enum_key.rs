use std::{fmt, hash::Hash};

/// A closed set of values usable as the key universe of an
/// [`EnumMap`](crate::EnumMap).
///
/// Raw keys reach an `EnumMap` through `TryInto<Self>`; implement `TryFrom`
/// for each raw form the enumeration accepts. The [`enum_key!`](crate::enum_key)
/// macro does both for string-valued enumerations.
pub trait EnumKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every member, in declaration order.
    fn members() -> &'static [Self];
}
