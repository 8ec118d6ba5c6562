mod default_map;
pub use default_map::DefaultMap;

mod enum_key;
pub use enum_key::EnumKey;

mod enum_map;
pub use enum_map::EnumMap;

mod required_keys;
pub use required_keys::{RequiredKeys, RequiredKeysMap};
