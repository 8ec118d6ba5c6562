use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;
use std_util::prelude::*;
use tabula::DefaultMap;

fn limits() -> DefaultMap<&'static str, u32> {
    DefaultMap::new([("burst", 20), ("steady", 10)])
}

// ---------------------------------------------------------------------------
// Lookup without a default
// ---------------------------------------------------------------------------

#[test]
fn get_present_key() {
    let map = limits();
    assert_eq!(*assert_ok!(map.get("burst")), 20);
}

#[test]
fn get_absent_key_without_default_fails() {
    let map = limits();
    let err = assert_err!(map.get("idle"));
    assert!(err.is_key_not_found());
    assert_eq!(err.to_string(), "key not found: \"idle\"");
}

#[test]
fn no_default_configured() {
    let map = limits();
    assert!(!map.has_default());
    assert_none!(map.default_value());
}

// ---------------------------------------------------------------------------
// Lookup with a default
// ---------------------------------------------------------------------------

#[test]
fn unrestricted_default_covers_any_key() {
    let map = limits().with_default(1);
    assert!(map.has_default());
    assert_eq!(*assert_ok!(map.get("idle")), 1);
    assert_eq!(*assert_ok!(map.get("anything at all")), 1);
}

#[test]
fn restricted_default_covers_valid_keys_only() {
    let map = limits().with_default(1).with_valid_keys(["idle"]);

    assert_eq!(*assert_ok!(map.get("idle")), 1);
    assert!(assert_err!(map.get("other")).is_key_not_found());
}

#[test]
fn present_entry_wins_over_default_even_for_invalid_key() {
    let map = limits().with_default(1).with_valid_keys(["idle"]);
    assert_eq!(*assert_ok!(map.get("burst")), 20);
}

#[test]
fn empty_valid_keys_is_not_unrestricted() {
    let map = limits().with_default(1).with_valid_keys([]);

    assert!(!map.is_valid_key("idle"));
    assert!(assert_err!(map.get("idle")).is_key_not_found());
}

#[test]
fn falsy_default_is_still_a_default() {
    let map: DefaultMap<&str, Option<u32>> = DefaultMap::new([]).with_default(None);

    assert!(map.has_default());
    assert_eq!(*assert_ok!(map.get("x")), None);

    let zero = DefaultMap::<&str, u32>::new([]).with_default(0);
    assert_eq!(*assert_ok!(zero.get("x")), 0);
}

#[test]
fn is_valid_key_without_restriction() {
    let map = limits();
    assert!(map.is_valid_key("burst"));
    assert!(map.is_valid_key("never seen"));
    assert_none!(map.valid_keys());
}

#[test]
fn default_is_not_materialized() {
    let map = limits().with_default(1);
    assert_ok!(map.get("idle"));

    assert!(!map.contains_key("idle"));
    assert_eq!(map.len(), 2);
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

#[test]
fn insert_overwrites() {
    let mut map = limits();

    assert_eq!(assert_ok!(map.insert("burst", 30)), Some(20));
    assert_eq!(assert_ok!(map.insert("idle", 0)), None);
    assert_eq!(*assert_ok!(map.get("burst")), 30);
    assert_eq!(*assert_ok!(map.get("idle")), 0);
}

#[test]
fn remove_entry() {
    let mut map = limits().with_default(1);

    assert_eq!(assert_ok!(map.remove("burst")), Some(20));
    assert_eq!(*assert_ok!(map.get("burst")), 1);
}

#[test]
fn read_only_rejects_insert() {
    let mut map = limits().read_only();

    let err = assert_err!(map.insert("burst", 99));
    assert!(err.is_read_only());
    assert_eq!(err.to_string(), "DefaultMap is read-only");
    assert_eq!(*assert_ok!(map.get("burst")), 20);
}

#[test]
fn read_only_rejects_remove() {
    let mut map = limits().read_only();

    assert!(assert_err!(map.remove("steady")).is_read_only());
    assert!(map.contains_key("steady"));
}

// ---------------------------------------------------------------------------
// Rendering and iteration
// ---------------------------------------------------------------------------

#[test]
fn debug_renders_entries_and_default() {
    let map = limits().with_default(1);
    assert_eq!(
        format!("{map:?}"),
        "DefaultMap({\"burst\": 20, \"steady\": 10}, default=1)"
    );
}

#[test]
fn debug_renders_unset_default() {
    let map = DefaultMap::new([(1, "one")]);
    assert_eq!(format!("{map:?}"), "DefaultMap({1: \"one\"}, default=<unset>)");
}

#[test]
fn iterate_entries() {
    let map: DefaultMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();

    let pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, [("a", 1), ("b", 2)]);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(map.values().sum::<i32>(), 3);
}

#[test]
fn default_map_is_empty() {
    let map = DefaultMap::<String, u8>::default();
    assert!(map.is_empty());
    assert!(!map.is_read_only());
    assert_empty!(map.entries().keys().collect::<Vec<_>>());
}

#[test]
fn owned_keys_look_up_by_borrowed_form() {
    let map = DefaultMap::new([(String::from("burst"), 20)]).with_default(5);

    assert_eq!(*assert_ok!(map.get("burst")), 20);
    assert_eq!(*assert_ok!(map.get("other")), 5);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_entries() -> impl Strategy<Value = Vec<(u8, i32)>> {
    prop::collection::vec((0u8..32, any::<i32>()), 0..16)
}

proptest! {
    #[test]
    fn unset_default_misses_every_absent_key(entries in arb_entries(), key in 0u8..64) {
        let map = DefaultMap::new(entries);
        prop_assume!(!map.contains_key(&key));

        prop_assert!(map.get(&key).unwrap_err().is_key_not_found());
    }

    #[test]
    fn unrestricted_default_serves_every_absent_key(
        entries in arb_entries(),
        key in 0u8..64,
        default in any::<i32>(),
    ) {
        let map = DefaultMap::new(entries).with_default(default);
        prop_assume!(!map.contains_key(&key));

        prop_assert_eq!(*map.get(&key).unwrap(), default);
    }

    #[test]
    fn restricted_default_follows_valid_keys(
        entries in arb_entries(),
        valid in prop::collection::hash_set(0u8..64, 0..8),
        key in 0u8..64,
    ) {
        let map = DefaultMap::new(entries)
            .with_default(-1)
            .with_valid_keys(valid.iter().copied());
        prop_assume!(!map.contains_key(&key));

        match map.get(&key) {
            Ok(value) => {
                prop_assert!(valid.contains(&key));
                prop_assert_eq!(*value, -1);
            }
            Err(err) => {
                prop_assert!(!valid.contains(&key));
                prop_assert!(err.is_key_not_found());
            }
        }
    }

    #[test]
    fn read_only_insert_leaves_entries_unchanged(
        entries in arb_entries(),
        key in any::<u8>(),
        value in any::<i32>(),
    ) {
        let mut map = DefaultMap::new(entries).read_only();
        let before = map.entries().clone();

        prop_assert!(map.insert(key, value).unwrap_err().is_read_only());
        prop_assert_eq!(map.entries(), &before);
    }

    #[test]
    fn repeated_get_is_stable(
        entries in arb_entries(),
        keys in prop::collection::vec(0u8..64, 1..8),
    ) {
        let map = DefaultMap::new(entries).with_default(7).with_valid_keys(0u8..16);
        let seen: HashSet<u8> = keys.iter().copied().collect();

        for key in seen {
            let first = map.get(&key).ok().copied();
            let second = map.get(&key).ok().copied();
            prop_assert_eq!(first, second);
        }
    }
}
