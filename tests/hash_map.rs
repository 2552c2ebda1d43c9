// HashMap integration suite.
//
// Each test names the behavior it verifies. Invariants exercised:
// - Round trip: `get(k)` returns the text of the last value set for `k`.
// - Size accounting: `len` counts distinct keys, across resizes.
// - Resize: capacity doubles once the load factor is exceeded and no entry
//   is lost.
// - Clear: the map behaves as freshly built afterwards.
// - Rendering: `{}` when empty, one `k -> v` per line otherwise.
use chained_hashmap::{ConfigError, HashMap, TableConfig};

fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

#[test]
fn defaults() {
    let m = HashMap::new();
    assert_eq!(m.capacity(), 16);
    assert_eq!(m.load_factor(), 0.75);
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
    assert!(m.keys().is_empty());
    assert!(m.values().is_empty());
    assert!(m.entries().is_empty());
}

#[test]
fn set_get_has_remove() {
    let mut m = HashMap::new();
    m.set("apple", "red").unwrap();
    m.set("banana", "yellow").unwrap();

    assert_eq!(m.get("apple").unwrap(), Some("red"));
    assert!(m.has("banana").unwrap());
    assert!(!m.has("cherry").unwrap());

    assert!(m.remove("apple").unwrap());
    assert!(!m.has("apple").unwrap());
    assert_eq!(m.get("apple").unwrap(), None);
    assert_eq!(m.len(), 1);
}

// Test: removing a key that was never inserted.
// Verifies: returns false and leaves the size alone.
#[test]
fn remove_absent_key() {
    let mut m = HashMap::new();
    m.set("a", 1).unwrap();
    assert!(!m.remove("b").unwrap());
    assert_eq!(m.len(), 1);
}

// Test: re-setting a key.
// Verifies: value is replaced in place and len is unchanged.
#[test]
fn reset_updates_value_only() {
    let mut m = HashMap::new();
    m.set("k", "old").unwrap();
    m.set("k", "new").unwrap();
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("k").unwrap(), Some("new"));
}

// Test: the 13th distinct key at capacity 16 and load factor 0.75.
// Verifies: capacity becomes 32 and every key is still retrievable.
#[test]
fn thirteenth_key_triggers_resize() {
    init_test_logger();
    let config = TableConfig::new().with_capacity(16).with_load_factor(0.75);
    let mut m = HashMap::with_config(config).unwrap();
    let keys: Vec<String> = (0..13).map(|i| format!("key-{i}")).collect();

    for (i, k) in keys.iter().enumerate() {
        m.set(k, i).unwrap();
        if i < 12 {
            assert_eq!(m.capacity(), 16, "no resize before the 13th key");
        }
    }
    assert_eq!(m.capacity(), 32);
    assert_eq!(m.len(), 13);
    for (i, k) in keys.iter().enumerate() {
        assert_eq!(m.get(k).unwrap(), Some(i.to_string().as_str()));
    }
}

// Test: many inserts through several resizes.
// Verifies: len and lookups agree with what was inserted.
#[test]
fn many_resizes_keep_everything() {
    init_test_logger();
    let mut m = HashMap::new();
    for i in 0..1_000 {
        m.set(i, i * 2).unwrap();
    }
    assert_eq!(m.len(), 1_000);
    assert_eq!(m.capacity(), 2048);
    assert!(!m.is_loaded());
    for i in 0..1_000 {
        assert_eq!(m.get(i).unwrap(), Some((i * 2).to_string().as_str()));
    }
    for i in (0..1_000).step_by(2) {
        assert!(m.remove(i).unwrap());
    }
    assert_eq!(m.len(), 500);
    // Removal never shrinks.
    assert_eq!(m.capacity(), 2048);
}

// Test: clear followed by reuse.
// Verifies: queries come back empty, capacity is kept, inserts work again.
#[test]
fn clear_then_reuse() {
    let mut m = HashMap::new();
    for i in 0..20 {
        m.set(format!("k{i}"), i).unwrap();
    }
    let cap = m.capacity();
    m.clear();
    assert_eq!(m.len(), 0);
    assert_eq!(m.capacity(), cap);
    assert_eq!(m.get("k1").unwrap(), None);
    assert!(!m.has("k1").unwrap());
    assert!(m.keys().is_empty());
    assert_eq!(m.to_string(), "{}");

    m.set("fresh", "yes").unwrap();
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("fresh").unwrap(), Some("yes"));
}

#[test]
fn renders_pairs() {
    let mut m = HashMap::new();
    assert_eq!(m.to_string(), "{}");
    m.set("a", "1").unwrap();
    m.set("b", "2").unwrap();
    assert_eq!(m.to_string(), "{\n  a -> 1,\n  b -> 2\n}");
}

// Test: projections are consistent with each other.
// Verifies: keys/values/entries line up element by element.
#[test]
fn projections_line_up() {
    let mut m = HashMap::new();
    for i in 0..40 {
        m.set(format!("k{i}"), format!("v{i}")).unwrap();
    }
    let keys = m.keys();
    let values = m.values();
    let entries = m.entries();
    assert_eq!(keys.len(), 40);
    for ((k, v), (ek, ev)) in keys.iter().zip(values.iter()).zip(entries.iter()) {
        assert_eq!(k, ek);
        assert_eq!(v, ev);
        assert_eq!(&format!("v{}", &k[1..]), v);
    }
}

#[test]
fn hash_matches_stepwise_formula() {
    let m = HashMap::new();
    let cap = m.capacity();
    let h0 = 0;
    let expected = (31 * ((31 * ((31 * h0 + 97) % cap) + 98) % cap) + 99) % cap;
    assert_eq!(m.hash("abc"), expected);
}

#[test]
fn invalid_config_is_rejected() {
    let bad = TableConfig::new().with_load_factor(-1.0);
    assert!(matches!(
        HashMap::with_config(bad),
        Err(ConfigError::InvalidLoadFactor(_))
    ));
    let bad = TableConfig::new().with_capacity(0);
    assert!(matches!(
        HashMap::with_config(bad),
        Err(ConfigError::ZeroCapacity)
    ));
}
