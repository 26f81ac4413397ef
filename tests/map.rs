use llrb_map::Map;
use std::cmp::Ordering;

fn keys<K: Clone, V, C>(map: &Map<K, V, C>) -> Vec<K> where C: compare::Compare<K> {
    let mut keys = vec![];
    map.for_each(|k, _| keys.push(k.clone()));
    keys
}

#[test]
fn string_keys_in_byte_order() {
    let mut map = Map::string_keyed();

    for (i, word) in ["one", "two", "three", "four", "five"].iter().enumerate() {
        assert!(map.insert(word.to_string(), i + 1));
    }

    assert_eq!(map.len(), 5);
    assert_eq!(keys(&map), ["five", "four", "one", "three", "two"]);
    assert_eq!(map.find("three"), Some(&3));
    assert_eq!(map.find("Three"), None);
}

#[test]
fn case_folded_keys_keep_first_spelling() {
    let mut map = Map::case_folded_keyed();

    for word in ["one", "Two", "THREE", "four", "Five"] {
        map.insert(word.to_string(), word.to_string());
    }

    let mut words = String::new();
    map.for_each(|_, value| words.push_str(value));
    assert_eq!(words, "FivefouroneTHREETwo");

    assert!(!map.insert("three".to_string(), "three".to_string()));
    assert_eq!(map.len(), 5);
    assert_eq!(map.find("Three").map(|v| &v[..]), Some("three"));
    assert_eq!(keys(&map)[3], "THREE");
}

fn int_map() -> Map<i64, i64> {
    let mut map = Map::int_keyed();
    for number in [9, 1, 8, 2, 7, 3, 6, 4, 5, 0] { map.insert(number, number * 10); }
    map
}

#[test]
fn int_keys_find() {
    let map = int_map();

    assert_eq!(map.len(), 10);
    assert_eq!(map.find(&5), Some(&50));
    for number in [0, 1, 5, 8, 9] { assert_eq!(map.find(&number), Some(&(number * 10))); }
    for number in [-1, -21, 10, 11, 148] { assert_eq!(map.find(&number), None); }
}

#[test]
fn int_keys_delete() {
    let mut map = int_map();

    for (i, number) in [0, 1, 5, 8, 9].iter().enumerate() {
        assert!(map.delete(number));
        assert_eq!(map.len(), 9 - i);
        assert_eq!(map.find(number), None);
    }

    for number in [-1, 100, -21, 10, 11, 148] { assert!(!map.delete(&number)); }
    assert_eq!(map.len(), 5);
    assert_eq!(keys(&map), [2, 3, 4, 6, 7]);
}

#[test]
fn deleting_only_key_empties_map() {
    let mut map = Map::string_keyed();
    map.insert("x".to_string(), 1);

    assert!(map.delete("x"));
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.find("x"), None);
    assert!(!map.delete("x"));
    assert_eq!(map.first(), None);
}

#[test]
fn reinsert_replaces_value() {
    let mut map = Map::string_keyed();

    assert!(map.insert("a".to_string(), 1));
    assert!(!map.insert("a".to_string(), 2));
    assert_eq!(map.len(), 1);
    assert_eq!(map.find("a"), Some(&2));
}

#[test]
fn remove_returns_stored_entry() {
    let mut map = Map::new();
    for i in 0..64u32 { map.insert(i, i * 2); }

    // internal nodes are replaced by their successors; the caller still gets the matched entry
    for i in (0..64).step_by(3) { assert_eq!(map.remove(&i), Some((i, i * 2))); }
    for i in (0..64u32).filter(|i| i % 3 != 0) { assert_eq!(map.find(&i), Some(&(i * 2))); }
    assert_eq!(map.len(), 42);
}

#[test]
fn float_keys() {
    let mut map = Map::float_keyed();

    for x in [2.5, -1.0, 0.125, 1e9, -0.0] { map.insert(x, x.to_string()); }

    assert_eq!(keys(&map), [-1.0, 0.0, 0.125, 2.5, 1e9]);
    assert!(!map.insert(0.0, "zero".to_string()));
    assert_eq!(map.find(&-0.0).map(|s| &s[..]), Some("zero"));
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn structured_keys_with_less_than() {
    let mut map = Map::with_less(|a: &Point, b: &Point| {
        if a.x != b.x { a.x < b.x } else { a.y < b.y }
    });

    map.insert(Point { x: 1, y: 1 }, "c");
    map.insert(Point { x: 0, y: 5 }, "a");
    map.insert(Point { x: 1, y: 0 }, "b");

    assert_eq!(map.find(&Point { x: 1, y: 0 }), Some(&"b"));
    assert_eq!(map.find(&Point { x: 5, y: 5 }), None);
    assert_eq!(map.iter().map(|e| *e.1).collect::<String>(), "abc");
}

#[test]
fn structured_keys_with_ordering_closure() {
    let mut map = Map::with_cmp(|a: &Point, b: &Point| -> Ordering {
        b.y.cmp(&a.y).then(a.x.cmp(&b.x))
    });

    map.insert(Point { x: 0, y: 0 }, 'a');
    map.insert(Point { x: 0, y: 1 }, 'b');
    map.insert(Point { x: 1, y: 1 }, 'c');

    assert_eq!(map.iter().map(|e| *e.1).collect::<String>(), "bca");
}

#[test]
fn find_mut_updates_in_place() {
    let mut map = Map::string_keyed();
    map.insert("count".to_string(), 1);

    if let Some(count) = map.find_mut("count") { *count += 41; }
    assert_eq!(map["count"], 42);
    assert_eq!(map.find_mut("missing"), None);
}

#[test]
#[should_panic(expected = "key not found")]
fn index_panics_on_missing_key() {
    let map = int_map();
    let _ = map[&100];
}

#[test]
fn first_and_last() {
    let map = int_map();
    assert_eq!(map.first(), Some((&0, &0)));
    assert_eq!(map.last(), Some((&9, &90)));
}

#[test]
fn clear_resets_len() {
    let mut map = int_map();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.insert(1, 1));
    assert_eq!(map.len(), 1);
}

#[test]
fn debug_lists_entries_in_order() {
    let map: Map<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
    assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
}

#[test]
fn equality_uses_comparator() {
    let mut a = Map::case_folded_keyed();
    let mut b = Map::case_folded_keyed();

    a.insert("Key".to_string(), 1);
    b.insert("KEY".to_string(), 1);
    assert_eq!(a, b);

    b.insert("other".to_string(), 2);
    assert!(a != b);
}

#[test]
fn extend_counts_new_keys_only() {
    let mut map = int_map();
    map.extend(vec![(5, 0), (10, 100), (11, 110)]);

    assert_eq!(map.len(), 12);
    assert_eq!(map.find(&5), Some(&0));
}

#[test]
fn into_iter_yields_owned_entries() {
    let map = int_map();
    let entries: Vec<_> = map.into_iter().collect();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0], (0, 0));
    assert_eq!(entries[9], (9, 90));
}
