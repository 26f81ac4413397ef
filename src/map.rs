//! An ordered map based on a left-leaning red-black tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::ops;
use crate::node::{self, Node};
use crate::order::{CaseFolded, LessThan, Lexical, PartialOrder};

/// An ordered map based on a left-leaning red-black tree.
///
/// Keys are ordered by the map's comparator, and two keys are the same key when the comparator
/// considers them equal. The comparator must be a total order; the behavior of this map is
/// unspecified otherwise, or if a key's ordering relative to any other key changes while the key is
/// in the map.
///
/// The map performs no internal synchronization. Share it across threads behind a lock or a
/// channel.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<V> Map<String, V, Lexical> {
    /// Creates an empty map with case-sensitive string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::string_keyed();
    ///
    /// map.insert("b".to_string(), 2);
    /// map.insert("B".to_string(), 1);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.find("b"), Some(&2));
    /// ```
    pub fn string_keyed() -> Self { Map::with_cmp(Lexical) }
}

impl<V> Map<String, V, CaseFolded> {
    /// Creates an empty map with case-insensitive string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::case_folded_keyed();
    ///
    /// assert!(map.insert("Key".to_string(), 1));
    /// assert!(!map.insert("KEY".to_string(), 2));
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.find("key"), Some(&2));
    /// ```
    pub fn case_folded_keyed() -> Self { Map::with_cmp(CaseFolded) }
}

impl<V> Map<i64, V> {
    /// Creates an empty map with integer keys.
    pub fn int_keyed() -> Self { Map::new() }
}

impl<V> Map<f64, V, PartialOrder> {
    /// Creates an empty map with floating-point keys.
    ///
    /// NaN is not ordered relative to other keys and must not be used as a key.
    pub fn float_keyed() -> Self { Map::with_cmp(PartialOrder) }
}

impl<K, V, F> Map<K, V, LessThan<F>> where F: Fn(&K, &K) -> bool {
    /// Creates an empty map ordered according to the given "less than" predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::with_less(|a: &(i32, i32), b: &(i32, i32)| {
    ///     if a.0 != b.0 { a.0 < b.0 } else { a.1 < b.1 }
    /// });
    ///
    /// map.insert((1, 2), "b");
    /// map.insert((0, 9), "a");
    /// map.insert((1, 0), "c");
    ///
    /// assert_eq!(map.first(), Some((&(0, 9), &"a")));
    /// assert_eq!(map.last(), Some((&(1, 2), &"b")));
    /// ```
    pub fn with_less(less: F) -> Self { Map::with_cmp(LessThan::new(less)) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = llrb_map::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning `true` if the key was not already present.
    ///
    /// If the map already contains the key, its value is replaced and the stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    /// assert!(map.insert(1, "a"));
    /// assert_eq!(map.find(&1), Some(&"a"));
    /// assert!(!map.insert(1, "b"));
    /// assert_eq!(map.find(&1), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let inserted = node::insert(&mut self.root, &self.cmp, key, value);
        if inserted { self.len += 1; }
        inserted
    }

    /// Returns a reference to the value associated with the given key, or `None` if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    /// assert_eq!(map.find(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.find(&1), Some(&"a"));
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    pub fn find_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).map(|e| e.1)
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.find(key).is_some()
    }

    /// Removes the entry whose key is equal to the given key, returning `true` if the map
    /// contained the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    /// map.insert(1, "a");
    ///
    /// assert!(map.delete(&1));
    /// assert!(!map.delete(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn delete<Q: ?Sized>(&mut self, key: &Q) -> bool where C: Compare<Q, K> {
        self.remove(key).is_some()
    }

    /// Removes and returns the entry whose key is equal to the given key, returning `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&2), Some((2, "b")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.remove(&2), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Returns a reference to the map's minimum key and a reference to its associated value, or
    /// `None` if the map is empty.
    pub fn first(&self) -> Option<(&K, &V)> { node::min(&self.root) }

    /// Returns a reference to the map's maximum key and a reference to its associated value, or
    /// `None` if the map is empty.
    pub fn last(&self) -> Option<(&K, &V)> { node::max(&self.root) }

    /// Calls the given function on every entry in the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb_map::Map::case_folded_keyed();
    ///
    /// for word in ["one", "Two", "THREE", "four", "Five"] {
    ///     map.insert(word.to_string(), word.len());
    /// }
    ///
    /// let mut words = String::new();
    /// map.for_each(|key, _| words.push_str(key));
    /// assert_eq!(words, "FivefouroneTHREETwo");
    /// ```
    pub fn for_each<F>(&self, mut f: F) where F: FnMut(&K, &V) {
        node::for_each(&self.root, &mut f);
    }

    /// Returns an iterator over the map's entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: llrb_map::Map<_, _> = vec![(2, "b"), (1, "a")].into_iter().collect();
    ///
    /// for (key, value) in &map {
    ///     println!("{:?}: {:?}", key, value);
    /// }
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_deref(), self.len))
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &node::Link<K, V> { &self.root }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.find(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map, yielding its entries in ascending key order.
    fn into_iter(self) -> IntoIter<K, V> { IntoIter(node::Iter::new(self.root, self.len)) }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through the `IntoIterator` trait.
#[derive(Clone)]
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::iter`] or the `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
