//! Comparators for the common kinds of map keys.
//!
//! Each comparator implements [`Compare`] and can be passed to [`Map::with_cmp`]. The map treats
//! two keys as equal when neither compares less than the other.
//!
//! [`Map::with_cmp`]: crate::Map::with_cmp

use compare::Compare;
use std::cmp::Ordering;

/// A comparator built from a strict "less than" predicate.
///
/// The predicate must be irreflexive and transitive and must induce a total order; otherwise the
/// behavior of a map using it is unspecified. Two keys are considered equal when neither is less
/// than the other.
///
/// # Examples
///
/// ```
/// use compare::Compare;
/// use llrb_map::order::LessThan;
///
/// let cmp = LessThan::new(|a: &i32, b: &i32| a < b);
/// assert!(cmp.compares_lt(&1, &2));
/// assert!(cmp.compares_eq(&2, &2));
/// ```
#[derive(Clone, Copy)]
pub struct LessThan<F> {
    less: F,
}

impl<F> LessThan<F> {
    /// Wraps the given predicate.
    pub fn new(less: F) -> Self { LessThan { less } }
}

impl<F, K: ?Sized> Compare<K> for LessThan<F> where F: Fn(&K, &K) -> bool {
    fn compare(&self, l: &K, r: &K) -> Ordering {
        if (self.less)(l, r) {
            Ordering::Less
        } else if (self.less)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders strings by their bytes.
///
/// Unlike `compare::Natural<String>`, this comparator accepts anything that is `AsRef<str>` on
/// either side, so a map keyed by `String` can be queried with a `&str`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lexical;

impl<L: ?Sized, R: ?Sized> Compare<L, R> for Lexical where L: AsRef<str>, R: AsRef<str> {
    fn compare(&self, l: &L, r: &R) -> Ordering { l.as_ref().cmp(r.as_ref()) }
}

/// Orders strings by their lowercase forms, ignoring case.
///
/// Keys that differ only in case are equal under this comparator, so inserting `"Key"` into a map
/// that holds `"key"` replaces the value and keeps the original key.
///
/// # Examples
///
/// ```
/// use compare::Compare;
/// use llrb_map::order::CaseFolded;
///
/// assert!(CaseFolded.compares_eq("Five", "fIVE"));
/// assert!(CaseFolded.compares_lt("apple", "Banana"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaseFolded;

impl<L: ?Sized, R: ?Sized> Compare<L, R> for CaseFolded where L: AsRef<str>, R: AsRef<str> {
    fn compare(&self, l: &L, r: &R) -> Ordering {
        let l = l.as_ref().chars().flat_map(char::to_lowercase);
        let r = r.as_ref().chars().flat_map(char::to_lowercase);
        l.cmp(r)
    }
}

/// Orders keys by their partial order, such as floating-point numbers.
///
/// Incomparable values (for example NaN) compare equal to everything, which does not form a total
/// order. Keeping such values out of the map is the caller's responsibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialOrder;

impl<T: ?Sized> Compare<T> for PartialOrder where T: PartialOrd {
    fn compare(&self, l: &T, r: &T) -> Ordering { l.partial_cmp(r).unwrap_or(Ordering::Equal) }
}
