//! A key-ordered map based on a left-leaning red-black tree.
//!
//! [`Map`] keeps its entries sorted by a comparator supplied at construction, so it works with any
//! key type that can be totally ordered: naturally ordered keys, strings compared with or without
//! case, floating-point numbers, or structured keys with a custom ordering. Insertion, lookup and
//! removal take `O(log n)` time.
//!
//! # Examples
//!
//! ```
//! let mut map = llrb_map::Map::int_keyed();
//!
//! for number in [9, 1, 8, 2, 7, 3, 6, 4, 5, 0] {
//!     map.insert(number, number * 10);
//! }
//!
//! assert_eq!(map.find(&5), Some(&50));
//! assert_eq!(map.find(&10), None);
//!
//! assert!(map.delete(&5));
//! assert_eq!(map.len(), 9);
//! ```

pub mod map;
mod node;
pub mod order;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use map::Map;
