mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};

pub use self::iter::Iter;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A tree node. `red` describes the link from the node's parent.
#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    red: bool,
    key: K,
    value: V,
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| node.red)
}

fn is_left_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| is_red(&node.left))
}

fn into_entry<K, V>(node: Box<Node<K, V>>) -> (K, V) {
    let node = *node;
    (node.key, node.value)
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, red: true, key, value }
    }

    // Turn a right-leaning link into a left-leaning one; the new subtree root takes over the old
    // root's color
    fn rotate_left(node: &mut Box<Self>) {
        debug_assert!(node.right.is_some(), "rotate_left without a right child");
        let Some(mut save) = node.right.take() else { return };
        swap(&mut node.right, &mut save.left); // save.left now None
        save.red = node.red;
        node.red = true;
        swap(node, &mut save);
        node.left = Some(save);
    }

    fn rotate_right(node: &mut Box<Self>) {
        debug_assert!(node.left.is_some(), "rotate_right without a left child");
        let Some(mut save) = node.left.take() else { return };
        swap(&mut node.left, &mut save.right); // save.right now None
        save.red = node.red;
        node.red = true;
        swap(node, &mut save);
        node.right = Some(save);
    }

    fn flip_colors(&mut self) {
        self.red = !self.red;
        if let Some(ref mut left) = self.left { left.red = !left.red; }
        if let Some(ref mut right) = self.right { right.red = !right.red; }
    }

    // Restore the left-leaning invariants on the way back up from a removal
    fn fix_up(node: &mut Box<Self>) {
        if is_red(&node.right) { Self::rotate_left(node); }
        if is_red(&node.left) && is_left_red(&node.left) { Self::rotate_right(node); }
        if is_red(&node.left) && is_red(&node.right) { node.flip_colors(); }
    }

    // Make the left child or one of its children red before descending left, borrowing from the
    // right sibling when it has a red link to spare
    fn move_red_left(node: &mut Box<Self>) {
        node.flip_colors();
        if is_left_red(&node.right) {
            if let Some(ref mut right) = node.right { Self::rotate_right(right); }
            Self::rotate_left(node);
            node.flip_colors();
        }
    }

    fn move_red_right(node: &mut Box<Self>) {
        node.flip_colors();
        if is_left_red(&node.left) {
            Self::rotate_right(node);
            node.flip_colors();
        }
    }
}

fn set_black<K, V>(root: &mut Link<K, V>) {
    if let Some(ref mut node) = *root { node.red = false; }
}

/// Inserts the entry below `root`, returning `true` if the key was not already present.
///
/// An existing key keeps its node and its original key; only the value is replaced.
pub fn insert<K, V, C>(root: &mut Link<K, V>, cmp: &C, key: K, value: V) -> bool
    where C: Compare<K> {

    let inserted = insert_at(root, cmp, key, value);
    set_black(root);
    inserted
}

fn insert_at<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> bool
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            true
        }
        Some(ref mut node) => {
            // split 4-nodes on the way down
            if is_red(&node.left) && is_red(&node.right) { node.flip_colors(); }

            let inserted = match cmp.compare(&key, &node.key) {
                Less => insert_at(&mut node.left, cmp, key, value),
                Greater => insert_at(&mut node.right, cmp, key, value),
                Equal => {
                    node.value = value;
                    false
                }
            };

            if is_red(&node.right) && !is_red(&node.left) { Node::rotate_left(node); }
            if is_red(&node.left) && is_left_red(&node.left) { Node::rotate_right(node); }
            // split again here too: a 4-node left at rest makes a later remove leave a red link
            // leaning right
            if is_red(&node.left) && is_red(&node.right) { node.flip_colors(); }
            inserted
        }
    }
}

/// Removes the entry whose key is equal to the given key, returning it.
pub fn remove<K, V, C, Q: ?Sized>(root: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let key_value = remove_at(root, cmp, key);
    set_black(root);
    key_value
}

fn remove_at<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let node = link.as_mut()?;

    let key_value = if cmp.compares_lt(key, &node.key) {
        if node.left.is_none() {
            None
        } else {
            if !is_red(&node.left) && !is_left_red(&node.left) { Node::move_red_left(node); }
            remove_at(&mut node.left, cmp, key)
        }
    } else {
        if is_red(&node.left) { Node::rotate_right(node); }

        if node.right.is_none() {
            // a node without a right child has no left child either
            if cmp.compares_eq(key, &node.key) { return link.take().map(into_entry); }
            None
        } else {
            if !is_red(&node.right) && !is_left_red(&node.right) { Node::move_red_right(node); }

            if cmp.compares_eq(key, &node.key) {
                // copy the successor into this node and splice the successor out
                remove_min(&mut node.right).map(|(key, value)| {
                    (replace(&mut node.key, key), replace(&mut node.value, value))
                })
            } else {
                remove_at(&mut node.right, cmp, key)
            }
        }
    };

    Node::fix_up(node);
    key_value
}

fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;

    if node.left.is_none() {
        let right = node.right.take();
        return replace(link, right).map(into_entry);
    }

    if !is_red(&node.left) && !is_left_red(&node.left) { Node::move_red_left(node); }
    let key_value = remove_min(&mut node.left);
    Node::fix_up(node);
    key_value
}

pub fn get<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<(&'a K, &'a V)> where C: Compare<Q, K> {

    let mut link = link.as_deref();

    while let Some(node) = link {
        match cmp.compare(key, &node.key) {
            Less => link = node.left.as_deref(),
            Greater => link = node.right.as_deref(),
            Equal => return Some((&node.key, &node.value)),
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<(&'a K, &'a mut V)> where C: Compare<Q, K> {

    let mut link = link.as_deref_mut();

    while let Some(node) = link {
        match cmp.compare(key, &node.key) {
            Less => link = node.left.as_deref_mut(),
            Greater => link = node.right.as_deref_mut(),
            Equal => return Some((&node.key, &mut node.value)),
        }
    }

    None
}

pub fn min<K, V>(link: &Link<K, V>) -> Option<(&K, &V)> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() { node = left; }
    Some((&node.key, &node.value))
}

pub fn max<K, V>(link: &Link<K, V>) -> Option<(&K, &V)> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() { node = right; }
    Some((&node.key, &node.value))
}

/// Calls `f` on every entry below `link` in order.
pub fn for_each<K, V, F>(link: &Link<K, V>, f: &mut F) where F: FnMut(&K, &V) {
    if let Some(ref node) = *link {
        for_each(&node.left, f);
        f(&node.key, &node.value);
        for_each(&node.right, f);
    }
}
