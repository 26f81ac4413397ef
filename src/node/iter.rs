use super::{Link, Node};

pub trait NodeRef: Sized {
    type Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
    fn item(self) -> Self::Item;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);

    fn left(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.left.as_deref()
    }

    fn right(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.right.as_deref()
    }

    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
    fn item(self) -> (K, V) { super::into_entry(self) }
}

/// An in-order iterator holding the unvisited left spine of the remaining entries.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { stack: Vec::new(), size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Option<N>) {
        while let Some(mut node) = link {
            link = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}
