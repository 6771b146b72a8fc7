use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::{NodeId, TaggedBst};

impl<T> TaggedBst<T> {
    /// Elements level by level, left to right within a level.
    ///
    /// The order is collected when this is called; every call starts a new
    /// sequence.
    #[instrument(level = "debug", skip(self))]
    pub fn iter_width(&self) -> LevelOrderIter<'_, T> {
        let mut order = Vec::with_capacity(self.len());
        let mut queue = VecDeque::new();
        queue.push_back(self.root());

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.get(id) else {
                continue;
            };
            if let (Some(content), Some((left, right))) = (node.content.as_ref(), node.children) {
                order.push(content);
                queue.push_back(left);
                queue.push_back(right);
            }
        }

        LevelOrderIter {
            items: order.into_iter(),
        }
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }
}

/// Cursor over a breadth-first order, see [`TaggedBst::iter_width`].
pub struct LevelOrderIter<'a, T> {
    items: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for LevelOrderIter<'_, T> {}

/// Lazy in-order walk, see [`TaggedBst::iter`].
pub struct InOrderIter<'a, T> {
    tree: &'a TaggedBst<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrderIter<'a, T> {
    fn new(tree: &'a TaggedBst<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, from: NodeId) {
        let mut current = from;
        while let Some((left, _)) = self.tree.children_of(current) {
            self.stack.push(current);
            current = left;
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        if let Some((_, right)) = node.children {
            self.push_left_spine(right);
        }
        node.content.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a TaggedBst<T> {
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
