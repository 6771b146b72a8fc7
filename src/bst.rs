//! Ordered insertion, lookup and removal.
//!
//! Absent elements are `None`. Single operations accept anything that
//! converts into `Option<T>`, so `tree.insert(5)` and `tree.insert(None::<i32>)`
//! both type-check; batch operations accept iterators of the same.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::arena::{NodeId, TaggedBst};
use crate::errors::{TreeError, TreeResult};

impl<T: Ord + fmt::Debug> TaggedBst<T> {
    /// Inserts `element` as a new leaf.
    ///
    /// Returns `false`, leaving the tree untouched, when an equal element is
    /// already present.
    ///
    /// # Errors
    /// `InvalidArgument` if `element` is `None`.
    #[instrument(level = "debug", skip(self, element))]
    pub fn insert<E: Into<Option<T>>>(&mut self, element: E) -> TreeResult<bool> {
        let element = require(element.into(), "insert")?;
        Ok(self.insert_present(element))
    }

    /// Inserts every element of `elements`, all or nothing.
    ///
    /// Elements already in the tree, or repeated within the batch, are
    /// skipped. Returns the number of elements actually added.
    ///
    /// # Errors
    /// `InvalidArgument` if any element is `None`; nothing is inserted then.
    #[instrument(level = "debug", skip(self, elements))]
    pub fn insert_all<I>(&mut self, elements: I) -> TreeResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let batch = require_all(elements, "insert")?;
        let mut inserted = 0;
        for element in batch {
            if self.insert_present(element) {
                inserted += 1;
            }
        }
        debug!(inserted, "batch insert");
        Ok(inserted)
    }

    /// # Errors
    /// `InvalidArgument` if `element` is `None`.
    #[instrument(level = "trace", skip(self, element))]
    pub fn contains<E: Into<Option<T>>>(&self, element: E) -> TreeResult<bool> {
        let element = require(element.into(), "contains")?;
        Ok(self.find(&element).is_some())
    }

    /// Position holding `element`, if any.
    pub fn find(&self, element: &T) -> Option<NodeId> {
        let mut current = self.root();
        loop {
            let node = self.get(current)?;
            let (content, (left, right)) = node.content.as_ref().zip(node.children)?;
            current = match element.cmp(content) {
                Ordering::Equal => return Some(current),
                Ordering::Greater => right,
                Ordering::Less => left,
            };
        }
    }

    /// Removes `element`.
    ///
    /// A node with two subtrees takes the content of its in-order successor,
    /// which is then removed from the right subtree.
    ///
    /// # Errors
    /// `InvalidArgument` if `element` is `None`, `NotFound` if it is not in
    /// the tree. The tree is unchanged in both cases.
    #[instrument(level = "debug", skip(self, element))]
    pub fn remove<E: Into<Option<T>>>(&mut self, element: E) -> TreeResult<()> {
        let element = require(element.into(), "remove")?;
        let target = self
            .find(&element)
            .ok_or_else(|| TreeError::NotFound(format!("{:?}", element)))?;
        self.remove_at(target);
        self.record_removal();
        debug!(?element, "removed");
        Ok(())
    }

    /// Removes every element of `elements`, all or nothing.
    ///
    /// The whole batch is validated before the first removal. An element
    /// repeated within the batch is removed once.
    ///
    /// # Errors
    /// `InvalidArgument` if any element is `None`, otherwise `NotFound`
    /// naming every element missing from the tree. Nothing is removed then.
    #[instrument(level = "debug", skip(self, elements))]
    pub fn remove_all<I>(&mut self, elements: I) -> TreeResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let batch = require_all(elements, "remove")?;
        let missing: Vec<&T> = batch.iter().filter(|e| self.find(e).is_none()).collect();
        if !missing.is_empty() {
            return Err(TreeError::NotFound(format!("{:?}", missing)));
        }
        for element in &batch {
            if let Some(target) = self.find(element) {
                self.remove_at(target);
                self.record_removal();
            }
        }
        debug!(count = batch.len(), "batch remove");
        Ok(())
    }

    fn insert_present(&mut self, element: T) -> bool {
        let mut current = self.root();
        while let Some(node) = self.get(current) {
            let Some((content, (left, right))) = node.content.as_ref().zip(node.children) else {
                break;
            };
            current = match element.cmp(content) {
                Ordering::Equal => {
                    trace!(?element, "already present");
                    return false;
                }
                Ordering::Less => left,
                Ordering::Greater => right,
            };
        }
        self.populate(current, element);
        true
    }

    /// Unlinks the content at the populated position `target`.
    fn remove_at(&mut self, target: NodeId) {
        let Some((left, right)) = self.children_of(target) else {
            return;
        };
        match (self.is_empty_at(left), self.is_empty_at(right)) {
            (true, true) => self.clear_position(target),
            (false, true) => self.splice_up(target, left),
            (true, false) => self.splice_up(target, right),
            (false, false) => {
                let successor = self.leftmost(right);
                let moved = self.get_mut(successor).and_then(|node| node.content.take());
                if let Some(node) = self.get_mut(target) {
                    node.content = moved;
                    node.tags.clear();
                }
                // the successor has an empty left subtree
                self.remove_at(successor);
            }
        }
    }

    /// Populated position with the smallest element below `id`.
    fn leftmost(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some((left, _)) = self.children_of(current) {
            if self.is_empty_at(left) {
                break;
            }
            current = left;
        }
        current
    }
}

fn require<T>(element: Option<T>, operation: &str) -> TreeResult<T> {
    element.ok_or_else(|| TreeError::InvalidArgument(format!("{}: element is absent", operation)))
}

fn require_all<I, T>(elements: I, operation: &str) -> TreeResult<Vec<T>>
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(position, element)| {
            element.into().ok_or_else(|| {
                TreeError::InvalidArgument(format!(
                    "{}: element at position {} is absent",
                    operation, position
                ))
            })
        })
        .collect()
}
