//! Structural tagging passes.
//!
//! Each pass visits every position exactly once. The passes use explicit
//! stacks so that a degenerate (list shaped) tree cannot exhaust the call
//! stack.

use tracing::{debug, instrument, trace};

use crate::arena::{NodeId, TaggedBst};
use crate::tag::{TagValue, DESCENDANTS, HEIGHT, ONLY_SON};

enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

impl<T> TaggedBst<T> {
    /// Tags every element with `"height"`: 1 at the root, one more than the
    /// parent everywhere else.
    ///
    /// This is the depth of the node counted from the root, not the distance
    /// to its furthest leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn tag_height(&mut self) {
        let mut stack = vec![(self.root(), 1usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get_mut(id) else {
                continue;
            };
            if node.is_empty() {
                continue;
            }
            node.tags.insert(HEIGHT.to_string(), TagValue::from(depth));
            if let Some((left, right)) = node.children {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }

    /// Tags every element with `"descendants"`, the number of elements
    /// strictly below it.
    #[instrument(level = "debug", skip(self))]
    pub fn tag_descendants(&mut self) {
        let mut work = vec![Visit::Enter(self.root())];
        // subtree sizes below finished positions, None for an empty subtree
        let mut sizes: Vec<Option<usize>> = Vec::new();

        while let Some(visit) = work.pop() {
            match visit {
                Visit::Enter(id) => match self.children_of(id) {
                    Some((left, right)) => {
                        work.push(Visit::Exit(id));
                        work.push(Visit::Enter(right));
                        work.push(Visit::Enter(left));
                    }
                    None => sizes.push(None),
                },
                Visit::Exit(id) => {
                    let right = sizes.pop().flatten();
                    let left = sizes.pop().flatten();
                    let descendants = match (left, right) {
                        (None, None) => 0,
                        (Some(only), None) | (None, Some(only)) => only + 1,
                        (Some(l), Some(r)) => l + r + 2,
                    };
                    if let Some(node) = self.get_mut(id) {
                        node.tags
                            .insert(DESCENDANTS.to_string(), TagValue::from(descendants));
                    }
                    trace!(descendants, "subtree finished");
                    sizes.push(Some(descendants));
                }
            }
        }
    }

    /// Tags every only child with `"onlySon"`, its 1-based rank among the
    /// only children in in-order sequence, and returns how many were tagged.
    ///
    /// An only child is a non-root element whose sibling subtree is empty.
    /// Any other element loses an `"onlySon"` tag left by an earlier pass.
    #[instrument(level = "debug", skip(self))]
    pub fn tag_only_son_inorder(&mut self) -> usize {
        let mut counter = 0;
        // (position, is only child, left, right) of populated ancestors
        let mut stack: Vec<(NodeId, bool, NodeId, NodeId)> = Vec::new();
        let mut current = Some((self.root(), false));

        loop {
            while let Some((id, only_son)) = current {
                current = self.children_of(id).map(|(left, right)| {
                    stack.push((id, only_son, left, right));
                    (left, self.is_empty_at(right))
                });
            }
            let Some((id, only_son, left, right)) = stack.pop() else {
                break;
            };
            if let Some(node) = self.get_mut(id) {
                if only_son {
                    counter += 1;
                    node.tags.insert(ONLY_SON.to_string(), TagValue::from(counter));
                } else {
                    node.tags.remove(ONLY_SON);
                }
            }
            current = Some((right, self.is_empty_at(left)));
        }

        debug!(counter, "only children tagged");
        counter
    }

    /// Keeps only the tag `name` on every position.
    #[instrument(level = "debug", skip(self))]
    pub fn filter_tags(&mut self, name: &str) {
        for node in self.nodes_mut() {
            node.tags.retain(|key, _| key == name);
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear_tags(&mut self) {
        for node in self.nodes_mut() {
            node.tags.clear();
        }
    }
}
