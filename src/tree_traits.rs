use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::arena::{NodeId, TaggedBst};
use crate::config::DEFAULT_EMPTY_MARK;
use crate::render::label;

enum Visit {
    Enter(NodeId),
    Exit(String),
}

/// Conversion into a `termtree::Tree` for box-drawing display.
pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeConvert for TaggedBst<T> {
    /// Empty positions below a populated node are kept so that left and
    /// right stay distinguishable.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let mut work = vec![Visit::Enter(self.root())];
        // finished subtrees, left below right
        let mut built: Vec<Tree<String>> = Vec::new();

        while let Some(visit) = work.pop() {
            match visit {
                Visit::Enter(id) => match self.get(id).filter(|node| !node.is_empty()) {
                    Some(node) => match node.children {
                        Some((left, right)) => {
                            work.push(Visit::Exit(label(node)));
                            work.push(Visit::Enter(right));
                            work.push(Visit::Enter(left));
                        }
                        None => built.push(Tree::new(label(node))),
                    },
                    None => built.push(Tree::new(DEFAULT_EMPTY_MARK.to_string())),
                },
                Visit::Exit(text) => {
                    let right = built.pop();
                    let left = built.pop();
                    built.push(Tree::new(text).with_leaves(left.into_iter().chain(right)));
                }
            }
        }

        built
            .pop()
            .unwrap_or_else(|| Tree::new(DEFAULT_EMPTY_MARK.to_string()))
    }
}
