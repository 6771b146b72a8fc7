//! Textual forms of a tree.
//!
//! The canonical form, produced by `Display`, is the one compared in tests:
//! `∅` for an empty tree, `{content [(tag, value), ...], left, right}`
//! otherwise, tags sorted by name and omitted when there are none.

use std::fmt;

use itertools::Itertools;
use tracing::instrument;

use crate::arena::{BstNode, NodeId, TaggedBst};
use crate::config::{RenderConfig, DEFAULT_EMPTY_MARK};

enum Piece {
    Position(NodeId),
    Text(&'static str),
}

impl<T: fmt::Display> fmt::Display for TaggedBst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Position(self.root())];
        while let Some(piece) = stack.pop() {
            let id = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Position(id) => id,
            };
            let Some(node) = self.get(id).filter(|node| !node.is_empty()) else {
                f.write_str(DEFAULT_EMPTY_MARK)?;
                continue;
            };
            write!(f, "{{{}, ", label(node))?;
            if let Some((left, right)) = node.children {
                stack.push(Piece::Text("}"));
                stack.push(Piece::Position(right));
                stack.push(Piece::Text(", "));
                stack.push(Piece::Position(left));
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> TaggedBst<T> {
    /// Indented form with the default markers, e.g. for `{M, {E, ∅, ∅}, ∅}`:
    ///
    /// ```text
    /// M
    /// |  E
    /// |  |  ∅
    /// |  |  ∅
    /// |  ∅
    /// ```
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Indented form, one line per position.
    #[instrument(level = "debug", skip_all)]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            out.push_str(&config.indent.repeat(depth));
            match self.get(id).filter(|node| !node.is_empty()) {
                Some(node) => {
                    out.push_str(&label(node));
                    out.push('\n');
                    if let Some((left, right)) = node.children {
                        stack.push((right, depth + 1));
                        stack.push((left, depth + 1));
                    }
                }
                None => {
                    out.push_str(&config.empty_mark);
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// Content of a populated node followed by its tags, if any.
pub(crate) fn label<T: fmt::Display>(node: &BstNode<T>) -> String {
    let content = node
        .content
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    if node.tags.is_empty() {
        return content;
    }
    let tags = node
        .tags
        .iter()
        .format_with(", ", |(name, value), f| f(&format_args!("({}, {})", name, value)));
    format!("{} [{}]", content, tags)
}
