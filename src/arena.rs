use generational_arena::{Arena, Index};
use std::collections::BTreeMap;
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tag::TagValue;

/// Handle of a tree position. Handles of discarded positions resolve to `None`.
pub type NodeId = Index;

/// One position of the tree, empty or populated.
#[derive(Debug, Clone)]
pub struct BstNode<T> {
    /// Element stored here, `None` for an empty position
    pub(crate) content: Option<T>,
    /// Left and right subtrees, present iff `content` is present
    pub(crate) children: Option<(NodeId, NodeId)>,
    /// Enclosing position, None for the root
    pub(crate) parent: Option<NodeId>,
    pub(crate) tags: BTreeMap<String, TagValue>,
}

impl<T> BstNode<T> {
    fn empty(parent: Option<NodeId>) -> Self {
        Self {
            content: None,
            children: None,
            parent,
            tags: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Unbalanced binary search tree whose positions carry name/value tags.
///
/// Every position lives in a generational arena, including the empty
/// sentinels below each leaf, so a populated position always has exactly
/// two child handles. Children are owned through the arena entry of their
/// parent; `parent` links are plain handles and never keep anything alive.
#[derive(Debug, Clone)]
pub struct TaggedBst<T> {
    /// Arena storage for every position, empty ones included
    arena: Arena<BstNode<T>>,
    /// Root position, empty for an empty tree
    root: NodeId,
    /// Number of populated positions
    len: usize,
}

impl<T> Default for TaggedBst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaggedBst<T> {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(BstNode::empty(None));
        Self {
            arena,
            root,
            len: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty_at(self.root)
    }

    /// True for a populated root whose two subtrees are empty.
    pub fn is_leaf(&self) -> bool {
        self.node(self.root).is_some_and(|n| n.is_leaf())
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.insert(BstNode::empty(None));
        self.len = 0;
    }

    /// Read-only cursor on the position `id`.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.arena.get(id).map(|node| NodeRef {
            tree: self,
            id,
            node,
        })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_tag(&self, id: NodeId, name: &str) -> Option<&TagValue> {
        self.arena.get(id).and_then(|node| node.tags.get(name))
    }

    /// Attaches `value` under `name` to the position `id`, returning the
    /// value it replaces.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_tag(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<TagValue>,
    ) -> TreeResult<Option<TagValue>> {
        if name.is_empty() {
            return Err(TreeError::InvalidArgument("tag name is empty".into()));
        }
        let node = self
            .arena
            .get_mut(id)
            .ok_or_else(|| TreeError::InvalidArgument(format!("no position {:?}", id)))?;
        Ok(node.tags.insert(name.to_string(), value.into()))
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&BstNode<T>> {
        self.arena.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut BstNode<T>> {
        self.arena.get_mut(id)
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut BstNode<T>> {
        self.arena.iter_mut().map(|(_, node)| node)
    }

    /// Children of a populated position, None for an empty or stale one.
    pub(crate) fn children_of(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.arena.get(id).and_then(|node| node.children)
    }

    pub(crate) fn is_empty_at(&self, id: NodeId) -> bool {
        self.arena.get(id).map_or(true, BstNode::is_empty)
    }

    /// Fills the empty position `id` with `element` and hangs two empty
    /// subtrees below it.
    #[instrument(level = "trace", skip(self, element))]
    pub(crate) fn populate(&mut self, id: NodeId, element: T) {
        let left = self.arena.insert(BstNode::empty(Some(id)));
        let right = self.arena.insert(BstNode::empty(Some(id)));
        if let Some(node) = self.arena.get_mut(id) {
            node.content = Some(element);
            node.children = Some((left, right));
            self.len += 1;
        }
    }

    /// Turns a populated position with two empty subtrees back into an
    /// empty position.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn clear_position(&mut self, id: NodeId) {
        let children = match self.arena.get_mut(id) {
            Some(node) => {
                node.content = None;
                node.tags.clear();
                node.children.take()
            }
            None => return,
        };
        if let Some((left, right)) = children {
            self.discard(left);
            self.discard(right);
        }
    }

    /// Replaces the position `id` by its subtree `child`: content and
    /// grandchildren move up one level, the other (empty) subtree of `id`
    /// is discarded. Tags of both `id` and `child` are dropped.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn splice_up(&mut self, id: NodeId, child: NodeId) {
        let Some((left, right)) = self.children_of(id) else {
            return;
        };
        let sibling = if child == left { right } else { left };
        let Some(promoted) = self.arena.remove(child) else {
            return;
        };
        self.discard(sibling);

        let grandchildren = promoted.children;
        if let Some(node) = self.arena.get_mut(id) {
            node.content = promoted.content;
            node.children = promoted.children;
            node.tags.clear();
        }
        if let Some((gl, gr)) = grandchildren {
            for g in [gl, gr] {
                if let Some(node) = self.arena.get_mut(g) {
                    node.parent = Some(id);
                }
            }
        }
    }

    /// Removes the position `id` and everything below it from the arena.
    fn discard(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                if let Some((left, right)) = node.children {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
    }

    pub(crate) fn record_removal(&mut self) {
        self.len = self.len.saturating_sub(1);
    }

    /// Number of positions held, empty positions included.
    pub fn positions(&self) -> usize {
        self.arena.len()
    }
}

/// Read-only view of one tree position.
pub struct NodeRef<'a, T> {
    tree: &'a TaggedBst<T>,
    id: NodeId,
    node: &'a BstNode<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> Option<&'a T> {
        self.node.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        match self.node.children {
            Some((left, right)) => self.tree.is_empty_at(left) && self.tree.is_empty_at(right),
            None => false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.children.and_then(|(left, _)| self.tree.node(left))
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.children.and_then(|(_, right)| self.tree.node(right))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node.parent.and_then(|parent| self.tree.node(parent))
    }

    pub fn tag(&self, name: &str) -> Option<&'a TagValue> {
        self.node.tags.get(name)
    }

    /// Tags sorted by name.
    pub fn tags(&self) -> impl Iterator<Item = (&'a str, &'a TagValue)> {
        self.node.tags.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("content", &self.node.content)
            .field("tags", &self.node.tags)
            .finish()
    }
}
