//! Unbalanced binary search tree with per-node tags.
//!
//! Besides the usual insert/contains/remove, every position can carry
//! name/value tags, and three passes tag the whole tree in a single walk:
//! depth from the root ([`TaggedBst::tag_height`]), number of descendants
//! ([`TaggedBst::tag_descendants`]) and the in-order rank of only children
//! ([`TaggedBst::tag_only_son_inorder`]).
//!
//! ```
//! use tagged_bst::TaggedBst;
//!
//! let mut tree: TaggedBst<i32> = TaggedBst::new();
//! tree.insert_all([10, 20, 5, 2, 15, 30]).unwrap();
//! assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, ∅, ∅}, {30, ∅, ∅}}}");
//!
//! tree.remove(10).unwrap();
//! assert_eq!(tree.to_string(), "{15, {5, {2, ∅, ∅}, ∅}, {20, ∅, {30, ∅, ∅}}}");
//! ```

pub mod arena;
pub mod bst;
pub mod config;
pub mod errors;
pub mod render;
pub mod tag;
pub mod tagging;
pub mod traversal;
pub mod tree_traits;
pub mod util;

pub use arena::{NodeId, NodeRef, TaggedBst};
pub use config::RenderConfig;
pub use errors::{TreeError, TreeResult};
pub use tag::TagValue;
pub use traversal::{InOrderIter, LevelOrderIter};
pub use tree_traits::TreeConvert;
