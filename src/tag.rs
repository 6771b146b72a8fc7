use std::fmt;

/// Tag written by [`TaggedBst::tag_height`](crate::TaggedBst::tag_height).
pub const HEIGHT: &str = "height";
/// Tag written by [`TaggedBst::tag_descendants`](crate::TaggedBst::tag_descendants).
pub const DESCENDANTS: &str = "descendants";
/// Tag written by [`TaggedBst::tag_only_son_inorder`](crate::TaggedBst::tag_only_son_inorder).
pub const ONLY_SON: &str = "onlySon";

/// Value attached to a node under a tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagValue {
    Int(i64),
    Text(String),
    Flag(bool),
}

impl TagValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(v) => write!(f, "{}", v),
            TagValue::Text(s) => write!(f, "{}", s),
            TagValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        TagValue::Int(v)
    }
}

impl From<i32> for TagValue {
    fn from(v: i32) -> Self {
        TagValue::Int(i64::from(v))
    }
}

impl From<usize> for TagValue {
    fn from(v: usize) -> Self {
        // depths and counts are bounded by the element count; saturate past i64::MAX
        debug_assert!(i64::try_from(v).is_ok(), "tag value {v} exceeds i64");
        TagValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Flag(b)
    }
}
