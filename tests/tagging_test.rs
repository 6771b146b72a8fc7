//! Single-pass structural tagging.

use rstest::{fixture, rstest};

use tagged_bst::tag::{DESCENDANTS, HEIGHT, ONLY_SON};
use tagged_bst::util::testing::init_test_setup;
use tagged_bst::{TagValue, TaggedBst};

#[fixture]
fn example() -> TaggedBst<i32> {
    init_test_setup();
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 20, 5, 2, 15, 30]).unwrap();
    tree
}

// 10
// |  5
// |  |  2
// |  20
// |  |  15
// |  |  |  12
#[fixture]
fn other() -> TaggedBst<i32> {
    init_test_setup();
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 20, 5, 2, 15, 12]).unwrap();
    assert_eq!(
        tree.to_string(),
        "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, {12, ∅, ∅}, ∅}, ∅}}"
    );
    tree
}

fn int_tag(tree: &TaggedBst<i32>, element: i32, name: &str) -> Option<i64> {
    let id = tree.find(&element)?;
    tree.get_tag(id, name).and_then(TagValue::as_int)
}

#[rstest]
fn given_example_when_tagging_height_then_depth_from_root(mut example: TaggedBst<i32>) {
    example.tag_height();
    for (element, expected) in [(10, 1), (5, 2), (20, 2), (2, 3), (15, 3), (30, 3)] {
        assert_eq!(int_tag(&example, element, HEIGHT), Some(expected), "element {element}");
    }
}

#[rstest]
fn given_other_when_tagging_height_then_renders_depths(mut other: TaggedBst<i32>) {
    other.tag_height();
    other.filter_tags(HEIGHT);
    assert_eq!(
        other.to_string(),
        "{10 [(height, 1)], {5 [(height, 2)], {2 [(height, 3)], ∅, ∅}, ∅}, \
         {20 [(height, 2)], {15 [(height, 3)], {12 [(height, 4)], ∅, ∅}, ∅}, ∅}}"
    );
}

#[rstest]
fn given_example_when_tagging_descendants_then_renders_counts(mut example: TaggedBst<i32>) {
    example.tag_descendants();
    example.filter_tags(DESCENDANTS);
    assert_eq!(
        example.to_string(),
        "{10 [(descendants, 5)], {5 [(descendants, 1)], {2 [(descendants, 0)], ∅, ∅}, ∅}, \
         {20 [(descendants, 2)], {15 [(descendants, 0)], ∅, ∅}, {30 [(descendants, 0)], ∅, ∅}}}"
    );
}

#[rstest]
fn given_left_empty_root_when_tagging_descendants_then_counts_right_subtree() {
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 12]).unwrap();
    tree.tag_descendants();
    assert_eq!(
        tree.to_string(),
        "{10 [(descendants, 1)], ∅, {12 [(descendants, 0)], ∅, ∅}}"
    );
}

#[rstest]
fn given_other_when_tagging_only_sons_then_ranked_in_order(mut other: TaggedBst<i32>) {
    assert_eq!(other.tag_only_son_inorder(), 3);
    other.filter_tags(ONLY_SON);
    assert_eq!(
        other.to_string(),
        "{10, {5, {2 [(onlySon, 1)], ∅, ∅}, ∅}, {20, {15 [(onlySon, 3)], {12 [(onlySon, 2)], ∅, ∅}, ∅}, ∅}}"
    );
}

#[rstest]
fn given_example_when_tagging_only_sons_then_only_two_is_tagged(mut example: TaggedBst<i32>) {
    assert_eq!(example.tag_only_son_inorder(), 1);
    assert_eq!(int_tag(&example, 2, ONLY_SON), Some(1));
    assert_eq!(int_tag(&example, 15, ONLY_SON), None);
}

#[rstest]
fn given_tagged_tree_when_retagging_after_insert_then_values_are_overwritten(
    mut example: TaggedBst<i32>,
) {
    example.tag_descendants();
    example.insert(1).unwrap();
    example.tag_descendants();
    assert_eq!(int_tag(&example, 10, DESCENDANTS), Some(6));
    assert_eq!(int_tag(&example, 2, DESCENDANTS), Some(1));
}

#[rstest]
fn given_tagged_child_when_spliced_up_then_tags_are_dropped(mut example: TaggedBst<i32>) {
    let two = example.find(&2).unwrap();
    example.set_tag(two, "colour", "red").unwrap();
    example.remove(5).unwrap();
    let moved = example.find(&2).unwrap();
    assert_eq!(example.get_tag(moved, "colour"), None);
    assert!(example.node(moved).unwrap().tags().next().is_none());
}

#[rstest]
fn given_height_tags_when_removing_then_restructured_positions_lose_them(
    mut example: TaggedBst<i32>,
) {
    example.tag_height();
    example.remove(5).unwrap();
    example.remove(10).unwrap();
    assert_eq!(
        example.to_string(),
        "{15, {2, ∅, ∅}, {20 [(height, 2)], ∅, {30 [(height, 3)], ∅, ∅}}}"
    );

    example.tag_height();
    assert_eq!(
        example.to_string(),
        "{15 [(height, 1)], {2 [(height, 2)], ∅, ∅}, {20 [(height, 2)], ∅, {30 [(height, 3)], ∅, ∅}}}"
    );
}

#[rstest]
fn given_only_son_tagged_when_sibling_inserted_and_retagged_then_tag_is_gone() {
    init_test_setup();
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 12]).unwrap();
    assert_eq!(tree.tag_only_son_inorder(), 1);
    assert_eq!(tree.to_string(), "{10, ∅, {12 [(onlySon, 1)], ∅, ∅}}");

    tree.insert(8).unwrap();
    assert_eq!(tree.tag_only_son_inorder(), 0);
    assert_eq!(tree.to_string(), "{10, {8, ∅, ∅}, {12, ∅, ∅}}");
}

#[rstest]
fn given_tagged_other_when_sibling_inserted_and_retagged_then_stale_rank_is_removed(
    mut other: TaggedBst<i32>,
) {
    assert_eq!(other.tag_only_son_inorder(), 3);
    other.insert(25).unwrap();
    assert_eq!(other.tag_only_son_inorder(), 2);
    assert_eq!(int_tag(&other, 2, ONLY_SON), Some(1));
    assert_eq!(int_tag(&other, 12, ONLY_SON), Some(2));
    assert_eq!(int_tag(&other, 15, ONLY_SON), None);
}

#[rstest]
fn given_custom_tag_on_parent_when_read_from_child_then_visible(mut example: TaggedBst<i32>) {
    let root = example.root();
    example.set_tag(root, "owner", "alice").unwrap();
    let thirty = example.find(&30).unwrap();
    let grandparent = example
        .node(thirty)
        .and_then(|n| n.parent())
        .and_then(|n| n.parent())
        .unwrap();
    assert_eq!(grandparent.tag("owner").and_then(TagValue::as_text), Some("alice"));
}
