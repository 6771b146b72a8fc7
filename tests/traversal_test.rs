//! Level-order and in-order iteration.

use rstest::rstest;

use tagged_bst::util::testing::init_test_setup;
use tagged_bst::TaggedBst;

#[rstest]
fn given_tree_when_iterating_width_then_first_level_then_second() {
    init_test_setup();
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 5, 12, 6, 11]).unwrap();
    let mut iter = tree.iter_width();
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.next(), Some(&5));
    assert_eq!(iter.next(), Some(&12));
    assert_eq!(iter.collect::<Vec<_>>(), vec![&6, &11]);
}

#[rstest]
#[case(&[50, 30, 80, 10, 40, 60], &[50, 30, 80, 10, 40, 60])]
#[case(&[1, 2, 3, 4], &[1, 2, 3, 4])]
#[case(&[4, 3, 2, 1], &[4, 3, 2, 1])]
#[case(&[4, 2, 6, 1, 3, 5, 7], &[4, 2, 6, 1, 3, 5, 7])]
fn given_insert_order_when_iterating_width_then_breadth_first(
    #[case] inserted: &[i32],
    #[case] expected: &[i32],
) {
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all(inserted.iter().copied()).unwrap();
    let order: Vec<i32> = tree.iter_width().copied().collect();
    assert_eq!(order, expected);
}

#[rstest]
fn given_removal_when_iterating_width_then_reflects_current_shape() {
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([10, 20, 5, 2, 15, 30]).unwrap();
    let before: Vec<i32> = tree.iter_width().copied().collect();
    assert_eq!(before, vec![10, 5, 20, 2, 15, 30]);
    tree.remove(10).unwrap();
    let after: Vec<i32> = tree.iter_width().copied().collect();
    assert_eq!(after, vec![15, 5, 20, 2, 30]);
}

#[rstest]
fn given_tree_when_iterating_by_reference_then_ascending() {
    let mut tree: TaggedBst<i32> = TaggedBst::new();
    tree.insert_all([8, 3, 10, 1, 6, 14, 4, 7, 13]).unwrap();
    let mut seen = Vec::new();
    for element in &tree {
        seen.push(*element);
    }
    assert_eq!(seen, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
}
