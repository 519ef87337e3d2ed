use super::{depth, find, length, size};
use crate::Node;
use pretty_assertions::assert_eq;

/// Top-level list `1 ── 2`, with `1 → [11 → [111], 12]`.
fn sample() -> Node<i32> {
    let mut n1 = Node::new(1);
    n1.prepend_child(Node::new(12)).expect("fresh singleton");
    let n11 = n1.prepend_child(Node::new(11)).expect("fresh singleton");
    n11.prepend_child(Node::new(111)).expect("fresh singleton");
    n1.append(Node::new(2)).expect("empty sibling slot");
    n1
}

#[test]
fn absent_roots_measure_zero() {
    assert_eq!(size::<i32>(None), 0);
    assert_eq!(length::<i32>(None), 0);
    assert_eq!(depth::<i32>(None), 0);
    assert_eq!(find::<i32, _>(None, |_| true), None);
}

#[test]
fn a_singleton_measures_one_everywhere() {
    let node = Node::new(9);
    assert_eq!(size(Some(&node)), 1);
    assert_eq!(length(Some(&node)), 1);
    assert_eq!(depth(Some(&node)), 1);
}

#[test]
fn size_counts_every_reachable_node() {
    assert_eq!(size(Some(&sample())), 5);
}

#[test]
fn length_stays_on_the_top_level() {
    let tree = sample();
    assert_eq!(length(Some(&tree)), 2);
    // the child list of 1 has its own length
    assert_eq!(tree.first_child().map(Node::length), Some(2));
}

#[test]
fn depth_reports_the_deepest_level() {
    assert_eq!(depth(Some(&sample())), 3);
    // a flat chain of leaves is 1 level deep no matter how long
    let mut chain = Node::new(0);
    chain.append(Node::new(1)).expect("empty sibling slot");
    assert_eq!(depth(Some(&chain)), 1);
}

#[test]
fn find_returns_the_preorder_first_of_several_matches() {
    let tree = sample();
    // 11, 111 and 12 all match; pre-order reaches 11 first
    let hit = find(Some(&tree), |&payload| payload > 10).expect("matches exist");
    assert_eq!(hit.payload(), &11);
}

#[test]
fn find_reports_no_match_as_an_ordinary_absence() {
    assert_eq!(find(Some(&sample()), |&payload| payload == 42), None);
}

#[test]
fn unique_payload_makes_find_and_locate_agree() {
    use crate::TreePath;
    let tree = sample();
    let path = TreePath::new(&[0, 0, 0]).expect("non-empty path");
    let located = tree.locate(path).expect("the path is in bounds");
    let found = find(Some(&tree), |&payload| payload == 111).expect("the payload is present");
    assert!(core::ptr::eq(located, found));
}
