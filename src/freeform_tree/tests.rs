use super::*;
use alloc::vec::Vec;

//          1
//        / | \
//       2  3  4
//      / \     \
//     5   6     7
fn sample_tree() -> Node<u64> {
    Node::with_children(
        1,
        [
            Node::with_children(2, [Node::new(5), Node::new(6)].into()),
            Node::new(3),
            Node::with_children(4, [Node::new(7)].into()),
        ]
        .into(),
    )
}

#[test]
fn pre_order() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(
        traversal.pre_order_recursive(None),
        [&1, &2, &5, &6, &3, &4, &7],
    );
    assert_eq!(
        traversal.pre_order_iterative(None),
        [&1, &2, &5, &6, &3, &4, &7],
    );
}

#[test]
fn post_order() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(
        traversal.post_order_recursive(None),
        [&5, &6, &2, &3, &7, &4, &1],
    );
    assert_eq!(
        traversal.post_order_iterative(None),
        [&5, &6, &2, &3, &7, &4, &1],
    );
}

// First child 2 contributes its own in-order [5, 2, 6], then the root, then
// the remaining children: 3 is a leaf and 4 contributes [7, 4].
#[test]
fn in_order() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(
        traversal.in_order_recursive(None),
        [&5, &2, &6, &1, &3, &7, &4],
    );
    assert_eq!(
        traversal.in_order_iterative(None),
        [&5, &2, &6, &1, &3, &7, &4],
    );
}

#[test]
fn level_order() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(
        traversal.level_order_recursive(None),
        [&1, &2, &3, &4, &5, &6, &7],
    );
    assert_eq!(
        traversal.level_order_iterative(None),
        [&1, &2, &3, &4, &5, &6, &7],
    );
}

#[test]
fn absent_root_yields_empty_sequences() {
    let traversal = Traversal::<u64>::default();
    assert!(traversal.pre_order_recursive(None).is_empty());
    assert!(traversal.pre_order_iterative(None).is_empty());
    assert!(traversal.in_order_recursive(None).is_empty());
    assert!(traversal.in_order_iterative(None).is_empty());
    assert!(traversal.post_order_recursive(None).is_empty());
    assert!(traversal.post_order_iterative(None).is_empty());
    assert!(traversal.level_order_recursive(None).is_empty());
    assert!(traversal.level_order_iterative(None).is_empty());
}

// A childless node's value is the entire in-order result — the explicitly
// special-cased half of the generalized definition.
#[test]
fn single_node() {
    let tree = Node::new(451_u64);
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(traversal.pre_order_recursive(None), [&451]);
    assert_eq!(traversal.pre_order_iterative(None), [&451]);
    assert_eq!(traversal.in_order_recursive(None), [&451]);
    assert_eq!(traversal.in_order_iterative(None), [&451]);
    assert_eq!(traversal.post_order_recursive(None), [&451]);
    assert_eq!(traversal.post_order_iterative(None), [&451]);
    assert_eq!(traversal.level_order_recursive(None), [&451]);
    assert_eq!(traversal.level_order_iterative(None), [&451]);
}

#[test]
fn linear_chain() {
    let tree = Node::with_children(
        1,
        [Node::with_children(
            2,
            [Node::with_children(3, [Node::new(4)].into())].into(),
        )]
        .into(),
    );
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(traversal.pre_order_iterative(None), [&1, &2, &3, &4]);
    assert_eq!(traversal.post_order_iterative(None), [&4, &3, &2, &1]);
    // With a single child per node, that child always plays the "first child"
    // role, so in-order walks to the deepest node before emitting anything
    assert_eq!(traversal.in_order_recursive(None), [&4, &3, &2, &1]);
    assert_eq!(traversal.in_order_iterative(None), [&4, &3, &2, &1]);
    assert_eq!(
        traversal.level_order_recursive(None),
        traversal.level_order_iterative(None),
    );
}

#[test]
fn wide_node() {
    let children: Vec<_> = (2..=6_u64).map(Node::new).collect();
    let tree = Node::with_children(1, children);
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(traversal.pre_order_iterative(None), [&1, &2, &3, &4, &5, &6]);
    assert_eq!(traversal.post_order_iterative(None), [&2, &3, &4, &5, &6, &1]);
    // Root emitted between the first child and the rest
    assert_eq!(traversal.in_order_recursive(None), [&2, &1, &3, &4, &5, &6]);
    assert_eq!(traversal.in_order_iterative(None), [&2, &1, &3, &4, &5, &6]);
    assert_eq!(traversal.level_order_recursive(None), [&1, &2, &3, &4, &5, &6]);
    assert_eq!(traversal.level_order_iterative(None), [&1, &2, &3, &4, &5, &6]);
}

// Levels must come out left to right even when a deep-left subtree is
// recursed into long before its right-hand neighbors are first seen.
#[test]
fn level_order_buckets_fill_out_of_step() {
    let tree = Node::with_children(
        1,
        [
            Node::with_children(2, [Node::with_children(4, [Node::new(6)].into())].into()),
            Node::with_children(3, [Node::new(5)].into()),
        ]
        .into(),
    );
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(traversal.level_order_recursive(None), [&1, &2, &3, &4, &5, &6]);
    assert_eq!(
        traversal.level_order_recursive(None),
        traversal.level_order_iterative(None),
    );
}

#[test]
fn explicit_start_overrides_root() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    let subtree = tree.children.first();
    assert_eq!(traversal.pre_order_recursive(subtree), [&2, &5, &6]);
    assert_eq!(traversal.in_order_iterative(subtree), [&5, &2, &6]);
    assert_eq!(traversal.level_order_iterative(subtree), [&2, &5, &6]);
}

#[test]
fn repeat_calls_are_deterministic() {
    let tree = sample_tree();
    let traversal = Traversal::new(Some(&tree));
    assert_eq!(
        traversal.in_order_iterative(None),
        traversal.in_order_iterative(None),
    );
    assert_eq!(
        traversal.level_order_recursive(None),
        traversal.level_order_recursive(None),
    );
}
