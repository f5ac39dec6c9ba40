use alloc::{collections::VecDeque, vec::Vec};
use super::Node;
use crate::util::Stack;

/// A traversal context for a freeform tree.
///
/// The calling convention is identical to the binary [`Traversal`] context: a `Copy` wrapper around an optional root reference which owns nothing, with every operation taking an `Option`al starting node, falling back to the stored root, and returning an empty sequence when neither is present.
///
/// Pre-order, post-order and level-order generalize to multi-child nodes in the obvious way, with children always visited in list order. In-order has no canonical definition for more than two children; the generalization implemented here is: a childless node's value is the entire result, and otherwise the first child's subtree is visited, then the node's own value, then the remaining children's subtrees in list order. See [`in_order_recursive`] for details.
///
/// # Example
/// ```rust
/// use treewalk::freeform_tree::{Node, Traversal};
///
/// //          1
/// //        / | \
/// //       2  3  4
/// //      / \     \
/// //     5   6     7
/// let tree = Node::with_children(1, vec![
///     Node::with_children(2, vec![Node::new(5), Node::new(6)]),
///     Node::new(3),
///     Node::with_children(4, vec![Node::new(7)]),
/// ]);
/// let traversal = Traversal::new(Some(&tree));
///
/// assert_eq!(traversal.pre_order_recursive(None),    [&1, &2, &5, &6, &3, &4, &7]);
/// assert_eq!(traversal.post_order_recursive(None),   [&5, &6, &2, &3, &7, &4, &1]);
/// assert_eq!(traversal.in_order_recursive(None),     [&5, &2, &6, &1, &3, &7, &4]);
/// assert_eq!(traversal.level_order_iterative(None),  [&1, &2, &3, &4, &5, &6, &7]);
/// ```
///
/// [`Traversal`]: ../binary_tree/struct.Traversal.html " "
/// [`in_order_recursive`]: #method.in_order_recursive " "
#[derive(Debug, Hash)]
pub struct Traversal<'a, T> {
    root: Option<&'a Node<T>>,
}
impl<T> Copy for Traversal<'_, T> {}
// Not derived because the derive would also demand `T: Clone`, while the
// context only ever copies the reference
#[allow(clippy::expl_impl_clone_on_copy)]
impl<T> Clone for Traversal<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
/// The default context has no root, so operations invoked without an explicit starting node return an empty sequence.
impl<T> Default for Traversal<'_, T> {
    #[inline(always)]
    fn default() -> Self {
        Self { root: None }
    }
}
impl<'a, T> Traversal<'a, T> {
    /// Creates a traversal context with the specified default root node.
    #[inline(always)]
    pub const fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
    /// Returns the stored default root node, if any.
    #[inline(always)]
    pub const fn root(self) -> Option<&'a Node<T>> {
        self.root
    }

    /// Performs a *pre-order* traversal (node first, then each child subtree in list order) in its recursive form.
    ///
    /// Consumes call-stack space proportional to the height of the tree — for deeply unbalanced trees, prefer [`pre_order_iterative`], which produces the exact same sequence.
    ///
    /// [`pre_order_iterative`]: #method.pre_order_iterative " "
    pub fn pre_order_recursive(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        if let Some(node) = start.or(self.root) {
            pre_order_into(node, &mut result);
        }
        result
    }
    /// Performs a *pre-order* traversal (node first, then each child subtree in list order) in its iterative form.
    ///
    /// Children are pushed onto the explicit stack in reverse list order, so that after the stack-pop reversal they are visited left to right.
    pub fn pre_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack = Stack::new();
        if let Some(node) = start.or(self.root) {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Performs a generalized *in-order* traversal in its recursive form.
    ///
    /// N-ary trees have no canonical in-order; the definition used throughout this crate is:
    /// - a node without children contributes just its own value;
    /// - otherwise, the first child's subtree is visited, then the node's own value, then each remaining child's subtree in list order.
    ///
    /// On trees whose nodes have at most two children this coincides with binary in-order, with a lone child playing the left role.
    ///
    /// Consumes call-stack space proportional to the height of the tree — for deeply unbalanced trees, prefer [`in_order_iterative`], which produces the exact same sequence.
    ///
    /// [`in_order_iterative`]: #method.in_order_iterative " "
    pub fn in_order_recursive(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        if let Some(node) = start.or(self.root) {
            in_order_into(node, &mut result);
        }
        result
    }
    /// Performs a generalized *in-order* traversal (see [`in_order_recursive`] for the definition) in its iterative form.
    ///
    /// The explicit stack holds a small state record per node — the position of the next child to descend into, and whether the node's own value has been emitted — rather than a bare node reference. A node's value is emitted exactly once: immediately if it has no children, otherwise after its first child's subtree completes and before its second one begins.
    ///
    /// [`in_order_recursive`]: #method.in_order_recursive " "
    pub fn in_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack: Stack<InOrderFrame<'a, T>> = Stack::new();
        if let Some(node) = start.or(self.root) {
            stack.push(InOrderFrame::new(node));
        }
        while let Some(frame) = stack.last_mut() {
            if frame.node.children.is_empty() {
                if !frame.visited_root {
                    result.push(&frame.node.value);
                }
                stack.pop();
            } else if !frame.visited_root && frame.child_cursor == 1 {
                // The first child's subtree has just completed
                result.push(&frame.node.value);
                frame.visited_root = true;
            } else if frame.child_cursor < frame.node.children.len() {
                let child = &frame.node.children[frame.child_cursor];
                frame.child_cursor += 1;
                stack.push(InOrderFrame::new(child));
            } else {
                stack.pop();
            }
        }
        result
    }

    /// Performs a *post-order* traversal (each child subtree in list order, then the node itself) in its recursive form.
    ///
    /// Consumes call-stack space proportional to the height of the tree — for deeply unbalanced trees, prefer [`post_order_iterative`], which produces the exact same sequence.
    ///
    /// [`post_order_iterative`]: #method.post_order_iterative " "
    pub fn post_order_recursive(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        if let Some(node) = start.or(self.root) {
            post_order_into(node, &mut result);
        }
        result
    }
    /// Performs a *post-order* traversal (each child subtree in list order, then the node itself) in its iterative form.
    ///
    /// The traversal stack pushes children in forward list order (so the rightmost subtree pops first), each visitation is recorded onto an output sequence, and that sequence is reversed at the end to restore children-then-parent, left-to-right order.
    pub fn post_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack = Stack::new();
        if let Some(node) = start.or(self.root) {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            for child in &node.children {
                stack.push(child);
            }
        }
        result.reverse();
        result
    }

    /// Performs a *level-order* (breadth-first) traversal in its recursive form, yielding values top to bottom and left to right within each level.
    ///
    /// Depth-first recursion carries a depth counter and accumulates values into per-depth buckets, growing the bucket list lazily as deeper levels are first reached; the buckets are then concatenated in depth order. Produces the exact same sequence as [`level_order_iterative`].
    ///
    /// [`level_order_iterative`]: #method.level_order_iterative " "
    pub fn level_order_recursive(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut levels: Vec<Vec<&'a T>> = Vec::new();
        if let Some(node) = start.or(self.root) {
            level_order_into(node, 0, &mut levels);
        }
        let mut result = Vec::new();
        for level in levels {
            result.extend(level);
        }
        result
    }
    /// Performs a *level-order* (breadth-first) traversal in its iterative form, yielding values top to bottom and left to right within each level.
    ///
    /// A queue is seeded with the starting node, and each dequeued node is visited and has all of its children enqueued in list order.
    pub fn level_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(node) = start.or(self.root) {
            queue.push_back(node);
        }
        while let Some(node) = queue.pop_front() {
            result.push(&node.value);
            for child in &node.children {
                queue.push_back(child);
            }
        }
        result
    }
}

/// Per-node traversal state for the iterative generalized in-order.
struct InOrderFrame<'a, T> {
    node: &'a Node<T>,
    /// Position of the next child to descend into.
    child_cursor: usize,
    /// Whether the node's own value has been emitted yet.
    visited_root: bool,
}
impl<'a, T> InOrderFrame<'a, T> {
    #[inline(always)]
    const fn new(node: &'a Node<T>) -> Self {
        Self {
            node,
            child_cursor: 0,
            visited_root: false,
        }
    }
}

fn pre_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    result.push(&node.value);
    for child in &node.children {
        pre_order_into(child, result);
    }
}
fn in_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    if node.children.is_empty() {
        result.push(&node.value);
        return;
    }
    in_order_into(&node.children[0], result);
    result.push(&node.value);
    for child in &node.children[1..] {
        in_order_into(child, result);
    }
}
fn post_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    for child in &node.children {
        post_order_into(child, result);
    }
    result.push(&node.value);
}
fn level_order_into<'a, T>(node: &'a Node<T>, depth: usize, levels: &mut Vec<Vec<&'a T>>) {
    if levels.len() == depth {
        levels.push(Vec::new());
    }
    levels[depth].push(&node.value);
    for child in &node.children {
        level_order_into(child, depth + 1, levels);
    }
}
