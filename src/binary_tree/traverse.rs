use alloc::{collections::VecDeque, vec::Vec};
use super::Node;
use crate::util::Stack;

/// A traversal context for a binary tree.
///
/// This is a lightweight `Copy` wrapper around an optional root reference — it owns nothing, and the caller retains ownership of the tree for the whole lifetime of the context. Its only job is to supply a default starting node to the traversal operations: every operation takes an `Option`al starting node and falls back to the stored root when it's absent. When neither is present, the operations return an empty sequence — an absent tree is an ordinary input, not an error.
///
/// All operations borrow the tree immutably, recompute from scratch on every call and return the visited values as a [`Vec`] of references, in visitation order.
///
/// # Example
/// ```rust
/// use treewalk::binary_tree::{Node, Traversal};
///
/// //         1
/// //       /   \
/// //      2     3
/// //     / \
/// //    4   5
/// let tree = Node::with_children(
///     1,
///     Some(Node::with_children(2, Some(Node::new(4)), Some(Node::new(5)))),
///     Some(Node::new(3)),
/// );
/// let traversal = Traversal::new(Some(&tree));
///
/// assert_eq!(traversal.pre_order_recursive(None),  [&1, &2, &4, &5, &3]);
/// assert_eq!(traversal.in_order_recursive(None),   [&4, &2, &5, &1, &3]);
/// assert_eq!(traversal.post_order_recursive(None), [&4, &5, &2, &3, &1]);
/// assert_eq!(traversal.level_order(None),          [&1, &2, &3, &4, &5]);
///
/// // An explicit starting node overrides the stored root:
/// let subtree = tree.left.as_deref();
/// assert_eq!(traversal.pre_order_recursive(subtree), [&2, &4, &5]);
/// ```
///
/// [`Vec`]: https://doc.rust-lang.org/alloc/vec/struct.Vec.html " "
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

    /// Performs a *pre-order* traversal (root, left, right) in its recursive form.
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
    /// Performs a *pre-order* traversal (root, left, right) in its iterative form.
    ///
    /// Simulates the recursion with an explicit stack seeded with the starting node; each popped node is visited and then has its right child pushed before its left one, so that the left subtree is popped — and thus visited — first.
    pub fn pre_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack = Stack::new();
        if let Some(node) = start.or(self.root) {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        result
    }

    /// Performs an *in-order* traversal (left, root, right) in its recursive form.
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
    /// Performs an *in-order* traversal (left, root, right) in its iterative form.
    ///
    /// Walks down the left spine pushing every node onto an explicit stack, then pops a node, visits it and continues down the left spine of its right child. This yields the same sequence as the recursive form on every tree shape, including chains made purely of left or purely of right children.
    pub fn in_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack = Stack::new();
        let mut current = start.or(self.root);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    result.push(&node.value);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        result
    }

    /// Performs a *post-order* traversal (left, right, root) in its recursive form.
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
    /// Performs a *post-order* traversal (left, right, root) in its iterative form.
    ///
    /// Runs a pre-order-like traversal which pushes the left child before the right one (so the right subtree pops first), records each visitation onto an output sequence, and finally reverses that sequence to obtain left-right-root order.
    pub fn post_order_iterative(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut stack = Stack::new();
        if let Some(node) = start.or(self.root) {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            for child in node.children() {
                stack.push(child);
            }
        }
        result.reverse();
        result
    }

    /// Performs a *level-order* (breadth-first) traversal, yielding values top to bottom and left to right within each level.
    ///
    /// Iterative by necessity: a queue is seeded with the starting node, and each dequeued node is visited and has its left and then right child enqueued.
    pub fn level_order(self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(node) = start.or(self.root) {
            queue.push_back(node);
        }
        while let Some(node) = queue.pop_front() {
            result.push(&node.value);
            for child in node.children() {
                queue.push_back(child);
            }
        }
        result
    }
}

fn pre_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    result.push(&node.value);
    if let Some(left) = node.left.as_deref() {
        pre_order_into(left, result);
    }
    if let Some(right) = node.right.as_deref() {
        pre_order_into(right, result);
    }
}
fn in_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    if let Some(left) = node.left.as_deref() {
        in_order_into(left, result);
    }
    result.push(&node.value);
    if let Some(right) = node.right.as_deref() {
        in_order_into(right, result);
    }
}
fn post_order_into<'a, T>(node: &'a Node<T>, result: &mut Vec<&'a T>) {
    if let Some(left) = node.left.as_deref() {
        post_order_into(left, result);
    }
    if let Some(right) = node.right.as_deref() {
        post_order_into(right, result);
    }
    result.push(&node.value);
}
