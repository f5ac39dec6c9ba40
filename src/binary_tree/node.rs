use alloc::boxed::Box;
use arrayvec::ArrayVec;

/// A node of a binary tree.
///
/// Nodes own their children exclusively: linking is done by plain assignment to the [`left`]/[`right`] fields, and dropping a node drops its entire subtree. There are no parent links and no shared ownership, so a structure built out of these nodes is a strict tree by construction.
///
/// # Example
/// ```rust
/// use treewalk::binary_tree::Node;
///
/// // Build the two leaves first, then hand them to their parent:
/// let mut root = Node::with_children(1, Some(Node::new(2)), Some(Node::new(3)));
/// // Fields are public, so deeper links can be assigned directly:
/// if let Some(left) = root.left.as_deref_mut() {
///     left.left = Some(Box::new(Node::new(4)));
/// }
///
/// assert!(!root.is_leaf());
/// assert_eq!(root.children().len(), 2);
/// ```
///
/// [`left`]: #structfield.left " "
/// [`right`]: #structfield.right " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// The value carried by the node. Fully opaque to the traversal operations — it is only ever borrowed and carried through, never inspected or compared.
    pub value: T,
    /// The left child, if any.
    pub left: Option<Box<Node<T>>>,
    /// The right child, if any.
    pub right: Option<Box<Node<T>>>,
}
impl<T> Node<T> {
    /// Creates a childless node with the specified value.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    /// Creates a node with the specified value and children, boxing the children in the process.
    #[inline]
    pub fn with_children(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline(always)]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Returns the node's present children packed into a fixed-capacity sequence, the left one first.
    ///
    /// A lone child occupies the first slot regardless of which field it came from.
    #[inline]
    pub fn children(&self) -> ArrayVec<[&Self; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left) = self.left.as_deref() {
            children.push(left);
        }
        if let Some(right) = self.right.as_deref() {
            children.push(right);
        }
        children
    }
}
