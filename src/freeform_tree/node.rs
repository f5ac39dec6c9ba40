use alloc::vec::Vec;

/// A node of a freeform tree.
///
/// Nodes own their children exclusively through the [`children`] list, whose order is semantically significant — it determines the order in which every traversal visits the subtrees. Linking is done by plain pushes/assignments into the list; there are no parent links and no shared ownership, so a structure built out of these nodes is a strict tree by construction.
///
/// # Example
/// ```rust
/// use treewalk::freeform_tree::Node;
///
/// let mut root = Node::new("Foo");
/// root.children.push(Node::new("Bar"));
/// root.children.push(Node::new("Baz"));
/// root.children.push(Node::new("Quux"));
///
/// assert!(!root.is_leaf());
/// assert_eq!(root.children.len(), 3);
/// ```
///
/// [`children`]: #structfield.children " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// The value carried by the node. Fully opaque to the traversal operations — it is only ever borrowed and carried through, never inspected or compared.
    pub value: T,
    /// The node's children, in visitation order.
    pub children: Vec<Node<T>>,
}
impl<T> Node<T> {
    /// Creates a node with the specified value and an empty children list.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
    /// Creates a node with the specified value and children.
    #[inline(always)]
    pub fn with_children(value: T, children: Vec<Self>) -> Self {
        Self { value, children }
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
