//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail. This module implements all four classical traversal orders over such trees — see [`Traversal`] for the full list of operations.
//!
//! # Example
//! ```rust
//! use treewalk::binary_tree::{Node, Traversal};
//!
//! // Trees are built by the caller, leaves first:
//! let tree = Node::with_children(
//!     "+",
//!     Some(Node::new("a")),
//!     Some(Node::with_children("*", Some(Node::new("b")), Some(Node::new("c")))),
//! );
//!
//! // The context only borrows the tree; `tree` stays fully owned by us.
//! let traversal = Traversal::new(Some(&tree));
//!
//! // In-order visits the left subtree, the node itself, then the right subtree,
//! // which for an expression tree recovers the infix spelling:
//! assert_eq!(traversal.in_order_recursive(None), [&"a", &"+", &"b", &"*", &"c"]);
//! // Both forms of every order agree:
//! assert_eq!(traversal.in_order_iterative(None), traversal.in_order_recursive(None));
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`Traversal`]: struct.Traversal.html " "

mod node;
mod traverse;

pub use node::Node;
pub use traverse::Traversal;
