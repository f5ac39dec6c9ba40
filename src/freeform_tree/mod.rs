//! Freeform trees, ones which don't impose any restrictions on the number of child nodes that a branch node can have.
//!
//! Nodes hold their children in an ordered list, and that order is what every traversal's "left to right" refers to. The four classical orders generalize to these trees almost verbatim; the one exception is in-order, which has no canonical N-ary definition — see [`Traversal::in_order_recursive`] for the generalization this module commits to.
//!
//! # Example
//! ```rust
//! use treewalk::freeform_tree::{Node, Traversal};
//!
//! let mut tree = Node::new("/");
//! tree.children.push(Node::with_children("usr", vec![
//!     Node::new("bin"),
//!     Node::new("lib"),
//! ]));
//! tree.children.push(Node::new("etc"));
//! tree.children.push(Node::new("home"));
//!
//! let traversal = Traversal::new(Some(&tree));
//! // Pre-order lists every directory before its contents:
//! assert_eq!(
//!     traversal.pre_order_recursive(None),
//!     [&"/", &"usr", &"bin", &"lib", &"etc", &"home"],
//! );
//! // Level-order lists them shallowest-first instead, and both of its
//! // implementations agree on every tree shape:
//! assert_eq!(
//!     traversal.level_order_recursive(None),
//!     traversal.level_order_iterative(None),
//! );
//! ```
//!
//! [`Traversal::in_order_recursive`]: struct.Traversal.html#method.in_order_recursive " "

mod node;
mod traverse;

pub use node::Node;
pub use traverse::Traversal;

#[cfg(test)]
mod tests;
