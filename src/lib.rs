//! Implements the classical traversal orders for pointer-linked tree data structures.
//!
//! ------------------------
//!
//! # Overview
//! Treewalk provides the four classical traversal orders — pre-order, in-order, post-order and level-order — over two kinds of caller-built trees: *binary trees*, whose nodes have two optional children, and *freeform trees*, whose nodes have an arbitrary ordered list of children. Trees are plain owned structures: a node exclusively owns its children through [`Box`]/[`Vec`] links, and traversal borrows the tree without ever mutating it, carrying node values out by reference so that the value type needs no trait bounds whatsoever.
//!
//! Every depth-first order comes in two forms which are guaranteed to produce identical sequences:
//! - a *recursive* form, which reads as the textbook definition but consumes call-stack space proportional to the height of the tree;
//! - an *iterative* form, which simulates the recursion with an explicit stack and is therefore safe on deeply unbalanced trees.
//!
//! An absent root or starting node is an ordinary input, not an error: every operation is total and simply returns an empty sequence. No operation validates the structure either — the trees are assumed to be acyclic, which the ownership-based links make impossible to violate without interior mutability.
//!
//! # Traversal contexts
//! Each tree kind has a `Traversal` context type: a `Copy` wrapper around an optional root reference. Operations take an optional starting node and fall back to the context's root when it's absent, mirroring how traversal routines are usually invoked — either on the whole tree or on a subtree of interest.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. The crate requires an allocator either way.
//! - `binary_tree` (**enabled by default**) — enables the [`binary_tree`] module.
//! - `freeform_tree` (**enabled by default**) — enables the [`freeform_tree`] module.
//! - `smallvec` — backs the explicit stacks of the iterative traversals with [`SmallVec`], keeping shallow traversals entirely off the heap.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//!
//! [`binary_tree`]: binary_tree/index.html " "
//! [`freeform_tree`]: freeform_tree/index.html " "
//! [`Box`]: https://doc.rust-lang.org/alloc/boxed/struct.Box.html " "
//! [`Vec`]: https://doc.rust-lang.org/alloc/vec/struct.Vec.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::Traversal as BinaryTreeTraversal;

#[cfg(feature = "freeform_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
pub mod freeform_tree;
#[cfg(feature = "freeform_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
pub use freeform_tree::Traversal as FreeformTreeTraversal;

/// A prelude for using Treewalk, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        Node as BinaryTreeNode,
        Traversal as BinaryTreeTraversal,
    };
    #[cfg(feature = "freeform_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
    #[doc(no_inline)]
    pub use crate::freeform_tree::{
        Node as FreeformTreeNode,
        Traversal as FreeformTreeTraversal,
    };
}

pub(crate) mod util;
