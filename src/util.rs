//! Storage for the explicit stacks used by the iterative traversal forms.

#[cfg(feature = "smallvec")]
pub(crate) const INLINE_STACK_SIZE: usize = 128;

/// A LIFO sequence used to simulate the call stack in the iterative traversals.
///
/// With the `smallvec` feature enabled, stacks of up to `INLINE_STACK_SIZE` elements never touch the heap, which covers every tree of height below that bound.
#[cfg(feature = "smallvec")]
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type Stack<T> = alloc::vec::Vec<T>;
