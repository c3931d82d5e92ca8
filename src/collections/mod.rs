//! Keyed collection types.
//!
//! # Purpose
//! The hash tables here share one hash function and differ only in how they resolve collisions,
//! which makes it possible to compare the policies side by side. The trees share one node layout
//! and differ only in whether they rebalance after a mutation.
//!
//! # Method
//! Capabilities that vary between instances (hashing, stringifying keys, comparing keys) are
//! provided as type parameters with sensible defaults, so no table or tree carries ambient global
//! state.

#[cfg(feature = "compare")]
pub mod compare;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
