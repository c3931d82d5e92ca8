//! Hash tables over a sparse, unbounded slot space, plus the hashing capabilities they share.
//!
//! Every table maps a key to a home slot through a [`SlotHasher`] and then applies its own
//! collision policy:
//! - [`SeparateChainingTable`] keeps a [`LinkedList`](super::linked::LinkedList) of entries per
//!   slot.
//! - [`LinearProbingTable`] stores one entry per slot, probing forward on a collision and re-homing
//!   the rest of the cluster after a removal.
//! - [`LinearProbingLazyTable`] probes the same way but marks removed entries with a tombstone
//!   instead of moving anything.
//! - [`DirectTable`] has no collision policy at all: a colliding put replaces the resident entry.
//!
//! Slot indices are never wrapped or bounded by a capacity and the tables never resize. Numeric
//! keys hash to their own value, so a table holding the key `1_000_000` really does have a slot
//! with that index.
//!
//! [`Dictionary`] is the odd one out: it doesn't hash at all and instead identifies keys by their
//! stringified form, keeping entries in insertion order.
//!
//! All of the tables implement [`Table`], the common `put`/`get`/`remove`/`size` surface.

mod chaining;
mod dictionary;
mod direct;
mod entry;
mod error;
mod hasher;
mod key;
mod probing;
mod table;
mod tests;

pub use chaining::*;
pub use dictionary::*;
pub use direct::*;
pub use entry::*;
pub use error::*;
pub use hasher::*;
pub use key::*;
pub use probing::*;
pub use table::*;
