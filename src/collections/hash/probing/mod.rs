//! A module containing the open addressing tables, [`LinearProbingTable`] and
//! [`LinearProbingLazyTable`], which store one entry per slot and probe forward on a collision.
//!
//! They differ in how they keep probe sequences intact across removals: the eager table moves
//! later members of the cluster back into the freed slot, while the lazy table leaves a tombstone
//! behind.
//!
//! Both tables are also re-exported under the parent module.

mod lazy;
mod linear_probing;

pub use lazy::*;
pub use linear_probing::*;
