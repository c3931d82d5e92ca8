//! A module containing [`SeparateChainingTable`].
//!
//! [`SeparateChainingTable`] is also re-exported under the parent module.

mod separate_chaining;
mod tests;

pub use separate_chaining::*;
