//! Three-way comparison, as consumed by the ordered collections.
//!
//! A [`Comparator`] is an explicit capability rather than a bound on the key type, so the same key
//! type can be ordered in different ways by different trees. [`NaturalOrder`] falls back to the
//! key's own [`Ord`] implementation and is the default everywhere a comparator is accepted.

mod comparator;

pub use comparator::*;
