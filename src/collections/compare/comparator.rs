use std::cmp::Ordering;

use derive_more::{Display, IsVariant};

/// The result of comparing two values.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl Comparison {
    /// Returns the comparison as seen from the other operand.
    pub const fn reverse(self) -> Comparison {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::Equal => Comparison::Equal,
            Comparison::Greater => Comparison::Less,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(value: Comparison) -> Self {
        match value {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}

/// A three-way comparison and equality capability over `T`.
///
/// It is a logic error for `compare` to be inconsistent (for example, for `compare(a, b)` and
/// `compare(b, a)` to both be [`Less`](Comparison::Less)) and collections make no guarantees about
/// their contents if it is.
///
/// Any `Fn(&T, &T) -> Comparison` is a comparator, which makes one-off orderings easy to provide:
///
/// ```
/// # use keyed_collections::collections::compare::{Comparator, Comparison};
/// let by_len = |a: &&str, b: &&str| Comparison::from(a.len().cmp(&b.len()));
/// assert_eq!(by_len.compare(&"ab", &"c"), Comparison::Greater);
/// assert!(by_len.equals(&"ab", &"cd"));
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Comparison;

    /// Returns true if `a` and `b` are considered equal. Defaults to `compare(a, b)` returning
    /// [`Equal`](Comparison::Equal).
    fn equals(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_equal()
    }
}

/// Orders values by their [`Ord`] implementation and compares them with [`Eq`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Comparison {
        a.cmp(b).into()
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Comparison> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Comparison {
        self(a, b)
    }
}
