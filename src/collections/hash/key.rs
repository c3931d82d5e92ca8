use std::fmt::Display;

/// A type which can be used as a table key.
///
/// Numeric primitives bypass hashing entirely: their [`numeric_slot`](TableKey::numeric_slot) is
/// used as the home slot unchanged. Every other key is stringified and hashed. Negative integers
/// have no numeric slot, so they are hashed through their string form instead.
pub trait TableKey: Eq {
    /// Returns the slot this key occupies without hashing, if it is numeric.
    fn numeric_slot(&self) -> Option<usize> {
        None
    }
}

macro_rules! impl_numeric_key {
    ($($t:ty),*) => {
        $(
            impl TableKey for $t {
                fn numeric_slot(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_numeric_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TableKey for str {}
impl TableKey for String {}
impl TableKey for Box<str> {}
impl TableKey for char {}
impl TableKey for bool {}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn numeric_slot(&self) -> Option<usize> {
        (**self).numeric_slot()
    }
}

/// Converts a key into the canonical string used to hash it (and, for a
/// [`Dictionary`](super::Dictionary), to identify it).
///
/// Any `Fn(&K) -> String` is a stringifier.
pub trait Stringifier<K: ?Sized> {
    fn stringify(&self, key: &K) -> String;
}

/// Stringifies keys through their [`Display`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStringifier;

impl<K: Display + ?Sized> Stringifier<K> for DisplayStringifier {
    fn stringify(&self, key: &K) -> String {
        key.to_string()
    }
}

impl<K: ?Sized, F: Fn(&K) -> String> Stringifier<K> for F {
    fn stringify(&self, key: &K) -> String {
        self(key)
    }
}
