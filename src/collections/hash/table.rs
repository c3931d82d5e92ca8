use std::fmt::{self, Display, Formatter};

/// The operations shared by every table in this module, regardless of collision policy.
///
/// Each table also provides these as inherent methods (usually with more flexible key borrowing),
/// this trait exists so that code can be written once against any of them.
pub trait Table<K, V> {
    /// Stores `value` under `key`, returning true if the entry was stored.
    fn put(&mut self, key: K, value: V) -> bool;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes the value stored under `key`, returning true if there was one.
    fn remove(&mut self, key: &K) -> bool;

    /// Returns the number of live entries in the table.
    fn size(&self) -> usize;

    /// Returns true if the table contains no live entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every entry from the table.
    fn clear(&mut self);
}

/// Writes `(slot, content)` pairs in the `{slot => content}, ...` form shared by the tables'
/// [`Display`] implementations.
pub(crate) fn fmt_slots<'a, T, I>(f: &mut Formatter<'_>, slots: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = (usize, &'a T)>,
{
    let mut slots = slots.into_iter();
    if let Some((index, content)) = slots.next() {
        write!(f, "{{{index} => {content}}}")?;
    }
    for (index, content) in slots {
        write!(f, ", {{{index} => {content}}}")?;
    }
    Ok(())
}
