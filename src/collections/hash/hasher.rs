use super::{DisplayStringifier, Stringifier, TableKey};

/// The modulus applied by [`lose_lose_code`].
pub const LOSE_LOSE_MODULUS: usize = 37;

/// The modulus applied by [`djb2_code`].
pub const DJB2_MODULUS: usize = 1013;

const DJB2_SEED: usize = 5381;

/// Maps a key to its home slot.
///
/// Implementations must be deterministic: the same key always maps to the same slot for the
/// lifetime of a table, otherwise stored entries become unreachable.
pub trait SlotHasher<K: ?Sized> {
    fn slot(&self, key: &K) -> usize;
}

/// The "lose lose" hash: numeric keys map to themselves, anything else is stringified and the
/// UTF-16 code units of the string are summed, modulo [`LOSE_LOSE_MODULUS`].
///
/// This is a deliberately poor hash function. Anagrams always collide and there are only 37
/// possible slots for non-numeric keys, which makes it useful for observing collision handling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoseLose<S = DisplayStringifier> {
    stringifier: S,
}

impl<S> LoseLose<S> {
    /// Creates a lose lose hasher which stringifies keys with the provided `stringifier`.
    pub const fn with_stringifier(stringifier: S) -> LoseLose<S> {
        LoseLose { stringifier }
    }
}

impl<K: TableKey + ?Sized, S: Stringifier<K>> SlotHasher<K> for LoseLose<S> {
    fn slot(&self, key: &K) -> usize {
        key.numeric_slot()
            .unwrap_or_else(|| lose_lose_code(&self.stringifier.stringify(key)))
    }
}

/// Sums the UTF-16 code units of `tag`, modulo [`LOSE_LOSE_MODULUS`].
pub fn lose_lose_code(tag: &str) -> usize {
    tag.encode_utf16()
        .fold(0_usize, |hash, unit| hash.wrapping_add(unit as usize))
        % LOSE_LOSE_MODULUS
}

/// The djb2 hash: numeric keys map to themselves, anything else is stringified and folded with
/// `hash * 33 + unit` from a seed of 5381, modulo [`DJB2_MODULUS`].
///
/// Spreads keys far better than [`LoseLose`] while keeping the same numeric bypass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2<S = DisplayStringifier> {
    stringifier: S,
}

impl<S> Djb2<S> {
    /// Creates a djb2 hasher which stringifies keys with the provided `stringifier`.
    pub const fn with_stringifier(stringifier: S) -> Djb2<S> {
        Djb2 { stringifier }
    }
}

impl<K: TableKey + ?Sized, S: Stringifier<K>> SlotHasher<K> for Djb2<S> {
    fn slot(&self, key: &K) -> usize {
        key.numeric_slot()
            .unwrap_or_else(|| djb2_code(&self.stringifier.stringify(key)))
    }
}

/// Folds the UTF-16 code units of `tag` with `hash * 33 + unit`, modulo [`DJB2_MODULUS`].
/// Intermediate values wrap on overflow.
pub fn djb2_code(tag: &str) -> usize {
    tag.encode_utf16()
        .fold(DJB2_SEED, |hash, unit| hash.wrapping_mul(33).wrapping_add(unit as usize))
        % DJB2_MODULUS
}
