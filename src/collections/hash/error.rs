use derive_more::{Display, Error, IsVariant};

/// The reasons a table can refuse to store an entry.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PutError {
    #[display("Unable to store an entry without a key!")]
    MissingKey,
    #[display("Unable to store an entry without a value!")]
    MissingValue,
    #[display("Probing for a free slot ran past the largest slot index!")]
    SlotOverflow,
}

/// Unpacks an optional key-value pair, rejecting it if either half is absent.
pub(crate) fn require_pair<K, V>(key: Option<K>, value: Option<V>) -> Result<(K, V), PutError> {
    match (key, value) {
        (None, _) => Err(PutError::MissingKey),
        (_, None) => Err(PutError::MissingValue),
        (Some(key), Some(value)) => Ok((key, value)),
    }
}
