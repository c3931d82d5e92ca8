#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod fmt;
#[cfg(test)]
pub mod log;
